use contracts::shared::badge::{
    payment_status_badge, priority_badge, status_badge, user_role_badge, BadgeMeta, BadgeVariant,
};
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl BadgeSize {
    fn class(self) -> &'static str {
        match self {
            BadgeSize::Small => "badge--small",
            BadgeSize::Medium => "badge--medium",
            BadgeSize::Large => "badge--large",
        }
    }
}

/// Badge with explicit variant or a domain code resolved through the mappers.
///
/// Domain props take precedence in this order: `meta`, `status`,
/// `user_role`, `priority`, `payment_status`. Children replace the mapped
/// label when given.
#[component]
pub fn Badge(
    #[prop(optional, into)]
    variant: MaybeProp<BadgeVariant>,
    #[prop(optional, into)]
    size: MaybeProp<BadgeSize>,
    #[prop(optional)]
    pill: bool,
    /// Already resolved style and label
    #[prop(optional, into)]
    meta: MaybeProp<BadgeMeta>,
    /// Content status code (published, draft, ...)
    #[prop(optional, into)]
    status: MaybeProp<String>,
    #[prop(optional, into)]
    user_role: MaybeProp<String>,
    #[prop(optional, into)]
    priority: MaybeProp<String>,
    #[prop(optional, into)]
    payment_status: MaybeProp<String>,
    #[prop(optional, into)]
    class: MaybeProp<String>,
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let resolved = move || {
        meta.get()
            .or_else(|| status.get().map(|c| status_badge(&c)))
            .or_else(|| user_role.get().map(|c| user_role_badge(&c)))
            .or_else(|| priority.get().map(|c| priority_badge(&c)))
            .or_else(|| payment_status.get().map(|c| payment_status_badge(&c)))
    };

    let variant_class = move || {
        let v = resolved()
            .map(|m| m.variant)
            .or_else(|| variant.get())
            .unwrap_or_default();
        format!("badge--{}", v.code())
    };
    let size_class = move || size.get().unwrap_or_default().class();
    let additional_class = move || class.get().unwrap_or_default();

    let content = match children {
        Some(children) => children().into_any(),
        None => (move || resolved().map(|m| m.label).unwrap_or_default()).into_any(),
    };

    view! {
        <span
            class=move || format!("badge {} {} {}", variant_class(), size_class(), additional_class())
            class:badge--pill=pill
        >
            {content}
        </span>
    }
}
