use contracts::domain::common::{EntityType, Record};
use contracts::shared::actions::{
    button_label_for_action, button_variant_for_action, is_action_enabled, ButtonVariant,
    EntityAction,
};
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Sm => "button--small",
            ButtonSize::Md => "",
            ButtonSize::Lg => "button--large",
        }
    }
}

/// Button with variants and sizes.
///
/// When `action` is set, the variant and the default label come from the
/// action mappers, and with a `record` the button is disabled whenever the
/// rules forbid that action on it.
#[component]
pub fn Button(
    #[prop(optional, into)]
    variant: MaybeProp<ButtonVariant>,
    #[prop(optional, into)]
    size: MaybeProp<ButtonSize>,
    #[prop(optional)]
    full_width: bool,
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Button type attribute
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional)]
    action: Option<EntityAction>,
    /// Names the entity in the create label
    #[prop(optional)]
    entity_type: Option<EntityType>,
    /// Record the action applies to
    #[prop(optional, into)]
    record: MaybeProp<Record>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let variant_class = move || {
        variant
            .get()
            .or_else(|| action.map(button_variant_for_action))
            .unwrap_or_default()
            .css_modifier()
    };
    let size_class = move || size.get().unwrap_or_default().class();
    let additional_class = move || class.get().unwrap_or_default();
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    let is_disabled = move || {
        let forbidden = match (action, record.get()) {
            (Some(action), Some(record)) => !is_action_enabled(action, &record),
            _ => false,
        };
        disabled.get().unwrap_or(false) || forbidden
    };

    let content = match children {
        Some(children) => children().into_any(),
        None => action
            .map(|a| button_label_for_action(a, entity_type))
            .unwrap_or_default()
            .into_any(),
    };

    view! {
        <button
            type=btn_type
            class=move || format!("button {} {} {}", variant_class(), size_class(), additional_class())
            class:button--full-width=full_width
            disabled=is_disabled
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {content}
        </button>
    }
}
