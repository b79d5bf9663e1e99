use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertVariant {
    Info,
    Success,
    Warning,
    Error,
    #[default]
    Default,
}

impl AlertVariant {
    pub fn icon(self) -> &'static str {
        match self {
            AlertVariant::Info => "ℹ️",
            AlertVariant::Success => "✓",
            AlertVariant::Warning => "⚠️",
            AlertVariant::Error => "✕",
            AlertVariant::Default => "•",
        }
    }

    fn class(self) -> &'static str {
        match self {
            AlertVariant::Info => "alert--info",
            AlertVariant::Success => "alert--success",
            AlertVariant::Warning => "alert--warning",
            AlertVariant::Error => "alert--error",
            AlertVariant::Default => "alert--default",
        }
    }
}

/// Inline message box. A close button appears when `on_close` is given.
#[component]
pub fn Alert(
    #[prop(optional)]
    variant: AlertVariant,
    #[prop(optional, into)]
    title: MaybeProp<String>,
    /// Hide the leading icon
    #[prop(optional)]
    no_icon: bool,
    #[prop(optional)]
    on_close: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("alert {}", variant.class()) role="alert">
            {(!no_icon).then(|| view! { <span class="alert__icon">{variant.icon()}</span> })}
            <div class="alert__content">
                {move || title.get().map(|t| view! { <div class="alert__title">{t}</div> })}
                <div class="alert__body">{children()}</div>
            </div>
            {on_close.map(|close| view! {
                <button class="alert__close" aria-label="닫기" on:click=move |_| close.run(())>
                    "×"
                </button>
            })}
        </div>
    }
}
