use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardVariant {
    #[default]
    Default,
    Bordered,
    Elevated,
    Flat,
}

impl CardVariant {
    fn class(self) -> &'static str {
        match self {
            CardVariant::Default => "card--default",
            CardVariant::Bordered => "card--bordered",
            CardVariant::Elevated => "card--elevated",
            CardVariant::Flat => "card--flat",
        }
    }
}

#[component]
pub fn Card(
    #[prop(optional)]
    variant: CardVariant,
    #[prop(optional, into)]
    title: MaybeProp<String>,
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    /// Buttons on the right side of the header
    #[prop(optional, into)]
    header_actions: Option<ViewFn>,
    children: Children,
) -> impl IntoView {
    let has_header = move || title.get().is_some() || subtitle.get().is_some();

    view! {
        <div class=format!("card {}", variant.class())>
            <Show when=has_header>
                <div class="card__header">
                    <div class="card__heading">
                        {move || title.get().map(|t| view! { <h3 class="card__title">{t}</h3> })}
                        {move || subtitle.get().map(|s| view! { <p class="card__subtitle">{s}</p> })}
                    </div>
                    {header_actions.clone().map(|actions| view! {
                        <div class="card__actions">{actions.run()}</div>
                    })}
                </div>
            </Show>
            <div class="card__body">{children()}</div>
        </div>
    }
}
