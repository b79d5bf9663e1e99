use leptos::prelude::*;

/// Field label; `required` appends a red asterisk
#[component]
pub fn Label(
    #[prop(optional, into)]
    for_id: MaybeProp<String>,
    #[prop(optional)]
    required: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <label class="form__label" for=move || for_id.get().unwrap_or_default()>
            {children()}
            {required.then(|| view! { <span class="form__required">" *"</span> })}
        </label>
    }
}
