use leptos::prelude::*;

#[component]
pub fn Textarea(
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional)]
    required: bool,
    #[prop(optional)]
    rows: Option<u32>,
    #[prop(optional, into)]
    has_error: MaybeProp<bool>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let textarea_id = move || id.get().unwrap_or_default();
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();
    let textarea_rows = rows.unwrap_or(3);

    view! {
        <textarea
            id=textarea_id
            class=move || format!("form__textarea {}", additional_class())
            class:form__textarea--error=move || has_error.get().unwrap_or(false)
            placeholder=textarea_placeholder
            disabled=move || disabled.get().unwrap_or(false)
            required=required
            rows=textarea_rows
            prop:value=move || value.get()
            on:input=move |ev| {
                if let Some(handler) = on_input {
                    handler.run(event_target_value(&ev));
                }
            }
        ></textarea>
    }
}
