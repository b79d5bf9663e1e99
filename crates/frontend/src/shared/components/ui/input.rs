use leptos::prelude::*;

/// Bare text input. Labels and messages come from `FormInput`.
#[component]
pub fn Input(
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "email", "password", ...
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional)]
    required: bool,
    /// Marks the field invalid
    #[prop(optional, into)]
    has_error: MaybeProp<bool>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <input
            id=input_id
            class=move || format!("form__input {}", additional_class())
            class:form__input--error=move || has_error.get().unwrap_or(false)
            type=input_t
            prop:value=move || value.get()
            placeholder=input_placeholder
            disabled=move || disabled.get().unwrap_or(false)
            required=required
            on:input=move |ev| {
                if let Some(handler) = on_input {
                    handler.run(event_target_value(&ev));
                }
            }
        />
    }
}
