use leptos::prelude::*;

/// Bare select. `placeholder` adds an empty first option.
#[component]
pub fn Select(
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// (value, label) pairs
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    has_error: MaybeProp<bool>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <select
            id=select_id
            class=move || format!("form__select {}", additional_class())
            class:form__select--error=move || has_error.get().unwrap_or(false)
            disabled=move || disabled.get().unwrap_or(false)
            required=required
            on:change=move |ev| {
                if let Some(handler) = on_change {
                    handler.run(event_target_value(&ev));
                }
            }
        >
            {move || placeholder.get().map(|p| view! {
                <option value="" selected=move || value.get().is_empty()>{p}</option>
            })}
            <For
                each=move || options.get()
                key=|(val, _)| val.clone()
                children=move |(val, label)| {
                    let val_clone = val.clone();
                    let is_selected = move || value.get() == val_clone;
                    view! {
                        <option value=val selected=is_selected>
                            {label}
                        </option>
                    }
                }
            />
        </select>
    }
}
