use leptos::prelude::*;

#[component]
pub fn Checkbox(
    #[prop(into)]
    label: Signal<String>,
    #[prop(into)]
    checked: Signal<bool>,
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes for wrapper
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let checkbox_id = move || id.get().unwrap_or_default();
    let is_disabled = move || disabled.get().unwrap_or(false);
    let wrapper_class = move || format!("form__checkbox-wrapper {}", class.get().unwrap_or_default());

    view! {
        <div class=wrapper_class class:form__checkbox-wrapper--disabled=is_disabled>
            <input
                id=checkbox_id
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                disabled=is_disabled
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <label class="form__checkbox-label" for=checkbox_id>
                {label}
            </label>
        </div>
    }
}
