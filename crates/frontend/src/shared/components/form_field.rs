//! Labelled form fields: atom plus label, required marker, error and help text

use super::ui::{Checkbox, Input, Label, Select, Textarea};
use leptos::prelude::*;

/// "small" | "medium" | "large" | "full" (default)
fn group_class(width: Option<String>) -> String {
    match width.as_deref() {
        Some(w @ ("small" | "medium" | "large")) => format!("form__group form__group--{}", w),
        _ => "form__group form__group--full".to_string(),
    }
}

fn field_messages(error: MaybeProp<String>, help_text: MaybeProp<String>) -> impl IntoView {
    move || match error.get().filter(|e| !e.is_empty()) {
        Some(e) => view! { <span class="form__error">{e}</span> }.into_any(),
        None => help_text
            .get()
            .map(|h| view! { <span class="form__help">{h}</span> })
            .into_any(),
    }
}

#[component]
pub fn FormInput(
    #[prop(into)]
    label: String,
    #[prop(into)]
    name: String,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional, into)]
    help_text: MaybeProp<String>,
    #[prop(optional, into)]
    width: MaybeProp<String>,
) -> impl IntoView {
    let has_error = Signal::derive(move || error.get().is_some_and(|e| !e.is_empty()));

    view! {
        <div class=move || group_class(width.get())>
            <Label for_id=name.clone() required=required>{label}</Label>
            <Input
                id=name
                value=value
                on_input=on_input
                input_type=input_type
                placeholder=placeholder
                required=required
                disabled=disabled
                has_error=has_error
            />
            {field_messages(error, help_text)}
        </div>
    }
}

#[component]
pub fn FormSelect(
    #[prop(into)]
    label: String,
    #[prop(into)]
    name: String,
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional, into)]
    help_text: MaybeProp<String>,
    #[prop(optional, into)]
    width: MaybeProp<String>,
) -> impl IntoView {
    let has_error = Signal::derive(move || error.get().is_some_and(|e| !e.is_empty()));

    view! {
        <div class=move || group_class(width.get())>
            <Label for_id=name.clone() required=required>{label}</Label>
            <Select
                id=name
                value=value
                on_change=on_change
                options=options
                placeholder=placeholder
                required=required
                disabled=disabled
                has_error=has_error
            />
            {field_messages(error, help_text)}
        </div>
    }
}

#[component]
pub fn FormTextarea(
    #[prop(into)]
    label: String,
    #[prop(into)]
    name: String,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional)]
    rows: Option<u32>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional, into)]
    help_text: MaybeProp<String>,
    #[prop(optional, into)]
    width: MaybeProp<String>,
) -> impl IntoView {
    let has_error = Signal::derive(move || error.get().is_some_and(|e| !e.is_empty()));

    view! {
        <div class=move || group_class(width.get())>
            <Label for_id=name.clone() required=required>{label}</Label>
            <Textarea
                id=name
                value=value
                on_input=on_input
                placeholder=placeholder
                rows=rows.unwrap_or(4)
                required=required
                disabled=disabled
                has_error=has_error
            />
            {field_messages(error, help_text)}
        </div>
    }
}

#[component]
pub fn FormCheckbox(
    #[prop(into)]
    label: String,
    #[prop(into)]
    name: String,
    #[prop(into)]
    checked: Signal<bool>,
    on_change: Callback<bool>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional, into)]
    help_text: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <Checkbox
                id=name
                label=label
                checked=checked
                on_change=on_change
                disabled=disabled
            />
            {field_messages(error, help_text)}
        </div>
    }
}
