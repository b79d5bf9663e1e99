use contracts::domain::a001_user::aggregate::{UserFormData, UserRole, UserStatus};
use leptos::prelude::*;

use crate::shared::components::{FormInput, FormSelect};

fn role_options() -> Vec<(String, String)> {
    UserRole::ALL
        .iter()
        .map(|r| (r.code().to_string(), r.label().to_string()))
        .collect()
}

fn status_options() -> Vec<(String, String)> {
    UserStatus::ALL
        .iter()
        .map(|s| (s.code().to_string(), s.label().to_string()))
        .collect()
}

/// Fields of the user create/edit modal. Every edit emits a new draft.
#[component]
pub fn UserFormFields(
    #[prop(into)]
    form: Signal<UserFormData>,
    on_change: Callback<UserFormData>,
) -> impl IntoView {
    let edit = move |apply: fn(&mut UserFormData, String)| {
        Callback::new(move |value: String| {
            let mut draft = form.get_untracked();
            apply(&mut draft, value);
            on_change.run(draft);
        })
    };

    view! {
        <FormInput
            name="username"
            label="사용자명"
            placeholder="사용자명을 입력하세요"
            required=true
            value=Signal::derive(move || form.with(|f| f.username.clone().unwrap_or_default()))
            on_input=edit(|d, v| d.username = Some(v))
        />
        <FormInput
            name="email"
            label="이메일"
            placeholder="이메일을 입력하세요"
            input_type="email"
            required=true
            value=Signal::derive(move || form.with(|f| f.email.clone().unwrap_or_default()))
            on_input=edit(|d, v| d.email = Some(v))
        />
        <div class="form__row">
            <FormSelect
                name="role"
                label="역할"
                options=role_options()
                value=Signal::derive(move || form.with(|f| f.role.unwrap_or_default().code().to_string()))
                on_change=edit(|d, v| d.role = UserRole::from_code(&v))
                width="medium"
            />
            <FormSelect
                name="status"
                label="상태"
                options=status_options()
                value=Signal::derive(move || form.with(|f| f.status.unwrap_or_default().code().to_string()))
                on_change=edit(|d, v| d.status = UserStatus::from_code(&v))
                width="medium"
            />
        </div>
    }
}
