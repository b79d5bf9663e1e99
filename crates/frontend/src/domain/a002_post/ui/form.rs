use contracts::domain::a002_post::aggregate::{PostFormData, POST_CATEGORIES};
use leptos::prelude::*;

use crate::shared::components::{FormInput, FormSelect, FormTextarea};

fn category_options() -> Vec<(String, String)> {
    POST_CATEGORIES
        .iter()
        .map(|(code, label)| (code.to_string(), label.to_string()))
        .collect()
}

#[component]
pub fn PostFormFields(
    #[prop(into)]
    form: Signal<PostFormData>,
    on_change: Callback<PostFormData>,
) -> impl IntoView {
    let edit = move |apply: fn(&mut PostFormData, String)| {
        Callback::new(move |value: String| {
            let mut draft = form.get_untracked();
            apply(&mut draft, value);
            on_change.run(draft);
        })
    };

    view! {
        <FormInput
            name="title"
            label="제목"
            placeholder="게시글 제목을 입력하세요"
            required=true
            value=Signal::derive(move || form.with(|f| f.title.clone().unwrap_or_default()))
            on_input=edit(|d, v| d.title = Some(v))
        />
        <div class="form__row">
            <FormInput
                name="author"
                label="작성자"
                placeholder="작성자명"
                required=true
                value=Signal::derive(move || form.with(|f| f.author.clone().unwrap_or_default()))
                on_input=edit(|d, v| d.author = Some(v))
                width="medium"
            />
            <FormSelect
                name="category"
                label="카테고리"
                placeholder="카테고리 선택"
                options=category_options()
                value=Signal::derive(move || form.with(|f| f.category.clone().unwrap_or_default()))
                on_change=edit(|d, v| d.category = Some(v).filter(|c| !c.is_empty()))
                width="medium"
            />
        </div>
        <FormTextarea
            name="content"
            label="내용"
            placeholder="게시글 내용을 입력하세요"
            rows=6
            value=Signal::derive(move || form.with(|f| f.content.clone().unwrap_or_default()))
            on_input=edit(|d, v| d.content = Some(v))
        />
    }
}
