use crate::shared::icons::icon;
use leptos::prelude::*;

/// Previous/next pager with a "page / total" readout.
///
/// Pages are 1-based. Nothing renders while everything fits on one page.
#[component]
pub fn PaginationControls(
    #[prop(into)]
    current_page: Signal<usize>,
    #[prop(into)]
    total_pages: Signal<usize>,
    /// Receives the requested page; the caller clamps it
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let is_first = move || current_page.get() <= 1;
    let is_last = move || current_page.get() >= total_pages.get();

    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <div class="pagination-controls">
                <button
                    class="button button--secondary button--small pagination-btn"
                    on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1))
                    disabled=is_first
                >
                    {icon("chevron-left")}
                    "이전"
                </button>
                <span class="pagination-info">
                    {move || format!("{} / {}", current_page.get(), total_pages.get().max(1))}
                </span>
                <button
                    class="button button--secondary button--small pagination-btn"
                    on:click=move |_| on_page_change.run(current_page.get() + 1)
                    disabled=is_last
                >
                    "다음"
                    {icon("chevron-right")}
                </button>
            </div>
        </Show>
    }
}
