//! Header cell that toggles the table sort when clicked

use leptos::prelude::*;
use thaw::*;

/// "60px" -> 60.0; anything else falls back to `default`
pub fn parse_px(width: Option<&str>, default: f64) -> f64 {
    width
        .and_then(|w| w.trim().strip_suffix("px"))
        .and_then(|n| n.trim().parse::<f64>().ok())
        .unwrap_or(default)
}

#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,
    /// Column key passed to `on_sort`
    sort_field: &'static str,
    /// Arrow of the active sort column, `None` elsewhere
    #[prop(into)]
    indicator: Signal<Option<&'static str>>,
    on_sort: Callback<&'static str>,
    #[prop(optional, default = 100.0)]
    min_width: f64,
) -> impl IntoView {
    view! {
        <TableHeaderCell resizable=true min_width=min_width class="resizable">
            <div
                class="table__sortable-header"
                class:table__sortable-header--active=move || indicator.get().is_some()
                style="cursor: pointer;"
                on:click=move |_| on_sort.run(sort_field)
            >
                {label}
                <span class="table__sort-indicator">
                    {move || indicator.get().unwrap_or("")}
                </span>
            </div>
        </TableHeaderCell>
    }
}
