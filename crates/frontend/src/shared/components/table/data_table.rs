//! Engine-backed table: search box, sortable headers, one page of rows,
//! pager. Transient engine state is owned by the caller.

use super::cell_renderer::CellRenderer;
use super::sortable_header_cell::{parse_px, SortableHeaderCell};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::list_utils::SearchInput;
use crate::shared::table_engine::{derive_page, Column, EngineOptions, EngineState, TableRecord};
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

#[component]
pub fn DataTable<T, R>(
    #[prop(into)]
    records: Signal<Vec<T>>,
    columns: Vec<Column>,
    renderer: R,
    #[prop(optional)]
    options: EngineOptions,
    #[prop(into)]
    engine: Signal<EngineState>,
    on_engine_change: Callback<EngineState>,
    #[prop(optional)]
    striped: bool,
    #[prop(optional)]
    bordered: bool,
    #[prop(optional)]
    hover: bool,
    #[prop(optional, into)]
    empty_message: MaybeProp<String>,
) -> impl IntoView
where
    T: TableRecord + Clone + Send + Sync + 'static,
    R: CellRenderer<T>,
{
    let columns = Arc::new(columns);
    let renderer = Arc::new(renderer);

    let page_info = {
        let columns = columns.clone();
        Memo::new(move |_| {
            records.with(|rs| {
                engine.with(|st| {
                    let page = derive_page(rs, &columns, st, &options);
                    (page.current_page, page.total_pages, page.filtered_count)
                })
            })
        })
    };
    let current_page = Signal::derive(move || page_info.get().0);
    let total_pages = Signal::derive(move || page_info.get().1);

    let on_sort = {
        let columns = columns.clone();
        Callback::new(move |key: &'static str| {
            let mut st = engine.get_untracked();
            if st.toggle_sort(key, &columns, &options) {
                on_engine_change.run(st);
            }
        })
    };

    let on_search = Callback::new(move |term: String| {
        let mut st = engine.get_untracked();
        st.set_search(term);
        on_engine_change.run(st);
    });

    let on_page_change = Callback::new(move |page: usize| {
        let mut st = engine.get_untracked();
        st.go_to_page(page, total_pages.get_untracked());
        on_engine_change.run(st);
    });

    let header_cells = columns
        .iter()
        .map(|column| {
            let min_width = parse_px(column.width, 100.0);
            if options.sortable && column.sortable {
                let key = column.key;
                view! {
                    <SortableHeaderCell
                        label=column.header
                        sort_field=key
                        indicator=Signal::derive(move || engine.with(|st| st.sort_indicator(key)))
                        on_sort=on_sort
                        min_width=min_width
                    />
                }
                .into_any()
            } else {
                let header = column.header;
                view! {
                    <TableHeaderCell min_width=min_width>{header}</TableHeaderCell>
                }
                .into_any()
            }
        })
        .collect_view();

    let rows = move || {
        records.with(|rs| {
            engine.with(|st| {
                let page = derive_page(rs, &columns, st, &options);
                page.visible_rows
                    .into_iter()
                    .map(|record| {
                        let cells = columns
                            .iter()
                            .map(|column| {
                                let cell = renderer.render_cell(record, column);
                                view! {
                                    <TableCell>
                                        <TableCellLayout>{cell}</TableCellLayout>
                                    </TableCell>
                                }
                            })
                            .collect_view();
                        view! { <TableRow>{cells}</TableRow> }
                    })
                    .collect_view()
            })
        })
    };

    let is_empty = move || page_info.get().2 == 0;
    let empty_text = move || empty_message.get().unwrap_or_else(|| "데이터가 없습니다".to_string());

    view! {
        <div class="data-table">
            {options.searchable.then(|| view! {
                <div class="data-table__toolbar">
                    <SearchInput
                        value=Signal::derive(move || engine.with(|st| st.search_term.clone()))
                        on_change=on_search
                    />
                </div>
            })}
            <div
                class="data-table__wrapper"
                class:data-table--striped=striped
                class:data-table--bordered=bordered
                class:data-table--hover=hover
            >
                <Table>
                    <TableHeader>
                        <TableRow>{header_cells}</TableRow>
                    </TableHeader>
                    <TableBody>{rows}</TableBody>
                </Table>
                <Show when=is_empty>
                    <div class="data-table__empty">{empty_text}</div>
                </Show>
            </div>
            <PaginationControls
                current_page=current_page
                total_pages=total_pages
                on_page_change=on_page_change
            />
        </div>
    }
}
