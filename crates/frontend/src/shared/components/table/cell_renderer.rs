use crate::shared::table_engine::{Column, TableRecord};
use leptos::prelude::*;

/// Renders one cell of a record. Injected into `DataTable` per record type,
/// so the table itself never looks at concrete record types.
pub trait CellRenderer<T>: Send + Sync + 'static {
    fn render_cell(&self, record: &T, column: &Column) -> AnyView;
}

/// Shows the display form of the field
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainCellRenderer;

impl<T: TableRecord> CellRenderer<T> for PlainCellRenderer {
    fn render_cell(&self, record: &T, column: &Column) -> AnyView {
        record.field(column.key).display().into_any()
    }
}
