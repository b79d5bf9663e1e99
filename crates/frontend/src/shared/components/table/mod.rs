pub mod cell_renderer;
pub mod data_table;
pub mod sortable_header_cell;

pub use cell_renderer::{CellRenderer, PlainCellRenderer};
pub use data_table::DataTable;
pub use sortable_header_cell::SortableHeaderCell;
