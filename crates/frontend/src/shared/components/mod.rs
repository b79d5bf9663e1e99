pub mod alert;
pub mod card;
pub mod form_field;
pub mod page_header;
pub mod pagination_controls;
pub mod stat_card;
pub mod table;
pub mod ui;

pub use alert::{Alert, AlertVariant};
pub use card::{Card, CardVariant};
pub use form_field::{FormCheckbox, FormInput, FormSelect, FormTextarea};
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
pub use stat_card::{StatCard, StatsGrid};
pub use table::{CellRenderer, DataTable, PlainCellRenderer};
