//! Types shared by every managed record type

pub mod entity_type;
pub mod record;

pub use entity_type::EntityType;
pub use record::{Record, RecordId, Records};
