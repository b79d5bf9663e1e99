//! Shared types and pure rules for the management dashboard.
//!
//! Everything here is plain data plus total functions, so the same rules run
//! in the browser (frontend) and in the record services (backend).

pub mod domain;
pub mod shared;
