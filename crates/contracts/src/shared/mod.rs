pub mod actions;
pub mod badge;
pub mod error;
pub mod stats;
pub mod validation;
