pub mod aggregate;
pub mod rules;
pub mod stats;
pub mod validation;
