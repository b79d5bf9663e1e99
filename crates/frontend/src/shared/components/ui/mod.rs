pub mod badge;
pub mod button;
pub mod checkbox;
pub mod input;
pub mod label;
pub mod select;
pub mod textarea;

pub use badge::{Badge, BadgeSize};
pub use button::{Button, ButtonSize};
pub use checkbox::Checkbox;
pub use input::Input;
pub use label::Label;
pub use select::Select;
pub use textarea::Textarea;
