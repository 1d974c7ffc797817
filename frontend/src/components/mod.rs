pub mod background;
pub mod error;
pub mod layout;
