pub mod dialog;
pub mod time;
