pub mod client;
pub mod lists;
pub mod types;

pub use client::*;
pub use lists::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
