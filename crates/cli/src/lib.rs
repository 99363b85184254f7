//! Interactive text menu for the sweet shop.

pub mod args;
pub mod display;
pub mod menu;
pub mod sample;

pub use args::Args;
pub use menu::{Exit, Menu};
