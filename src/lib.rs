pub mod actions;
pub mod cli;
pub mod config;
pub mod error;
pub mod global;
pub mod prep;
pub mod recap;
pub mod schedule;
pub mod text_io;

pub use actions::{extract_action_items, Category, DisplayItem, Pending};
pub use error::InputError;
