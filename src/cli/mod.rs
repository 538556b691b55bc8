mod actions;
pub mod args;
mod config;
mod prep;
mod recap;
mod schedule;

pub use actions::{handle_actions_command, handle_format_command, handle_steps_command};
pub use args::{Cli, CliCommand};
pub use config::handle_config_command;
pub use prep::handle_prep_command;
pub use recap::handle_recap_command;
pub use schedule::handle_schedule_command;
