mod args;
mod commands;
mod handlers;
mod platform;
mod select;

pub use args::{Cli, Commands, ConfigCommand, NotificationsCommand};
pub use commands::run;
