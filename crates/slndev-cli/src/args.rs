use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "slndev")]
#[command(about = "Open runnable-project logs and send desktop notifications", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory holding config.toml and transient scripts
    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find a runnable project in the working tree and open its logs
    Logs {
        /// Substring to match against discovered project paths
        project_name: Option<String>,

        /// Working directory to scan, probably the solution directory
        #[arg(long, short = 'p')]
        path: Option<PathBuf>,

        /// Offer a selection menu when no project name is given
        #[arg(long, short = 'i')]
        interactive: bool,
    },

    /// Send a desktop toast notification
    Notify {
        /// Notification title
        title: String,

        /// Additional message line
        #[arg(long, short = 'm')]
        message: Option<String>,

        /// Path to an icon shown with the toast
        #[arg(long)]
        icon: Option<String>,
    },

    /// Turn desktop notifications on or off
    Notifications {
        #[command(subcommand)]
        command: NotificationsCommand,
    },

    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum NotificationsCommand {
    /// Enable desktop notifications
    Enable,

    /// Disable desktop notifications
    Disable,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Write a default config.toml if none exists
    Init,

    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,
}
