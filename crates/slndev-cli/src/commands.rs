use super::args::{Cli, Commands, ConfigCommand, NotificationsCommand};
use super::handlers;
use crate::platform::SystemOpener;
use anyhow::Result;
use slndev_core::{Config, resolve_data_path};
use std::path::Path;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_path(cli.config_dir.as_deref())?;

    let Some(command) = cli.command else {
        show_guidance(&data_dir);
        return Ok(());
    };

    match command {
        Commands::Logs {
            project_name,
            path,
            interactive,
        } => {
            let config = Config::load_from(&data_dir.join("config.toml"))?;
            handlers::logs::handle(&config, project_name, path, interactive, &SystemOpener)
        }

        Commands::Notify {
            title,
            message,
            icon,
        } => {
            let config = Config::load_from(&data_dir.join("config.toml"))?;
            handlers::notify::handle(
                &config,
                &data_dir,
                &title,
                message.as_deref(),
                icon.as_deref(),
            )
        }

        Commands::Notifications { command } => match command {
            NotificationsCommand::Enable => handlers::notifications::handle(&data_dir, true),
            NotificationsCommand::Disable => handlers::notifications::handle(&data_dir, false),
        },

        Commands::Config { command } => match command {
            ConfigCommand::Init => handlers::config::init(&data_dir),
            ConfigCommand::Show => handlers::config::show(&data_dir),
            ConfigCommand::Path => handlers::config::path(&data_dir),
        },
    }
}

fn show_guidance(data_dir: &Path) {
    let config_exists = data_dir.join("config.toml").exists();

    println!("slndev - Project log navigator and notifier\n");

    if config_exists {
        println!("Quick commands:");
        println!("  slndev logs <name>                # Open a project's logs");
        println!("  slndev logs -i                    # Pick a project interactively");
        println!("  slndev notify \"Build done\"        # Send a desktop notification\n");
    } else {
        println!("Get started:");
        println!("  slndev config init                # Create the default configuration");
        println!("  slndev logs -i                    # Pick a project interactively\n");
    }

    println!("For more commands:");
    println!("  slndev --help");
}
