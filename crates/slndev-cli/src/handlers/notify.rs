use anyhow::Result;
use slndev_core::Config;
use slndev_notify::Notifier;
use std::path::Path;

const INTERPRETER_KEY: &str = "powershell";
const SCRIPTS_DIR: &str = "scripts";

pub fn handle(
    config: &Config,
    data_dir: &Path,
    title: &str,
    message: Option<&str>,
    icon: Option<&str>,
) -> Result<()> {
    let notifier = Notifier::new(
        config.notifications.enabled,
        config.tool_path(INTERPRETER_KEY),
        data_dir.join(SCRIPTS_DIR),
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(notifier.send(title, message, icon))?;

    if config.notifications.enabled {
        println!("Notification sent: {}", title);
    } else {
        println!("Notifications are disabled. Run 'slndev notifications enable' to turn them on.");
    }

    Ok(())
}
