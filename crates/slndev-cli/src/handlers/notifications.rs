use anyhow::Result;
use slndev_core::Config;
use std::path::Path;

pub fn handle(data_dir: &Path, enable: bool) -> Result<()> {
    let config_path = data_dir.join("config.toml");

    let mut config = Config::load_from(&config_path)?;
    config.notifications.enabled = enable;
    config.save_to(&config_path)?;

    println!(
        "Desktop notifications {}.",
        if enable { "enabled" } else { "disabled" }
    );
    Ok(())
}
