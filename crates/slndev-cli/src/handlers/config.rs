use anyhow::Result;
use owo_colors::OwoColorize;
use slndev_core::Config;
use std::path::Path;

pub fn init(data_dir: &Path) -> Result<()> {
    let config_path = data_dir.join("config.toml");

    if config_path.exists() {
        println!("Config already exists at {}", config_path.display());
        return Ok(());
    }

    Config::default().save_to(&config_path)?;
    println!("{} {}", "Created".green(), config_path.display());
    Ok(())
}

pub fn show(data_dir: &Path) -> Result<()> {
    let config = Config::load_from(&data_dir.join("config.toml"))?;
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

pub fn path(data_dir: &Path) -> Result<()> {
    println!("{}", data_dir.join("config.toml").display());
    Ok(())
}
