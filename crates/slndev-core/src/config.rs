use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Resolve the slndev data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. SLNDEV_PATH environment variable (with tilde expansion)
/// 3. System data directory (recommended default)
/// 4. ~/.slndev (fallback for systems without standard data directory)
pub fn resolve_data_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    // Priority 1: Explicit path
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    // Priority 2: SLNDEV_PATH environment variable
    if let Ok(env_path) = std::env::var("SLNDEV_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    // Priority 3: System data directory (recommended default)
    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("slndev"));
    }

    // Priority 4: Fallback to ~/.slndev (last resort for systems without standard data directory)
    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".slndev"));
    }

    Err(Error::Config(
        "Could not determine data path: no HOME directory or system data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

fn default_runnable_projects() -> Vec<String> {
    ["Host", "AuthServer", "Web", "Blazor", "DbMigrator"]
        .iter()
        .map(|name| name.to_string())
        .collect()
}

#[cfg(windows)]
const DEFAULT_POWERSHELL: &str = "powershell.exe";
#[cfg(not(windows))]
const DEFAULT_POWERSHELL: &str = "pwsh";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Gate for the whole notification pipeline; off means `notify` does
    /// nothing at all.
    #[serde(default)]
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Allow-list of project base names eligible for log lookup. Matching is
    /// a suffix match against the manifest name minus extension, so "Host"
    /// covers "Acme.BookStore.Host".
    #[serde(default = "default_runnable_projects")]
    pub runnable_projects: Vec<String>,

    #[serde(default)]
    pub notifications: NotificationConfig,

    /// External tool executables by well-known key (e.g. "powershell").
    #[serde(default)]
    pub tools: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            runnable_projects: default_runnable_projects(),
            notifications: NotificationConfig::default(),
            tools: HashMap::new(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the executable for a configured tool key, falling back to the
    /// platform default for the "powershell" interpreter.
    pub fn tool_path(&self, name: &str) -> PathBuf {
        if let Some(configured) = self.tools.get(name) {
            return expand_tilde(configured);
        }

        match name {
            "powershell" => PathBuf::from(DEFAULT_POWERSHELL),
            other => PathBuf::from(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.runnable_projects.contains(&"Host".to_string()));
        assert!(!config.notifications.enabled);
        assert!(config.tools.is_empty());
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.notifications.enabled = true;
        config
            .tools
            .insert("powershell".to_string(), "/opt/pwsh/pwsh".to_string());

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert!(loaded.notifications.enabled);
        assert_eq!(
            loaded.tool_path("powershell"),
            PathBuf::from("/opt/pwsh/pwsh")
        );

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert!(!config.notifications.enabled);
        assert!(!config.runnable_projects.is_empty());

        Ok(())
    }

    #[test]
    fn test_partial_config_keeps_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[notifications]\nenabled = true\n")?;

        let config = Config::load_from(&config_path)?;
        assert!(config.notifications.enabled);
        assert!(config.runnable_projects.contains(&"Web".to_string()));

        Ok(())
    }

    #[test]
    fn test_tool_path_falls_back_to_platform_default() {
        let config = Config::default();
        let path = config.tool_path("powershell");
        assert!(!path.as_os_str().is_empty());
    }
}
