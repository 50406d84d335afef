use crate::Result;
use crate::script::ScriptRunner;
use std::path::PathBuf;

const TOAST_COMMAND: &str = "New-BurntToastNotification";

/// Dispatches desktop toast notifications through the script runner.
///
/// When the gate is disabled, [`Notifier::send`] is a true no-op: no file is
/// written and no process is spawned.
pub struct Notifier {
    enabled: bool,
    runner: ScriptRunner,
}

impl Notifier {
    pub fn new(enabled: bool, interpreter: PathBuf, script_dir: PathBuf) -> Self {
        Self {
            enabled,
            runner: ScriptRunner::new(interpreter, script_dir),
        }
    }

    /// Send a toast with the given title and optional message and icon.
    pub async fn send(&self, title: &str, message: Option<&str>, icon: Option<&str>) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let command = compose_toast_command(title, message, icon);
        self.runner.run(&command).await
    }
}

/// Build the single-line toast invocation handed to the interpreter.
///
/// Message and icon segments are appended only when supplied and non-empty.
fn compose_toast_command(title: &str, message: Option<&str>, icon: Option<&str>) -> String {
    let mut command = format!("{} -Text \"{}\"", TOAST_COMMAND, title);

    if let Some(message) = message
        && !message.is_empty()
    {
        command.push_str(&format!(", \"{}\"", message));
    }

    if let Some(icon) = icon
        && !icon.is_empty()
    {
        command.push_str(&format!(" -AppLogo \"{}\"", icon));
    }

    command
}
