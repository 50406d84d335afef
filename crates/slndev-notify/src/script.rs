use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tokio::process::Command;
use uuid::Uuid;

/// Executes single-use scripts through an external interpreter.
///
/// Each run writes the script under a random name into a private directory,
/// hands it to the interpreter as its only argument, awaits process exit, and
/// removes the file again.
pub struct ScriptRunner {
    interpreter: PathBuf,
    script_dir: PathBuf,
}

impl ScriptRunner {
    pub fn new(interpreter: PathBuf, script_dir: PathBuf) -> Self {
        Self {
            interpreter,
            script_dir,
        }
    }

    /// Write `content` to a transient script, execute it, and await exit.
    ///
    /// The script file is removed on every exit path, including spawn
    /// failure. A non-zero interpreter exit is tolerated: delivery is
    /// best-effort once the interpreter has run.
    pub async fn run(&self, content: &str) -> Result<()> {
        std::fs::create_dir_all(&self.script_dir)?;

        let script = TransientScript::write(&self.script_dir, content)?;

        let spawned = Command::new(&self.interpreter)
            .arg(script.path())
            .status()
            .await;

        // `script` drops below, removing the file whatever `spawned` holds.
        match spawned {
            Ok(_status) => Ok(()),
            Err(source) => Err(Error::Spawn {
                interpreter: self.interpreter.clone(),
                source,
            }),
        }
    }
}

/// A script file that exists only for the duration of one execution.
///
/// Removal happens in `drop`, so early returns cannot leak the file. A failed
/// removal is reported on stderr and never overrides the outcome of the
/// execution itself.
struct TransientScript {
    path: PathBuf,
}

impl TransientScript {
    fn write(dir: &Path, content: &str) -> std::io::Result<Self> {
        let path = dir.join(format!("{}.ps1", Uuid::new_v4()));
        std::fs::write(&path, content)?;
        Ok(Self { path })
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TransientScript {
    fn drop(&mut self) {
        if let Err(err) = std::fs::remove_file(&self.path) {
            eprintln!(
                "warning: could not remove transient script {}: {}",
                self.path.display(),
                err
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry_count(dir: &Path) -> usize {
        std::fs::read_dir(dir).map(|entries| entries.count()).unwrap_or(0)
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_removes_script_after_exit() {
        let temp = TempDir::new().unwrap();
        let scripts = temp.path().join("scripts");
        let runner = ScriptRunner::new(PathBuf::from("/bin/sh"), scripts.clone());

        runner.run("exit 0").await.unwrap();

        assert_eq!(entry_count(&scripts), 0);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_tolerates_nonzero_exit() {
        let temp = TempDir::new().unwrap();
        let scripts = temp.path().join("scripts");
        let runner = ScriptRunner::new(PathBuf::from("/bin/sh"), scripts.clone());

        runner.run("exit 3").await.unwrap();

        assert_eq!(entry_count(&scripts), 0);
    }

    #[tokio::test]
    async fn test_spawn_failure_still_removes_script() {
        let temp = TempDir::new().unwrap();
        let scripts = temp.path().join("scripts");
        let missing = temp.path().join("no-such-interpreter");
        let runner = ScriptRunner::new(missing, scripts.clone());

        let err = runner.run("exit 0").await.unwrap_err();

        assert!(matches!(err, Error::Spawn { .. }));
        assert_eq!(entry_count(&scripts), 0);
    }
}
