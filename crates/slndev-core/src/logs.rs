use std::path::{Path, PathBuf};

const LOGS_DIR: &str = "Logs";
const LOGS_FILE: &str = "logs.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTargetKind {
    File,
    Directory,
}

/// Best available log artifact for a project directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogTarget {
    pub kind: LogTargetKind,
    pub path: PathBuf,

    /// Set when the locator fell back to the project directory itself.
    pub note: Option<String>,
}

/// Resolve the best available log path for a project directory.
///
/// Resolution order, first match wins: the `Logs/logs.txt` file, the `Logs`
/// directory, then the project directory itself. The returned path always
/// exists as long as `project_dir` does.
pub fn locate_logs(project_dir: &Path) -> LogTarget {
    let logs_dir = project_dir.join(LOGS_DIR);

    if logs_dir.is_dir() {
        let log_file = logs_dir.join(LOGS_FILE);
        if log_file.is_file() {
            return LogTarget {
                kind: LogTargetKind::File,
                path: log_file,
                note: None,
            };
        }

        return LogTarget {
            kind: LogTargetKind::Directory,
            path: logs_dir,
            note: None,
        };
    }

    LogTarget {
        kind: LogTargetKind::Directory,
        path: project_dir.to_path_buf(),
        note: Some("no logs folder found; opening project folder instead".to_string()),
    }
}
