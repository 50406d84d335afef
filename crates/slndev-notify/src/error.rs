use std::fmt;
use std::path::PathBuf;

/// Result type for slndev-notify operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the notification layer
#[derive(Debug)]
pub enum Error {
    /// Interpreter executable missing or failed to start
    Spawn {
        interpreter: PathBuf,
        source: std::io::Error,
    },

    /// Transient script could not be written
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Spawn {
                interpreter,
                source,
            } => write!(
                f,
                "failed to spawn interpreter {}: {}",
                interpreter.display(),
                source
            ),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Spawn { source, .. } => Some(source),
            Error::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
