//! Core infrastructure for slndev: configuration, project discovery, and log
//! artifact resolution. Everything here is synchronous filesystem work; the
//! notification pipeline lives in `slndev-notify`.

pub mod config;
pub mod error;
pub mod logs;
pub mod project;

pub use config::{Config, NotificationConfig, expand_tilde, resolve_data_path};
pub use error::{Error, Result};
pub use logs::{LogTarget, LogTargetKind, locate_logs};
pub use project::{ProjectCandidate, scan_projects};
