pub mod config;
pub mod logs;
pub mod notifications;
pub mod notify;
