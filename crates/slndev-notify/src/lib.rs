//! Best-effort desktop notifications.
//!
//! A notification is delivered by writing a single-use script into a private
//! directory, executing it through a configured interpreter, and removing it
//! again. The script never outlives one dispatch, and concurrent dispatches
//! cannot collide because every script gets a fresh random name.

pub mod error;
pub mod notifier;
pub mod script;

pub use error::{Error, Result};
pub use notifier::Notifier;
pub use script::ScriptRunner;
