use anyhow::{Context, Result};
use std::path::Path;

/// Opens a resolved path with the OS default handler.
pub trait Opener {
    fn open(&self, path: &Path) -> Result<()>;
}

/// Opener backed by the platform's `open`/`xdg-open`/`start` equivalent.
pub struct SystemOpener;

impl Opener for SystemOpener {
    fn open(&self, path: &Path) -> Result<()> {
        open::that(path).with_context(|| format!("failed to open {}", path.display()))
    }
}
