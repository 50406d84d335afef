use crate::platform::Opener;
use crate::select::{Selection, SelectionStrategy, select};
use anyhow::Result;
use owo_colors::OwoColorize;
use slndev_core::{Config, locate_logs, scan_projects};
use std::path::PathBuf;

pub fn handle(
    config: &Config,
    project_name: Option<String>,
    path: Option<PathBuf>,
    interactive: bool,
    opener: &dyn Opener,
) -> Result<()> {
    let working_dir = match path {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let candidates = scan_projects(&working_dir, &config.runnable_projects)?;
    println!("{} runnable project(s) found.", candidates.len().green());

    let strategy = match project_name {
        Some(name) => SelectionStrategy::Explicit(name),
        None if interactive => SelectionStrategy::Interactive,
        None => SelectionStrategy::UsagePrinter,
    };

    let candidate = match select(candidates, strategy)? {
        Selection::Project(candidate) => candidate,
        Selection::UsagePrinted => return Ok(()),
    };

    let target = locate_logs(&candidate.directory);
    if let Some(note) = &target.note {
        println!("{}", note.yellow());
    }

    opener.open(&target.path)
}
