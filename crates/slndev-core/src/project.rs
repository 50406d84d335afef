use crate::{Error, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const MANIFEST_EXTENSION: &str = "csproj";

/// One runnable project discovered in the working tree.
///
/// Produced transiently by [`scan_projects`]; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCandidate {
    /// Manifest file name minus extension, e.g. "Acme.BookStore.Web".
    pub short_name: String,

    /// Path to the manifest file itself.
    pub full_path: PathBuf,

    /// Directory containing the manifest.
    pub directory: PathBuf,
}

/// Recursively enumerate project manifests under `working_dir` and keep those
/// whose name (minus extension) ends with one of `allowed_names`.
///
/// Zero matches is an empty list, not an error; the only failure is a
/// `working_dir` that does not exist. Discovery order carries no meaning.
pub fn scan_projects(working_dir: &Path, allowed_names: &[String]) -> Result<Vec<ProjectCandidate>> {
    if !working_dir.exists() {
        return Err(Error::WorkingDirNotFound(working_dir.to_path_buf()));
    }

    let mut candidates = Vec::new();

    for entry in WalkDir::new(working_dir).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();

        if !path.is_file() || path.extension().is_none_or(|e| e != MANIFEST_EXTENSION) {
            continue;
        }

        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        if !allowed_names.iter().any(|name| stem.ends_with(name.as_str())) {
            continue;
        }

        let Some(directory) = path.parent() else {
            continue;
        };

        candidates.push(ProjectCandidate {
            short_name: stem.to_string(),
            full_path: path.to_path_buf(),
            directory: directory.to_path_buf(),
        });
    }

    Ok(candidates)
}
