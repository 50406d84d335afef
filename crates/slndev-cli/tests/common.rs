//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation. This is a standard pattern
//! for Rust integration test fixtures.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    data_dir: PathBuf,
    solution_dir: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".slndev");
        let solution_dir = temp_dir.path().join("solution");

        fs::create_dir_all(&data_dir).expect("Failed to create data dir");
        fs::create_dir_all(&solution_dir).expect("Failed to create solution dir");

        Self {
            _temp_dir: temp_dir,
            data_dir,
            solution_dir,
        }
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    pub fn solution_dir(&self) -> &PathBuf {
        &self.solution_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    pub fn scripts_dir(&self) -> PathBuf {
        self.data_dir.join("scripts")
    }

    /// Create `<relative_dir>/<manifest_name>.csproj` under the solution tree
    /// and return the project directory.
    pub fn add_project(&self, relative_dir: &str, manifest_name: &str) -> PathBuf {
        let project_dir = self.solution_dir.join(relative_dir);
        fs::create_dir_all(&project_dir).expect("Failed to create project dir");

        let manifest = project_dir.join(format!("{}.csproj", manifest_name));
        fs::write(&manifest, "<Project Sdk=\"Microsoft.NET.Sdk\" />\n")
            .expect("Failed to write manifest");

        project_dir
    }

    /// Create `Logs/logs.txt` inside a project directory.
    pub fn add_logs_file(&self, project_dir: &Path) -> PathBuf {
        let logs_dir = project_dir.join("Logs");
        fs::create_dir_all(&logs_dir).expect("Failed to create Logs dir");

        let file = logs_dir.join("logs.txt");
        fs::write(&file, "2026-01-01 00:00:00 [INF] started\n").expect("Failed to write logs.txt");
        file
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.config_path(), content).expect("Failed to write config");
    }

    pub fn read_config(&self) -> String {
        fs::read_to_string(self.config_path()).expect("Failed to read config")
    }

    pub fn command(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("slndev");
        cmd.arg("--config-dir").arg(self.data_dir());
        cmd
    }
}
