//! Shared testing utilities for mailstart CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `mailstart` binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("mailstart").expect("Failed to locate mailstart binary");
        cmd.current_dir(&self.work_dir).env_remove("MAILSTART_LOG");
        cmd
    }

    /// Path to the default configuration file.
    pub fn config_path(&self) -> PathBuf {
        self.work_dir.join("mailstart.toml")
    }

    /// Write the default configuration file.
    pub fn write_config(&self, content: &str) {
        fs::write(self.config_path(), content).expect("Failed to write mailstart.toml");
    }

    /// Write an arbitrary file under the work directory and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Read a file under the work directory.
    pub fn read_file(&self, name: &str) -> String {
        fs::read_to_string(self.work_dir.join(name)).expect("Failed to read test file")
    }
}
