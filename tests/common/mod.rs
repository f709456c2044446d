//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test project context
///
/// Creates a temporary directory for test projects and provides
/// utilities for setting up test scenarios.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Create a test project with `matrix.toml` set to `manifest`
    pub fn with_manifest(manifest: &str) -> Self {
        let project = Self::new();
        project.create_file("matrix.toml", manifest);
        project
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Run matrixsort in the project directory
    pub fn run(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_matrixsort"));
        cmd.current_dir(self.path());
        cmd.env_remove("MATRIXSORT_MANIFEST");
        cmd.env_remove("RUST_LOG");
        for arg in args {
            cmd.arg(arg);
        }
        cmd.output().expect("Failed to execute matrixsort")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Stdout lines of a command
#[allow(dead_code)]
pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

/// Heads-and-tails manifest over two axes
#[allow(dead_code)]
pub const HEADS_TAILS_MANIFEST: &str = r#"
[project]
name = "test-matrix"

[[axis]]
name = "jdk"
values = ["8", "11"]

[[axis]]
name = "os"
values = ["linux", "mac", "windows"]

[sorter]
kind = "heads-and-tails"
axis = "os"
heads = "windows"
tails = "linux"
"#;

/// Estimated-duration manifest with partial estimates
#[allow(dead_code)]
pub const DURATION_MANIFEST: &str = r#"
[project]
name = "timed-matrix"

[[axis]]
name = "suite"
values = ["unit", "integration", "e2e"]

[sorter]
kind = "estimated-duration"
reversed = true

[durations]
"suite=unit" = 30000
"suite=e2e" = 600000
"#;
