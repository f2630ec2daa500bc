//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;

use tempfile::TempDir;

/// Test project context
///
/// Creates a temporary directory for test projects and provides
/// utilities for setting up pipeline scenarios.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
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

    /// Read a file from the test project
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Write a manifest for one asset kind under the public directory
    pub fn write_manifest(&self, kind_dir: &str, json: &str) {
        self.create_file(&format!("public/{kind_dir}/manifest.json"), json);
    }

    /// Write an executable stub bundler that prints the given stdout
    #[cfg(unix)]
    pub fn create_stub_bundler(&self, name: &str, stdout: &str) -> PathBuf {
        self.create_script(
            name,
            &format!("#!/bin/sh\ncat <<'STUB_EOF'\n{stdout}\nSTUB_EOF\n"),
        )
    }

    /// Write an executable stub bundler that exits with the given code
    #[cfg(unix)]
    pub fn create_failing_bundler(&self, name: &str, code: i32) -> PathBuf {
        self.create_script(name, &format!("#!/bin/sh\nexit {code}\n"))
    }

    /// Write a stub bundler that records its argv, one per line
    #[cfg(unix)]
    pub fn create_recording_bundler(&self, name: &str, record: &str) -> PathBuf {
        self.create_script(
            name,
            &format!("#!/bin/sh\nprintf '%s\\n' \"$@\" > \"{record}\"\n"),
        )
    }

    /// Write an executable script into the test project
    #[cfg(unix)]
    pub fn create_script(&self, name: &str, contents: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("Failed to write script");
        let mut perms = std::fs::metadata(&path)
            .expect("Failed to stat script")
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).expect("Failed to chmod script");
        path
    }
}

/// Sample scripts manifest JSON for testing
pub const SAMPLE_SCRIPTS_MANIFEST: &str =
    r#"{"main.js":"app.a1b2.js","main.js.map":"app.a1b2.js.map"}"#;
