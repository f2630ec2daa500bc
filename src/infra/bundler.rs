//! Bundler subprocess invocation
//!
//! Wraps the external bundler runtime and the fixed four-path argument
//! contract of its build script. The bundler reads sources and writes
//! bundles anywhere under the project tree, so it is granted full
//! permissions.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::config::defaults::{
    BUILD_SCRIPT_FILENAME, BUNDLER_PERMISSION_FLAG, DEFAULT_BUNDLER_PROGRAM,
};
use crate::core::paths::AssetPaths;
use crate::error::BundlerError;

/// External bundler program wrapper
#[derive(Debug, Clone)]
pub struct BundlerCommand {
    /// Path to the bundler executable
    program: PathBuf,
}

impl Default for BundlerCommand {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_BUNDLER_PROGRAM))
    }
}

impl BundlerCommand {
    /// Wrap a specific bundler executable
    pub fn new(program: PathBuf) -> Self {
        Self { program }
    }

    /// Path to the bundler executable
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Check if the executable can be found
    pub fn is_available(&self) -> bool {
        which::which(&self.program).is_ok()
    }

    /// Build the full argument vector for one invocation
    pub fn build_args(&self, paths: &AssetPaths) -> Vec<String> {
        vec![
            "run".to_string(),
            BUNDLER_PERMISSION_FLAG.to_string(),
            paths
                .config_path()
                .join(BUILD_SCRIPT_FILENAME)
                .display()
                .to_string(),
            format!("--root-path={}", paths.root_path().display()),
            format!("--config-path={}", paths.config_path().display()),
            format!("--output-path={}", paths.build_output_dir().display()),
        ]
    }

    /// Run one build invocation and capture its standard output
    ///
    /// Standard error is discarded; the bundler routes everything it
    /// wants seen through stdout. Blocks until the process exits.
    pub fn run(&self, paths: &AssetPaths) -> Result<String, BundlerError> {
        let args = self.build_args(paths);
        tracing::debug!("Invoking bundler: {} {}", self.program.display(), args.join(" "));

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| BundlerError::Launch {
                program: self.program.clone(),
                error: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(BundlerError::Exited {
                program: self.program.clone(),
                status: output.status.to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
