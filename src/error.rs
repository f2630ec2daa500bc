//! Error types for assetpipe
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Bundler subprocess errors
#[derive(Error, Debug)]
pub enum BundlerError {
    /// The bundler program could not be started
    #[error("Failed to launch bundler '{program}': {error}")]
    Launch { program: PathBuf, error: String },

    /// The bundler exited abnormally at the OS level
    #[error("Bundler '{program}' exited abnormally: {status}")]
    Exited { program: PathBuf, status: String },
}

/// Bundler manifest errors
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file missing or unreadable
    #[error("Failed to read manifest at '{path}': {error}")]
    Read { path: PathBuf, error: String },

    /// Manifest contents are not a JSON object of strings
    #[error("Failed to parse manifest at '{path}': {error}")]
    Parse { path: PathBuf, error: String },
}

/// Project file (assets.toml) errors
#[derive(Error, Debug)]
pub enum ProjectError {
    /// Project file not found
    #[error("No assets.toml found at '{path}'. Run 'assetpipe init' to create a project.")]
    NotFound { path: PathBuf },

    /// IO error reading the project file
    #[error("Failed to read '{path}': {error}")]
    Read { path: PathBuf, error: String },

    /// Project file parse error
    #[error("Failed to parse assets.toml: {source}")]
    Parse { source: toml::de::Error },

    /// Project file serialize error
    #[error("Failed to serialize assets.toml: {source}")]
    Serialize { source: toml::ser::Error },
}

/// Top-level pipeline error type
///
/// Both variants are the unrecoverable tier of a build cycle: the build
/// pipeline itself is broken, as opposed to a logical bundler failure
/// reported via stdout markers.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Bundler invocation failed at the OS level
    #[error("Bundler error: {0}")]
    Bundler(#[from] BundlerError),

    /// Manifest missing or malformed after a reported success
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),
}
