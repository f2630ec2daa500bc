//! Project file (assets.toml) parsing
//!
//! The project file describes where a host project keeps its bundler
//! config, its public directory, and its bundle output. It is a CLI
//! convenience: library callers construct [`AssetPaths`] directly.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::defaults::{
    DEFAULT_BUNDLER_PROGRAM, DEFAULT_CONFIG_SUBPATH, DEFAULT_PUBLIC_SUBPATH, PROJECT_FILENAME,
};
use crate::core::paths::AssetPaths;
use crate::error::ProjectError;

/// The project file (assets.toml)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProjectFile {
    /// Pipeline directory layout
    #[serde(default)]
    pub paths: PathsConfig,

    /// Bundler runtime configuration
    #[serde(default)]
    pub bundler: BundlerConfig,
}

/// Directory layout relative to the project root
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PathsConfig {
    /// Config subpath holding the bundler config and entry script
    #[serde(default = "default_config_subpath")]
    pub config: String,

    /// Public subpath served to browsers
    #[serde(default = "default_public_subpath")]
    pub public: String,

    /// Optional bundle output subpath under the public directory
    #[serde(default)]
    pub output: Option<String>,
}

/// Bundler runtime configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BundlerConfig {
    /// Bundler executable
    #[serde(default = "default_program")]
    pub program: String,
}

fn default_config_subpath() -> String {
    DEFAULT_CONFIG_SUBPATH.to_string()
}

fn default_public_subpath() -> String {
    DEFAULT_PUBLIC_SUBPATH.to_string()
}

fn default_program() -> String {
    DEFAULT_BUNDLER_PROGRAM.to_string()
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            config: default_config_subpath(),
            public: default_public_subpath(),
            output: None,
        }
    }
}

impl Default for BundlerConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
        }
    }
}

impl ProjectFile {
    /// Parse a project file from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ProjectError> {
        toml::from_str(contents).map_err(|source| ProjectError::Parse { source })
    }

    /// Serialize the project file to TOML text
    pub fn to_toml(&self) -> Result<String, ProjectError> {
        toml::to_string_pretty(self).map_err(|source| ProjectError::Serialize { source })
    }

    /// Load the project file from the given project directory
    pub fn load(project_dir: &Path) -> Result<Self, ProjectError> {
        let path = project_dir.join(PROJECT_FILENAME);
        if !path.exists() {
            return Err(ProjectError::NotFound { path });
        }
        let contents = fs::read_to_string(&path).map_err(|e| ProjectError::Read {
            path,
            error: e.to_string(),
        })?;
        Self::from_toml(&contents)
    }

    /// Build the asset paths for a project rooted at the given directory
    pub fn asset_paths(&self, root: &Path) -> AssetPaths {
        let paths = AssetPaths::new(root, &self.paths.config, &self.paths.public);
        match &self.paths.output {
            Some(output) => paths.with_output_subpath(output),
            None => paths,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let project = ProjectFile::from_toml("").unwrap();
        assert_eq!(project.paths.config, "assets");
        assert_eq!(project.paths.public, "public");
        assert_eq!(project.paths.output, None);
        assert_eq!(project.bundler.program, "deno");
    }

    #[test]
    fn explicit_values_override_defaults() {
        let project = ProjectFile::from_toml(
            r#"
[paths]
config = "frontend"
public = "static"
output = "bundles"

[bundler]
program = "/opt/deno/bin/deno"
"#,
        )
        .unwrap();
        assert_eq!(project.paths.config, "frontend");
        assert_eq!(project.paths.public, "static");
        assert_eq!(project.paths.output.as_deref(), Some("bundles"));
        assert_eq!(project.bundler.program, "/opt/deno/bin/deno");
    }

    #[test]
    fn roundtrips_through_toml() {
        let project = ProjectFile::default();
        let rendered = project.to_toml().unwrap();
        let parsed = ProjectFile::from_toml(&rendered).unwrap();
        assert_eq!(parsed, project);
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let result = ProjectFile::from_toml("[paths");
        assert!(matches!(result, Err(ProjectError::Parse { .. })));
    }

    #[test]
    fn asset_paths_are_rooted_at_the_project_dir() {
        let project = ProjectFile::from_toml("[paths]\noutput = \"bundles\"\n").unwrap();
        let paths = project.asset_paths(Path::new("/proj"));
        assert_eq!(paths.root_path(), Path::new("/proj"));
        assert_eq!(paths.config_path(), Path::new("/proj/assets"));
        assert_eq!(paths.public_path(), Path::new("/proj/public"));
        assert_eq!(paths.output_path(), Some(Path::new("/proj/public/bundles")));
    }

    #[test]
    fn missing_project_file_is_reported() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = ProjectFile::load(dir.path());
        assert!(matches!(result, Err(ProjectError::NotFound { .. })));
    }
}
