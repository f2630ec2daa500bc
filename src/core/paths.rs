//! Asset path resolution
//!
//! Holds the four filesystem locations every build invocation needs: the
//! project root, the bundler config directory, the public directory, and
//! the optional bundle output directory.

use std::path::{Path, PathBuf};

/// Filesystem locations for one asset pipeline
///
/// The config and public paths are derived from the root at construction
/// time. The fields are independent afterwards: resetting one does not
/// rebase the others.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    /// Project root
    root_path: PathBuf,
    /// Directory holding the bundler config and entry script
    config_path: PathBuf,
    /// Directory served to browsers
    public_path: PathBuf,
    /// Bundle output directory under the public directory
    output_path: Option<PathBuf>,
}

impl AssetPaths {
    /// Create paths from a project root and relative subpaths
    pub fn new(
        root_path: impl Into<PathBuf>,
        config_subpath: impl AsRef<Path>,
        public_subpath: impl AsRef<Path>,
    ) -> Self {
        let root_path = root_path.into();
        let config_path = root_path.join(config_subpath);
        let public_path = root_path.join(public_subpath);
        Self {
            root_path,
            config_path,
            public_path,
            output_path: None,
        }
    }

    /// Place bundle output under the given subpath of the public directory
    ///
    /// An empty subpath leaves the output directory unset.
    #[must_use]
    pub fn with_output_subpath(mut self, output_subpath: impl AsRef<Path>) -> Self {
        let output_subpath = output_subpath.as_ref();
        self.output_path = if output_subpath.as_os_str().is_empty() {
            None
        } else {
            Some(self.public_path.join(output_subpath))
        };
        self
    }

    /// Override the root path without rebasing the derived paths
    pub fn set_root_path(&mut self, root_path: impl Into<PathBuf>) -> &mut Self {
        self.root_path = root_path.into();
        self
    }

    /// Override the config path
    ///
    /// Setting an empty path disables the pipeline.
    pub fn set_config_path(&mut self, config_path: impl Into<PathBuf>) -> &mut Self {
        self.config_path = config_path.into();
        self
    }

    /// Override the public path
    pub fn set_public_path(&mut self, public_path: impl Into<PathBuf>) -> &mut Self {
        self.public_path = public_path.into();
        self
    }

    /// The project root
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// The bundler config directory
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// The public directory
    pub fn public_path(&self) -> &Path {
        &self.public_path
    }

    /// The bundle output directory, if one was configured
    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }

    /// The directory handed to the bundler and searched for manifests
    ///
    /// Falls back to the public directory when no output directory is set.
    pub fn build_output_dir(&self) -> &Path {
        self.output_path.as_deref().unwrap_or(&self.public_path)
    }

    /// Whether the pipeline is disabled (empty config path)
    pub fn is_disabled(&self) -> bool {
        self.config_path.as_os_str().is_empty()
    }
}
