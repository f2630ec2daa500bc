//! Build orchestration
//!
//! Runs exactly one external build cycle and translates its output into
//! structured results: invoke the bundler, scan its stdout for sentinel
//! markers, read the per-kind manifests on success, print status, fire
//! the completion hook.

use std::fmt;

use crate::core::assets::resolve_assets;
use crate::core::paths::AssetPaths;
use crate::core::protocol::{AssetKind, BuildReport};
use crate::core::status::StatusStyle;
use crate::error::PipelineError;
use crate::infra::bundler::BundlerCommand;
use crate::infra::manifest::read_kind_manifest;

/// Completion hook invoked at the end of every completed build cycle
type BuildHook = Box<dyn FnMut()>;

/// Coordinates one external asset build at a time
///
/// The instance owns the resolved asset lists; callers read a snapshot
/// through [`scripts`](Self::scripts) and [`styles`](Self::styles) after
/// [`build`](Self::build) returns. Not internally synchronized: `build`
/// takes `&mut self`, so concurrent builds on one instance must be
/// serialized by the caller.
pub struct AssetPipeline {
    paths: AssetPaths,
    bundler: BundlerCommand,
    style: StatusStyle,
    scripts: Vec<String>,
    styles: Vec<String>,
    on_build: Option<BuildHook>,
}

impl fmt::Debug for AssetPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetPipeline")
            .field("paths", &self.paths)
            .field("bundler", &self.bundler)
            .field("style", &self.style)
            .field("scripts", &self.scripts)
            .field("styles", &self.styles)
            .field("on_build", &self.on_build.is_some())
            .finish()
    }
}

impl AssetPipeline {
    /// Create a pipeline over the given paths
    pub fn new(paths: AssetPaths) -> Self {
        Self {
            paths,
            bundler: BundlerCommand::default(),
            style: StatusStyle::auto(),
            scripts: Vec::new(),
            styles: Vec::new(),
            on_build: None,
        }
    }

    /// Use a specific bundler executable
    #[must_use]
    pub fn with_bundler(mut self, bundler: BundlerCommand) -> Self {
        self.bundler = bundler;
        self
    }

    /// Force a status styling mode
    #[must_use]
    pub fn with_status_style(mut self, style: StatusStyle) -> Self {
        self.style = style;
        self
    }

    /// Register the completion hook
    ///
    /// The hook runs synchronously at the end of every completed build
    /// cycle, in the same call stack as [`build`](Self::build).
    #[must_use]
    pub fn with_on_build(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_build = Some(Box::new(hook));
        self
    }

    /// The paths currently in use
    pub fn paths(&self) -> &AssetPaths {
        &self.paths
    }

    /// Mutable access for post-construction path overrides
    pub fn paths_mut(&mut self) -> &mut AssetPaths {
        &mut self.paths
    }

    /// Resolved script assets from the last successful scripts build
    pub fn scripts(&self) -> &[String] {
        &self.scripts
    }

    /// Resolved style assets from the last successful styles build
    pub fn styles(&self) -> &[String] {
        &self.styles
    }

    /// Run one complete build cycle
    ///
    /// A no-op when the config path is empty (pipeline disabled). Launch
    /// failures, abnormal bundler exits, and manifest inconsistencies
    /// after a success marker are returned as errors and skip the
    /// completion hook; `<...:fail>` markers and `Error:` diagnostics are
    /// reported on stdout and leave the previous asset lists in place.
    pub fn build(&mut self) -> Result<(), PipelineError> {
        if self.paths.is_disabled() {
            tracing::debug!("Config path is empty, skipping asset build");
            return Ok(());
        }

        let stdout = self.bundler.run(&self.paths)?;
        let report = BuildReport::scan(&stdout);

        for kind in AssetKind::ALL {
            let signals = report.signals(kind);
            if signals.success {
                println!("{kind} build: {}", self.style.success());
                let manifest = read_kind_manifest(self.paths.build_output_dir(), kind)?;
                let assets = resolve_assets(&manifest, self.paths.root_path());
                tracing::info!("Resolved {} {} asset(s)", assets.len(), kind.dir());
                match kind {
                    AssetKind::Scripts => self.scripts = assets,
                    AssetKind::Styles => self.styles = assets,
                }
            }
            if signals.failed {
                println!("{kind} build: {}", self.style.failure());
            }
        }

        for line in report.error_tail() {
            println!("{}", self.style.error_line(line));
        }

        if let Some(hook) = self.on_build.as_mut() {
            hook();
        }

        Ok(())
    }
}
