//! Build command implementation
//!
//! Runs one pipeline build cycle from the project file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::pipeline::AssetPipeline;
use crate::core::project::ProjectFile;
use crate::infra::bundler::BundlerCommand;

/// Execute the build command
pub fn execute(project_dir: &Path, bundler_override: Option<PathBuf>) -> Result<()> {
    let project = ProjectFile::load(project_dir)?;
    let paths = project.asset_paths(project_dir);

    let program = bundler_override.unwrap_or_else(|| PathBuf::from(&project.bundler.program));
    tracing::info!("Running asset build in {}", project_dir.display());

    let mut pipeline = AssetPipeline::new(paths).with_bundler(BundlerCommand::new(program));
    pipeline.build().context("Asset build failed")?;

    tracing::info!(
        "Build cycle complete: {} script(s), {} style(s)",
        pipeline.scripts().len(),
        pipeline.styles().len()
    );
    Ok(())
}
