//! Init command implementation
//!
//! Writes a starter assets.toml and the directory skeleton.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::cli::output::status;
use crate::config::defaults::PROJECT_FILENAME;
use crate::core::project::ProjectFile;

/// Execute the init command
pub fn execute(project_dir: &Path, force: bool) -> Result<()> {
    let path = project_dir.join(PROJECT_FILENAME);
    if path.exists() && !force {
        bail!("{PROJECT_FILENAME} already exists. Use --force to overwrite.");
    }

    let project = ProjectFile::default();
    let contents = project.to_toml()?;
    fs::write(&path, contents)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    for subpath in [&project.paths.config, &project.paths.public] {
        let dir = project_dir.join(subpath);
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    println!("{} Created {PROJECT_FILENAME}", status::SUCCESS);
    println!();
    println!("Next steps:");
    println!(
        "  1. Place the bundler config and build.ts under {}/",
        project.paths.config
    );
    println!("  2. Run 'assetpipe build'");
    Ok(())
}
