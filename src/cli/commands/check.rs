//! Check command implementation
//!
//! Validates the project layout without building.

use std::path::Path;

use anyhow::{bail, Result};

use crate::cli::output::status;
use crate::config::defaults::BUILD_SCRIPT_FILENAME;
use crate::core::project::ProjectFile;
use crate::infra::bundler::BundlerCommand;

/// Execute the check command
pub fn execute(project_dir: &Path) -> Result<()> {
    let project = ProjectFile::load(project_dir)?;
    let paths = project.asset_paths(project_dir);

    println!("Checking project configuration...\n");

    let mut ok = true;

    let bundler = BundlerCommand::new(project.bundler.program.clone().into());
    if bundler.is_available() {
        println!(
            "{} Bundler '{}' is available",
            status::SUCCESS,
            project.bundler.program
        );
    } else {
        println!(
            "{} Bundler '{}' not found in PATH",
            status::ERROR,
            project.bundler.program
        );
        ok = false;
    }

    let build_script = paths.config_path().join(BUILD_SCRIPT_FILENAME);
    if build_script.exists() {
        println!(
            "{} Build script found at {}",
            status::SUCCESS,
            build_script.display()
        );
    } else {
        println!(
            "{} No build script at {}",
            status::ERROR,
            build_script.display()
        );
        ok = false;
    }

    if paths.public_path().is_dir() {
        println!(
            "{} Public directory {}",
            status::SUCCESS,
            paths.public_path().display()
        );
    } else {
        println!(
            "{} Public directory {} is missing",
            status::WARNING,
            paths.public_path().display()
        );
    }

    println!();
    if ok {
        println!("{} Check passed - ready to build", status::SUCCESS);
        Ok(())
    } else {
        bail!("Check failed - please fix the issues above before building");
    }
}
