//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod build;
pub mod check;
pub mod init;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Subcommand;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new asset pipeline project
    Init {
        /// Overwrite an existing assets.toml
        #[arg(short, long)]
        force: bool,
    },

    /// Validate the project layout without building
    Check,

    /// Run one asset build cycle
    Build {
        /// Bundler executable override
        #[arg(long)]
        bundler: Option<PathBuf>,
    },
}

impl Commands {
    /// Execute the command against the given project directory
    pub fn run(self, project_dir: &Path) -> Result<()> {
        match self {
            Commands::Init { force } => init::execute(project_dir, force),
            Commands::Check => check::execute(project_dir),
            Commands::Build { bundler } => build::execute(project_dir, bundler),
        }
    }
}
