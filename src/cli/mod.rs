//! Command-line interface module
//!
//! This module handles argument parsing and output formatting. It
//! contains no pipeline logic - that belongs in the [`crate::core`]
//! module.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use commands::Commands;

/// Assetpipe - asset pipeline coordinator
///
/// Run an external bundler and resolve the emitted assets.
#[derive(Parser, Debug)]
#[command(name = "assetpipe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Project directory
    #[arg(short, long, global = true, default_value = ".", env = "ASSETPIPE_PROJECT")]
    pub project: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        if let Some(cmd) = self.command {
            cmd.run(&self.project)
        } else {
            // No subcommand provided, show help
            use clap::CommandFactory;
            let mut cmd = Self::command();
            cmd.print_help()?;
            Ok(())
        }
    }
}
