// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stowage")]
#[command(about = "Container fleet capacity planning for mixed cargo kinds")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new stowage.yml plan manifest
    Init {
        /// Vessel name for the template
        #[arg(long)]
        name: Option<String>,

        /// Overwrite an existing manifest
        #[arg(long)]
        force: bool,
    },

    /// Parse the manifest and summarize it without executing
    Check {
        /// Manifest path (discovered in the current directory by default)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Execute the stowage plan and report admissions
    Plan {
        /// Manifest path (discovered in the current directory by default)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Emit the outcome as JSON
        #[arg(long)]
        json: bool,

        /// Only print the final result line
        #[arg(long, conflicts_with = "json")]
        quiet: bool,
    },
}
