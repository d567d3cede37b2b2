//! # CLI Argument Definitions
//!
//! Subcommands, arguments, and flags of the `academy` binary.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "academy")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Render and inspect the Fine-Tuning Academy landing page")]
pub struct Cli {
    /// Configuration file (TOML, YAML or JSON); `./academy.*` is used when present
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: AppCommands,
}

/// Enumeration of available subcommands.
#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Write the landing page to disk
    Render {
        /// Output file (defaults to `<storage.output_dir>/index.html`)
        #[arg(short, long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
    /// Check the catalog for inconsistencies
    Validate {
        /// Fail on warnings as well as errors
        #[arg(long)]
        strict: bool,
    },
    /// Print every module and lesson in catalog order
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the "Start Here" lessons
    Featured {},
}
