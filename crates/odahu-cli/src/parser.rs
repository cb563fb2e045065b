//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for inspecting odahu-flow API endpoints.
///
/// Global options override settings read from the environment (or from
/// `--env-file`).
#[derive(Parser, Debug)]
#[command(name = "odahu")]
#[command(about = "Resolve and inspect odahu-flow API endpoints")]
#[command(version)]
pub struct Cli {
    /// Base URL of the API server
    #[arg(long = "api-url", global = true)]
    pub api_url: Option<String>,

    /// API version to substitute into endpoint paths
    #[arg(long = "api-version", global = true)]
    pub api_version: Option<String>,

    /// Reject path parameters an endpoint does not use
    #[arg(long, global = true)]
    pub strict: bool,

    /// Read settings from a dotenv file instead of the process environment
    #[arg(long = "env-file", global = true)]
    pub env_file: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
