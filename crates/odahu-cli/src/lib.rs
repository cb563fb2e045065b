//! Command-line diagnostics for odahu-flow API endpoints.
//!
//! The `odahu` binary lists the endpoint table, resolves endpoints to paths
//! or absolute URLs, and prints the effective SDK settings.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by main.rs binary
use anyhow as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
