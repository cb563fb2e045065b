//! CLI-specific error types and mappings.
//!
//! This module provides the CLI error type and mappings from library errors
//! to exit codes and user-facing messages.

use odahu_client::ClientError;
use odahu_core::{EndpointError, SettingsError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument or resolution error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Output formatting error.
    #[error("{0}")]
    Output(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
            Self::Output(_) => 1,
        }
    }
}

impl From<EndpointError> for CliError {
    fn from(err: EndpointError) -> Self {
        Self::Arguments(err.to_string())
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<ClientError> for CliError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Endpoint(endpoint_err) => endpoint_err.into(),
            ClientError::Settings(settings_err) => settings_err.into(),
            other @ (ClientError::InvalidBaseUrl { .. } | ClientError::CannotBeABase(_)) => {
                Self::Config(other.to_string())
            }
        }
    }
}

impl From<dotenvy::Error> for CliError {
    fn from(err: dotenvy::Error) -> Self {
        match err {
            dotenvy::Error::Io(io_err) => Self::Io(io_err.to_string()),
            other => Self::Config(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Output(err.to_string())
    }
}
