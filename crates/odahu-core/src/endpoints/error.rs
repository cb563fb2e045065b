//! Endpoint resolution errors.
//!
//! All of these are detected from input validation alone. A failed call has
//! no partial effects and retrying it with the same input yields the same
//! error.

use thiserror::Error;

use super::EndpointKey;

/// Result type alias for endpoint operations.
pub type EndpointResult<T> = Result<T, EndpointError>;

/// Errors that can occur while building a registry or resolving a path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EndpointError {
    /// The endpoint name is not one of the known endpoints.
    #[error("Unknown endpoint '{name}'")]
    UnknownEndpoint {
        /// The name that was looked up
        name: String,
    },

    /// A template placeholder has no value in the supplied parameters.
    #[error("Endpoint '{endpoint}' requires path parameter '{name}'")]
    MissingParameter {
        /// The endpoint being resolved
        endpoint: EndpointKey,
        /// The placeholder without a value
        name: String,
    },

    /// A supplied parameter is not referenced by the template.
    #[error("Endpoint '{endpoint}' does not accept path parameter '{name}'")]
    UnusedParameter {
        /// The endpoint being resolved
        endpoint: EndpointKey,
        /// The parameter nobody asked for
        name: String,
    },

    /// A parameter value or joined segment cannot stand as one path segment.
    #[error("Path parameter '{name}' cannot be '{value}': must be a non-empty segment other than '.' or '..'")]
    InvalidParameter {
        /// The parameter (or `segment` for joined segments)
        name: String,
        /// The rejected value
        value: String,
    },

    /// The API version is empty.
    #[error("API version cannot be empty")]
    EmptyApiVersion,

    /// The API version is not a plain path segment token.
    #[error(
        "Invalid API version '{0}': only ASCII letters, digits, '.', '_' and '-' are allowed, and it cannot be '.' or '..'"
    )]
    InvalidApiVersion(String),

    /// A path template could not be parsed.
    #[error("Malformed path template '{template}': {reason}")]
    MalformedTemplate {
        /// The raw template
        template: String,
        /// What is wrong with it
        reason: String,
    },
}
