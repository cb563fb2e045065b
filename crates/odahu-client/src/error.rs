//! Error types for endpoint URL construction.

use odahu_core::{EndpointError, SettingsError};
use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors from building an [`EndpointClient`](crate::EndpointClient) or its URLs.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Path resolution failed.
    #[error(transparent)]
    Endpoint(#[from] EndpointError),

    /// Settings were invalid.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// The base URL could not be parsed.
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        /// The configured base URL
        url: String,
        /// Parser error
        #[source]
        source: url::ParseError,
    },

    /// The base URL cannot carry a path (e.g. `mailto:`).
    #[error("Base URL '{0}' cannot be used as an API base")]
    CannotBeABase(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use odahu_core::EndpointKey;

    #[test]
    fn test_endpoint_error_is_transparent() {
        let error: ClientError = EndpointError::MissingParameter {
            endpoint: EndpointKey::ModelDeploymentDefaultRoute,
            name: "id".to_string(),
        }
        .into();
        assert_eq!(
            error.to_string(),
            "Endpoint 'model-deployment-default-route' requires path parameter 'id'"
        );
    }

    #[test]
    fn test_invalid_base_url_message() {
        let error = ClientError::InvalidBaseUrl {
            url: "not a url".to_string(),
            source: url::ParseError::RelativeUrlWithoutBase,
        };
        let msg = error.to_string();
        assert!(msg.contains("not a url"));
        assert!(msg.contains("relative URL without a base"));
    }

    #[test]
    fn test_cannot_be_a_base_message() {
        let error = ClientError::CannotBeABase("mailto:ops@example.com".to_string());
        assert!(error.to_string().contains("mailto:ops@example.com"));
    }
}
