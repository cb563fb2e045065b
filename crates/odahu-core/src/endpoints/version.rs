//! API version token bound to a registry.

use std::fmt;

use super::{API_VERSION, EndpointError, EndpointResult};

/// API generation identifier, e.g. `v1`.
///
/// Validated on construction: a non-empty token of ASCII letters, digits,
/// `.`, `_` and `-` that is not a dot segment, so it always stays one literal
/// path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ApiVersion(String);

impl ApiVersion {
    /// Validate and wrap a version token.
    pub fn new(version: impl Into<String>) -> EndpointResult<Self> {
        let version = version.into();
        if version.is_empty() {
            return Err(EndpointError::EmptyApiVersion);
        }
        let token_chars = version
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
        if !token_chars || version == "." || version == ".." {
            return Err(EndpointError::InvalidApiVersion(version));
        }
        Ok(Self(version))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self(API_VERSION.to_string())
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ApiVersion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for ApiVersion {
    type Error = EndpointError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
