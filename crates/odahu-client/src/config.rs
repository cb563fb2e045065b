//! Public configuration for the endpoint client.

use odahu_core::{API_VERSION, DEFAULT_API_URL, ParamPolicy, SdkSettings};

/// Configuration for [`EndpointClient`](crate::EndpointClient).
///
/// Use the builder pattern methods to customize the configuration.
///
/// # Example
///
/// ```
/// use odahu_client::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_base_url("https://odahu.example.com")
///     .with_strict_params(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the platform API server
    pub(crate) base_url: String,
    /// API version substituted into every path
    pub(crate) api_version: String,
    /// How unused path parameters are treated
    pub(crate) param_policy: ParamPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            api_version: API_VERSION.to_string(),
            param_policy: ParamPolicy::Ignore,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from resolved SDK settings.
    #[must_use]
    pub fn from_settings(settings: &SdkSettings) -> Self {
        Self {
            base_url: settings.effective_api_url().to_string(),
            api_version: settings.effective_api_version().to_string(),
            param_policy: settings.effective_param_policy(),
        }
    }

    /// Set the base URL of the API server.
    ///
    /// Defaults to `http://localhost:5000`. A path prefix (for a gateway or
    /// reverse proxy) is kept in front of every endpoint path.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the API version. Defaults to `v1`.
    #[must_use]
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Reject path parameters the endpoint does not use.
    #[must_use]
    pub const fn with_strict_params(mut self, strict: bool) -> Self {
        self.param_policy = if strict {
            ParamPolicy::Reject
        } else {
            ParamPolicy::Ignore
        };
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub const fn param_policy(&self) -> ParamPolicy {
        self.param_policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::new();
        assert_eq!(config.base_url(), "http://localhost:5000");
        assert_eq!(config.api_version(), "v1");
        assert_eq!(config.param_policy(), ParamPolicy::Ignore);
    }

    #[test]
    fn test_builder_pattern() {
        let config = ClientConfig::new()
            .with_base_url("https://custom.api/")
            .with_api_version("v2")
            .with_strict_params(true);

        assert_eq!(config.base_url(), "https://custom.api/");
        assert_eq!(config.api_version(), "v2");
        assert_eq!(config.param_policy(), ParamPolicy::Reject);
    }

    #[test]
    fn test_from_settings_applies_defaults() {
        let settings = SdkSettings {
            api_url: Some("http://gateway".to_string()),
            ..SdkSettings::default()
        };
        let config = ClientConfig::from_settings(&settings);

        assert_eq!(config.base_url(), "http://gateway");
        assert_eq!(config.api_version(), "v1");
        assert_eq!(config.param_policy(), ParamPolicy::Ignore);
    }
}
