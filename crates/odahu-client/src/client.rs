//! Endpoint client: registry plus base URL.
//!
//! This is the piece an HTTP layer sits on top of. It answers "which URL do I
//! call for this resource" and nothing else.

use odahu_core::{
    ApiVersion, EndpointKey, EndpointRegistry, PathParams, ResolvedPath, SdkSettings,
    validate_settings,
};
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::url::{build_endpoint_url, parse_base_url};

/// Resolves endpoints to absolute URLs on one API server.
#[derive(Debug, Clone)]
pub struct EndpointClient {
    base_url: Url,
    registry: EndpointRegistry,
}

impl EndpointClient {
    /// Create a client with the given configuration.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let base_url = parse_base_url(&config.base_url)?;
        let version = ApiVersion::new(config.api_version.as_str())?;
        let registry =
            EndpointRegistry::with_version(version)?.with_param_policy(config.param_policy);

        debug!(
            base_url = %base_url,
            version = %registry.version(),
            "Created endpoint client"
        );

        Ok(Self { base_url, registry })
    }

    /// Create a client from validated SDK settings.
    pub fn from_settings(settings: &SdkSettings) -> ClientResult<Self> {
        validate_settings(settings)?;
        Self::new(&ClientConfig::from_settings(settings))
    }

    /// Create a client with default configuration.
    pub fn default_client() -> ClientResult<Self> {
        Self::new(&ClientConfig::default())
    }

    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub const fn registry(&self) -> &EndpointRegistry {
        &self.registry
    }

    /// Absolute URL for `key` with the given path parameters.
    pub fn url_for(&self, key: EndpointKey, params: &PathParams) -> ClientResult<Url> {
        let path = self.registry.resolve(key, params)?;
        Ok(self.url_for_path(&path))
    }

    /// Absolute URL of one item in a collection endpoint.
    pub fn item_url(&self, key: EndpointKey, id: &str) -> ClientResult<Url> {
        let path = self.registry.resolve_item(key, id)?;
        Ok(self.url_for_path(&path))
    }

    /// Absolute URL for an already resolved path.
    pub fn url_for_path(&self, path: &ResolvedPath) -> Url {
        build_endpoint_url(&self.base_url, path)
    }
}
