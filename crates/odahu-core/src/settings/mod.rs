//! SDK settings and validation.
//!
//! Settings are plain data: where the platform API lives, which API version
//! to address and how strictly path parameters are checked. They are read
//! from a [`SettingsSource`] and can be overlaid with explicit overrides.

mod source;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::endpoints::{
    API_VERSION, ApiVersion, EndpointError, EndpointRegistry, ParamPolicy,
};

pub use source::{API_URL_VAR, API_VERSION_VAR, ProcessEnv, STRICT_PARAMS_VAR, SettingsSource};

/// Default platform API URL.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// SDK settings structure.
///
/// All fields are optional so that partial sources compose; the
/// `effective_*` accessors apply defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SdkSettings {
    /// Base URL of the platform API server.
    pub api_url: Option<String>,

    /// API version substituted into every path template.
    pub api_version: Option<String>,

    /// Reject path parameters the endpoint template does not use.
    pub strict_params: Option<bool>,
}

impl SdkSettings {
    /// Create settings with every default filled in.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            api_url: Some(DEFAULT_API_URL.to_string()),
            api_version: Some(API_VERSION.to_string()),
            strict_params: Some(false),
        }
    }

    /// Read settings from `source`.
    ///
    /// Unset and blank variables leave the field as `None`.
    pub fn from_source(source: &impl SettingsSource) -> Result<Self, SettingsError> {
        let api_url = non_blank(source, API_URL_VAR);
        let api_version = non_blank(source, API_VERSION_VAR);
        let strict_params = non_blank(source, STRICT_PARAMS_VAR)
            .map(|value| parse_bool(STRICT_PARAMS_VAR, &value))
            .transpose()?;

        let settings = Self {
            api_url,
            api_version,
            strict_params,
        };
        debug!(?settings, "Loaded SDK settings");
        Ok(settings)
    }

    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_source(&ProcessEnv)
    }

    pub fn effective_api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    pub fn effective_api_version(&self) -> &str {
        self.api_version.as_deref().unwrap_or(API_VERSION)
    }

    pub fn effective_param_policy(&self) -> ParamPolicy {
        if self.strict_params.unwrap_or(false) {
            ParamPolicy::Reject
        } else {
            ParamPolicy::Ignore
        }
    }

    /// Merge another settings into this one, only updating fields that are Some.
    pub fn merge(&mut self, other: &SettingsUpdate) {
        if let Some(ref url) = other.api_url {
            self.api_url = Some(url.clone());
        }
        if let Some(ref version) = other.api_version {
            self.api_version = Some(version.clone());
        }
        if let Some(strict) = other.strict_params {
            self.strict_params = Some(strict);
        }
    }

    /// Build an endpoint registry for the effective version and policy.
    pub fn registry(&self) -> Result<EndpointRegistry, SettingsError> {
        let version = ApiVersion::new(self.effective_api_version())?;
        Ok(EndpointRegistry::with_version(version)?
            .with_param_policy(self.effective_param_policy()))
    }
}

/// Explicit overrides, e.g. from command-line flags.
///
/// `None` leaves the corresponding setting untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsUpdate {
    pub api_url: Option<String>,
    pub api_version: Option<String>,
    pub strict_params: Option<bool>,
}

/// Settings validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("API URL cannot be empty")]
    EmptyApiUrl,

    #[error("{var} must be a boolean (true/false, 1/0, yes/no, on/off), got '{value}'")]
    InvalidBool { var: String, value: String },

    #[error(transparent)]
    ApiVersion(#[from] EndpointError),
}

/// Validate settings values.
pub fn validate_settings(settings: &SdkSettings) -> Result<(), SettingsError> {
    if settings
        .api_url
        .as_ref()
        .is_some_and(|url| url.trim().is_empty())
    {
        return Err(SettingsError::EmptyApiUrl);
    }

    ApiVersion::new(settings.effective_api_version())?;

    Ok(())
}

fn non_blank(source: &impl SettingsSource, name: &str) -> Option<String> {
    let value = source.var(name)?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        warn!(var = name, "Ignoring blank setting");
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_bool(var: &str, value: &str) -> Result<bool, SettingsError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(SettingsError::InvalidBool {
            var: var.to_string(),
            value: value.to_string(),
        }),
    }
}
