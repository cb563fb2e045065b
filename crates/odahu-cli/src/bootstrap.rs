//! CLI bootstrap - the composition root.
//!
//! Settings are read from the process environment (or a dotenv file), global
//! flags are overlaid, and the result is validated once before any command
//! runs.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use odahu_client::EndpointClient;
use odahu_core::{SdkSettings, SettingsUpdate, validate_settings};
use tracing::debug;

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Dotenv file to read instead of the process environment.
    pub env_file: Option<PathBuf>,
    /// Overrides from global flags.
    pub overrides: SettingsUpdate,
}

impl CliConfig {
    /// Collect bootstrap configuration from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            env_file: cli.env_file.clone(),
            overrides: SettingsUpdate {
                api_url: cli.api_url.clone(),
                api_version: cli.api_version.clone(),
                strict_params: cli.strict.then_some(true),
            },
        }
    }
}

/// Fully composed context for CLI commands.
#[derive(Debug, Clone)]
pub struct CliContext {
    /// Effective, validated settings.
    pub settings: SdkSettings,
    /// Endpoint client built from `settings`.
    pub client: EndpointClient,
}

/// Load settings, apply overrides and build the endpoint client.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    let mut settings = match config.env_file {
        Some(ref path) => SdkSettings::from_source(&read_env_file(path)?)?,
        None => SdkSettings::from_env()?,
    };
    settings.merge(&config.overrides);
    validate_settings(&settings)?;

    let client = EndpointClient::from_settings(&settings)?;
    debug!(
        api_url = settings.effective_api_url(),
        api_version = settings.effective_api_version(),
        "CLI context ready"
    );

    Ok(CliContext { settings, client })
}

/// Read a dotenv file into a map without touching the process environment.
fn read_env_file(path: &Path) -> Result<HashMap<String, String>, CliError> {
    let vars = dotenvy::from_path_iter(path)?.collect::<Result<HashMap<_, _>, _>>()?;
    debug!(path = %path.display(), count = vars.len(), "Read env file");
    Ok(vars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use odahu_core::{EndpointKey, ParamPolicy};
    use std::io::Write;

    fn env_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_bootstrap_from_env_file() {
        let file = env_file(
            "ODAHUFLOW_API_URL=https://odahu.example.com\nODAHUFLOW_API_VERSION=v2\n",
        );
        let config = CliConfig {
            env_file: Some(file.path().to_path_buf()),
            ..CliConfig::default()
        };

        let ctx = bootstrap(&config).unwrap();
        assert_eq!(ctx.settings.effective_api_url(), "https://odahu.example.com");
        assert_eq!(
            ctx.client
                .url_for(EndpointKey::Feedback, &odahu_core::PathParams::new())
                .unwrap()
                .as_str(),
            "https://odahu.example.com/api/v2/feedback"
        );
    }

    #[test]
    fn test_flags_override_env_file() {
        let file = env_file("ODAHUFLOW_API_VERSION=v2\nODAHUFLOW_STRICT_PARAMS=false\n");
        let config = CliConfig {
            env_file: Some(file.path().to_path_buf()),
            overrides: SettingsUpdate {
                api_version: Some("v3".to_string()),
                strict_params: Some(true),
                ..SettingsUpdate::default()
            },
        };

        let ctx = bootstrap(&config).unwrap();
        assert_eq!(ctx.settings.effective_api_version(), "v3");
        assert_eq!(ctx.client.registry().param_policy(), ParamPolicy::Reject);
    }

    #[test]
    fn test_invalid_env_file_value_is_config_error() {
        let file = env_file("ODAHUFLOW_STRICT_PARAMS=sometimes\n");
        let config = CliConfig {
            env_file: Some(file.path().to_path_buf()),
            ..CliConfig::default()
        };

        let err = bootstrap(&config).unwrap_err();
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn test_missing_env_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig {
            env_file: Some(dir.path().join("missing.env")),
            ..CliConfig::default()
        };

        let err = bootstrap(&config).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }

    #[test]
    fn test_bad_url_override_is_config_error() {
        let file = env_file("");
        let config = CliConfig {
            env_file: Some(file.path().to_path_buf()),
            overrides: SettingsUpdate {
                api_url: Some("not-a-url".to_string()),
                ..SettingsUpdate::default()
            },
        };

        let err = bootstrap(&config).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }
}
