//! Where settings values come from.

use std::collections::HashMap;

/// Environment variable holding the platform API URL.
pub const API_URL_VAR: &str = "ODAHUFLOW_API_URL";

/// Environment variable holding the API version token.
pub const API_VERSION_VAR: &str = "ODAHUFLOW_API_VERSION";

/// Environment variable enabling strict path-parameter checking.
pub const STRICT_PARAMS_VAR: &str = "ODAHUFLOW_STRICT_PARAMS";

/// A lookup of named string values, such as the process environment or a
/// parsed dotenv file.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsSource {
    /// Value of `name`, if set.
    fn var(&self, name: &str) -> Option<String>;
}

/// The current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl SettingsSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl SettingsSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}
