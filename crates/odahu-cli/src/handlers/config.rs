//! Config command handler.
//!
//! Displays the effective settings in `key = value` format.

use odahu_core::SdkSettings;

use crate::bootstrap::CliContext;

/// Execute the config command.
pub fn execute(ctx: &CliContext) {
    println!("{}", render(&ctx.settings));
}

pub fn render(settings: &SdkSettings) -> String {
    format!(
        "api_url = {}\napi_version = {}\nstrict_params = {}",
        settings.effective_api_url(),
        settings.effective_api_version(),
        settings.strict_params.unwrap_or(false)
    )
}
