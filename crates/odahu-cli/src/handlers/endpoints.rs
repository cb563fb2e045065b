//! Endpoints command handler.
//!
//! Prints the endpoint table for the configured API version.

use odahu_core::EndpointRegistry;
use serde_json::json;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the endpoints command.
pub fn execute(ctx: &CliContext, json: bool) -> Result<(), CliError> {
    let registry = ctx.client.registry();
    let output = if json {
        render_json(registry)?
    } else {
        render_table(registry)
    };
    println!("{output}");
    Ok(())
}

/// One `name  template` line per endpoint, names left-aligned.
pub fn render_table(registry: &EndpointRegistry) -> String {
    let width = registry
        .endpoints()
        .map(|(key, _)| key.name().len())
        .max()
        .unwrap_or(0);

    registry
        .endpoints()
        .map(|(key, template)| format!("{:<width$}  {template}", key.name()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty-printed JSON array of endpoints.
pub fn render_json(registry: &EndpointRegistry) -> Result<String, CliError> {
    let entries: Vec<_> = registry
        .endpoints()
        .map(|(key, template)| {
            json!({
                "endpoint": key,
                "template": template.as_str(),
                "parameters": template.parameters().collect::<Vec<_>>(),
            })
        })
        .collect();

    let document = json!({
        "version": registry.version().as_str(),
        "endpoints": entries,
    });
    Ok(serde_json::to_string_pretty(&document)?)
}
