//! Resolve command handler.

use odahu_core::{EndpointKey, PathParams};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Arguments of the resolve command.
#[derive(Debug, Clone, Default)]
pub struct ResolveRequest {
    pub endpoint: String,
    pub params: Vec<(String, String)>,
    pub item: Option<String>,
    pub segments: Vec<String>,
    pub url: bool,
}

/// Execute the resolve command.
pub fn execute(ctx: &CliContext, request: &ResolveRequest) -> Result<(), CliError> {
    println!("{}", render(ctx, request)?);
    Ok(())
}

/// Resolve the requested endpoint to a path, or an absolute URL with `--url`.
///
/// `--item` addresses `<collection>/<id>` and takes no path parameters.
pub fn render(ctx: &CliContext, request: &ResolveRequest) -> Result<String, CliError> {
    let registry = ctx.client.registry();
    let key = EndpointKey::from_name(&request.endpoint)?;

    let mut path = match request.item {
        Some(ref id) if request.params.is_empty() => registry.resolve_item(key, id)?,
        Some(_) => {
            return Err(CliError::Arguments(
                "--item cannot be combined with --param".to_string(),
            ));
        }
        None => {
            let params: PathParams = request.params.iter().cloned().collect();
            registry.resolve(key, &params)?
        }
    };
    for segment in &request.segments {
        path = path.join(segment)?;
    }

    if request.url {
        Ok(ctx.client.url_for_path(&path).to_string())
    } else {
        Ok(path.into_string())
    }
}
