//! Main commands enum.
//!
//! This module defines the available commands for the CLI tool.

use clap::Subcommand;

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List every endpoint with its path template
    Endpoints {
        /// Print JSON instead of aligned text
        #[arg(long)]
        json: bool,
    },

    /// Resolve an endpoint to a request path
    Resolve {
        /// Endpoint name (e.g. "model-deployment-default-route")
        endpoint: String,
        /// Path parameter as name=value (repeatable)
        #[arg(short = 'p', long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
        /// Address one item of the collection (appends /<id>)
        #[arg(long, conflicts_with = "params")]
        item: Option<String>,
        /// Extra path segment to append, e.g. "log" (repeatable)
        #[arg(long = "segment")]
        segments: Vec<String>,
        /// Print the absolute URL instead of the path
        #[arg(long)]
        url: bool,
    },

    /// Show effective SDK settings
    Config,
}

/// Parse a `name=value` path parameter.
fn parse_param(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("parameter name is empty in '{raw}'"));
    }
    Ok((name.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cli;
    use clap::Parser;

    #[test]
    fn test_parse_param() {
        assert_eq!(
            parse_param("id=42"),
            Ok(("id".to_string(), "42".to_string()))
        );
        assert_eq!(
            parse_param("id=a=b"),
            Ok(("id".to_string(), "a=b".to_string()))
        );
        assert!(parse_param("id").is_err());
        assert!(parse_param("=42").is_err());
    }

    #[test]
    fn test_resolve_args() {
        let cli = Cli::parse_from([
            "odahu",
            "resolve",
            "model-deployment-default-route",
            "-p",
            "id=42",
            "--url",
        ]);
        let Some(Commands::Resolve {
            endpoint,
            params,
            item,
            segments,
            url,
        }) = cli.command
        else {
            panic!("expected resolve command");
        };
        assert_eq!(endpoint, "model-deployment-default-route");
        assert_eq!(params, vec![("id".to_string(), "42".to_string())]);
        assert!(item.is_none());
        assert!(segments.is_empty());
        assert!(url);
    }

    #[test]
    fn test_resolve_item_conflicts_with_param() {
        let result = Cli::try_parse_from([
            "odahu",
            "resolve",
            "model-deployment-default-route",
            "-p",
            "id=42",
            "--item",
            "wine",
        ]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_resolve_rejects_malformed_param() {
        let result = Cli::try_parse_from(["odahu", "resolve", "feedback", "--param", "oops"]);
        assert!(result.is_err());
    }
}
