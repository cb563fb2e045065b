//! CLI entry point - the composition root.

use clap::{CommandFactory, Parser};

use odahu_cli::handlers::resolve::ResolveRequest;
use odahu_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

/// Initialize logging to stderr.
///
/// Level is controlled by `RUST_LOG` (default: warn); `--verbose` forces debug.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .ok(); // Ignore error if already initialized
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // No command provided - show help
    let Some(ref command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let ctx = bootstrap(&CliConfig::from_cli(&cli))?;

    match command {
        Commands::Endpoints { json } => handlers::endpoints::execute(&ctx, *json)?,
        Commands::Resolve {
            endpoint,
            params,
            item,
            segments,
            url,
        } => {
            let request = ResolveRequest {
                endpoint: endpoint.clone(),
                params: params.clone(),
                item: item.clone(),
                segments: segments.clone(),
                url: *url,
            };
            handlers::resolve::execute(&ctx, &request)?;
        }
        Commands::Config => handlers::config::execute(&ctx),
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        std::process::exit(code);
    }
}
