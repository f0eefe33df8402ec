//! Lex Model Building Service request tool.
//!
//! Binary name: `lexm`
//!
//! Parses CLI arguments, loads the client configuration, then dispatches to
//! the command handler. Nothing is sent over the network.

mod cli;
mod config;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use lexmodel_observe::{TracingOptions, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&TracingOptions {
        verbosity: cli.verbose,
        quiet: cli.quiet,
        json: cli.json,
    })
    .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    // Shell completions don't need a config
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "lexm", &mut std::io::stdout());
        return Ok(());
    }

    let config_path = config::resolve_config_path(cli.config.as_deref());
    let client_config = config::apply_overrides(
        config::load_client_config(&config_path).await,
        cli.region.clone(),
    );
    tracing::debug!(
        region = %client_config.region,
        validation = ?client_config.validation,
        "configuration loaded"
    );

    match cli.command {
        Commands::Operations => {
            cli::operations::list_operations(cli.json)?;
        }

        Commands::Validate { operation, file } => {
            cli::request::validate_request(&operation, &file, cli.json, cli.quiet).await?;
        }

        Commands::Render {
            operation,
            file,
            no_validate,
        } => {
            cli::request::render_request(&client_config, &operation, &file, no_validate, cli.json)
                .await?;
        }

        Commands::DecodeError {
            status,
            error_type,
            retry_after,
            file,
        } => {
            cli::decode::decode_error(
                status,
                error_type.as_deref(),
                retry_after.as_deref(),
                &file,
                cli.json,
            )
            .await?;
        }

        Commands::Config => {
            cli::config::show_config(&client_config, &config_path, cli.json)?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
