mod cli;
mod commands;
mod error;
mod output;

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use loquat_api::{DeviceClient, TransportConfig};

use crate::cli::Cli;
use crate::commands::Invocation;
use crate::error::{CliError, exit_code};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse CLI arguments; usage errors exit 1, help/version exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() {
                exit_code::GENERAL
            } else {
                exit_code::SUCCESS
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    // Setup tracing based on verbosity
    init_tracing(cli.verbose);

    // Dispatch and handle errors with proper exit codes
    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let invocation = Invocation::resolve(&cli)?;
    let config = build_transport_config(&cli)?;

    // The client lives for exactly this one request
    let client =
        DeviceClient::new(config).map_err(|e| CliError::from_api(e, &cli.command, &cli.server))?;
    let endpoint = client.config().endpoint(invocation.command);

    if !cli.quiet {
        output::print_output(&output::render_preamble(&invocation, client.config()))?;
    }

    tracing::debug!(command = %invocation.command, "dispatching command");
    let rendered = commands::execute(&client, &invocation, &endpoint).await?;
    output::print_output(&rendered)?;
    Ok(())
}

/// Build the `TransportConfig` for `http://{server}:{port}` with CLI timeouts.
fn build_transport_config(cli: &Cli) -> Result<TransportConfig, CliError> {
    let config = TransportConfig::for_device(&cli.server, cli.port).map_err(|e| match e {
        loquat_api::Error::InvalidUrl(source) => CliError::InvalidServer {
            server: cli.server.clone(),
            source,
        },
        other => CliError::from_api(other, &cli.command, &cli.server),
    })?;

    Ok(config.with_timeouts(
        Duration::from_secs(cli.timeout),
        Duration::from_secs(cli.long_timeout),
    ))
}
