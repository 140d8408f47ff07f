//! statwatch - application server statistics checks
//!
//! Main entry point for the statwatch CLI and HTTP agent.

mod agent;
mod cli;
mod cmd_check;
mod routes;
mod server;

use std::process::ExitCode;

use clap::Parser;

use statwatch_config::{ConfigLoader, ConfigValidator};

use crate::cli::{Cli, Commands};
use crate::cmd_check::{handle_check, handle_probes};
use crate::server::{init_tracing, run_server};

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = ConfigLoader::load_or_default(&cli.config)?;
    init_tracing(&config.logging)?;

    for warning in ConfigValidator::validate(&config).into_result()? {
        tracing::warn!("{}: {}", warning.path, warning.message);
    }

    match cli.command {
        Commands::Check {
            instance,
            snapshot,
            probes,
        } => {
            let code = handle_check(&config, &instance, snapshot, probes)?;
            Ok(ExitCode::from(code))
        }
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            run_server(config).await?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Probes => {
            handle_probes();
            Ok(ExitCode::SUCCESS)
        }
    }
}
