//! CLI definitions for statwatch.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// statwatch CLI.
#[derive(Parser)]
#[command(name = "statwatch")]
#[command(about = "Application server statistics checks for monitoring systems")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run the configured checks once and print the report line
    Check {
        /// Instance whose snapshot is read from the snapshot directory
        #[arg(short, long)]
        instance: String,

        /// Snapshot file, overrides the snapshot directory lookup
        #[arg(short, long)]
        snapshot: Option<PathBuf>,

        /// Probe selection as name=selection, e.g. pool=*,80,90 (repeatable)
        #[arg(short, long = "probe", value_parser = parse_probe_arg)]
        probes: Vec<(String, String)>,
    },

    /// Run the HTTP agent
    Serve {
        /// Server host
        #[arg(long)]
        host: Option<String>,

        /// Server port
        #[arg(long)]
        port: Option<u16>,
    },

    /// List the available probes
    Probes,
}

/// Parse `name=selection`.
fn parse_probe_arg(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((name, selection)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), selection.to_string()))
        }
        _ => Err(format!("expected name=selection, got '{}'", arg)),
    }
}
