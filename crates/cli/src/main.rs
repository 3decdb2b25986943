//! rf2ctl - rFactor 2 controller binding inspector
//!
//! Labels the controller bindings in a settings snapshot the way the settings
//! UI shows them, and resolves DirectInput key codes.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod config;
mod error;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rf2_input_maps::SnapshotSource;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{CliConfig, SortKey};
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "rf2ctl")]
#[command(about = "rFactor 2 controller binding inspector")]
#[command(version)]
#[command(long_about = "
rf2ctl reads controller binding snapshots produced by the settings backend
(or the simulator's own Controller.json) and prints the label and device type
of every binding, exactly as the settings UI displays them.

Use --json for machine-readable output suitable for scripting.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// YAML configuration file
    #[arg(long, global = true, env = "RF2CTL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Label every binding in a snapshot file
    Label {
        /// Snapshot file, or `-` for stdin
        input: PathBuf,

        /// Encoding of the snapshot (descriptors or native)
        #[arg(short, long, env = "RF2CTL_SOURCE")]
        source: Option<SnapshotSource>,

        /// Order of the printed bindings
        #[arg(long, value_enum)]
        sort_by: Option<SortKey>,
    },

    /// Resolve a DirectInput scan code to its DIK name
    Dik {
        /// Scan code, decimal or 0x-prefixed hex
        code: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("rf2ctl={log_level},rf2_input_maps={log_level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }

            let code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    let config = CliConfig::load(cli.config.as_deref())?;

    match &cli.command {
        Commands::Label {
            input,
            source,
            sort_by,
        } => commands::label::execute(
            input,
            source.unwrap_or(config.source),
            sort_by.unwrap_or(config.sort_by),
            cli.json,
        ),
        Commands::Dik { code } => commands::dik::execute(code, cli.json),
    }
}
