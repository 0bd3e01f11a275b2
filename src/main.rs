//! Bootapp CLI - local networking for container projects
//!
//! Usage: bootapp <COMMAND>
//!
//! Commands:
//!   up     Register a project, create certificates and hosts entries
//!   down   Remove hosts entries (and optionally the registry record)
//!   ls     List registered projects
//!   hosts  Inspect hosts entries
//!   cert   Manage development certificates

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::{Cli, Commands};

/// Env var holding a tracing filter directive (`RUST_LOG` syntax).
const LOG_ENV_VAR: &str = "BOOTAPP_LOG";

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Up {
            project,
            path,
            domains,
            ssl_domains,
            containers,
            force_recreate,
        } => commands::up::cmd_up(
            commands::up::UpArgs {
                project,
                path,
                domains,
                ssl_domains,
                containers,
                force_recreate,
            },
            cli.json,
        ),
        Commands::Down {
            project,
            keep_hosts,
            remove_config,
        } => commands::down::cmd_down(project, keep_hosts, remove_config, cli.json),
        Commands::Ls => commands::ls::cmd_ls(cli.json),
        Commands::Hosts { action } => commands::hosts::cmd_hosts(action, cli.json),
        Commands::Cert { action } => commands::cert::cmd_cert(action, cli.json),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
