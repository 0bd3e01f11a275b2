use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Bootapp - per-project subnets, hosts entries and trusted dev certificates
#[derive(Parser, Debug)]
#[command(name = "bootapp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit machine-readable JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register or update a project, then set up certificates and hosts entries
    Up {
        /// Project name (registry key)
        project: String,

        /// Project directory (defaults to the current directory)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Domain served by the project (repeatable; defaults to <project>.local)
        #[arg(long = "domain", value_name = "DOMAIN")]
        domains: Vec<String>,

        /// Domain that needs a trusted certificate (repeatable)
        #[arg(long = "ssl-domain", value_name = "DOMAIN")]
        ssl_domains: Vec<String>,

        /// Running container as service=address[:host,host...] (repeatable)
        #[arg(long = "container", value_name = "SPEC", value_parser = parse_container)]
        containers: Vec<ContainerArg>,

        /// Delete, regenerate and re-trust every SSL certificate
        #[arg(long)]
        force_recreate: bool,
    },

    /// Remove a project's hosts entries and optionally its registry record
    Down {
        /// Project name
        project: String,

        /// Leave hosts entries in place
        #[arg(long)]
        keep_hosts: bool,

        /// Forget the project and free its subnet
        #[arg(long)]
        remove_config: bool,
    },

    /// List registered projects
    Ls,

    /// Inspect hosts entries
    Hosts {
        #[command(subcommand)]
        action: HostsAction,
    },

    /// Manage development certificates
    Cert {
        #[command(subcommand)]
        action: CertAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum HostsAction {
    /// List entries written by bootapp
    List,

    /// Print the address a hostname resolves to in the hosts file
    Lookup { hostname: String },
}

#[derive(Subcommand, Debug)]
pub enum CertAction {
    /// List certificates with fingerprint and trust state
    List {
        /// Certificate directory (defaults to the configured one)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Generate (or overwrite) certificates
    Generate {
        #[arg(required = true)]
        domains: Vec<String>,

        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Add certificates to the system trust store
    Install {
        #[arg(required = true)]
        domains: Vec<String>,

        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Remove certificates from the system trust store
    Uninstall {
        #[arg(required = true)]
        domains: Vec<String>,
    },
}

/// `--container web=172.18.0.2:shop.local,api.local`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerArg {
    pub service: String,
    pub address: String,
    /// Empty means "the project's domains"
    pub domains: Vec<String>,
}

pub fn parse_container(s: &str) -> Result<ContainerArg, String> {
    let (service, rest) = s
        .split_once('=')
        .ok_or_else(|| format!("expected service=address[:host,...], got '{s}'"))?;
    let service = service.trim();
    if service.is_empty() {
        return Err(format!("missing service name in '{s}'"));
    }

    let (address, hosts) = match rest.split_once(':') {
        Some((address, hosts)) => (address, hosts),
        None => (rest, ""),
    };
    let address = address.trim();
    if address.is_empty() {
        return Err(format!("missing address in '{s}'"));
    }

    let domains = hosts
        .split(',')
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .map(String::from)
        .collect();

    Ok(ContainerArg {
        service: service.to_string(),
        address: address.to_string(),
        domains,
    })
}
