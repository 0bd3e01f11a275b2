use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use bootapp::application::SetupRequest;
use bootapp::domain::entities::ContainerInfo;
use bootapp::presentation::factory;

use crate::cli::ContainerArg;

pub struct UpArgs {
    pub project: String,
    pub path: Option<PathBuf>,
    pub domains: Vec<String>,
    pub ssl_domains: Vec<String>,
    pub containers: Vec<ContainerArg>,
    pub force_recreate: bool,
}

pub fn cmd_up(args: UpArgs, json: bool) -> Result<()> {
    let config = super::load_config()?;
    let request = build_request(args, &config)?;

    let setup = factory::create_setup_use_case(&config)?;
    let report = setup.execute(&request, factory::event_sink(json, "up"))?;

    // With warnings the sink has already printed the summary line.
    if !json && report.warnings == 0 {
        println!("✓ {} is up ({})", request.project, report.project.subnet);
    }
    Ok(())
}

fn build_request(args: UpArgs, config: &bootapp::config::Config) -> Result<SetupRequest> {
    let path = match args.path {
        Some(path) => super::absolute(&path)?,
        None => std::env::current_dir()?,
    };

    let domains = if args.domains.is_empty() {
        vec![default_domain(&args.project)]
    } else {
        args.domains
    };

    let containers: BTreeMap<String, ContainerInfo> = args
        .containers
        .into_iter()
        .map(|c| {
            let hosts = if c.domains.is_empty() {
                domains.clone()
            } else {
                c.domains
            };
            (c.service, ContainerInfo::new(c.address, hosts))
        })
        .collect();

    Ok(SetupRequest {
        cert_dir: config.certs.resolve_dir(&path),
        project: args.project,
        path,
        domains,
        ssl_domains: args.ssl_domains,
        containers,
        force_recreate: args.force_recreate,
    })
}

/// `<project>.local`
pub(crate) fn default_domain(project: &str) -> String {
    format!("{project}.local")
}
