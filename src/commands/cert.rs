//! Certificate command handlers
//!
//! Batch operations report each domain through the event sink and keep
//! going; the command fails afterwards if any domain failed.

use std::sync::Arc;

use anyhow::{bail, Result};
use bootapp::domain::ports::{DomainAction, SetupEvent, SetupEventSink};
use bootapp::error::BootappResult;
use bootapp::presentation::{factory, output};

use crate::cli::CertAction;

pub fn cmd_cert(action: CertAction, json: bool) -> Result<()> {
    let config = super::load_config()?;
    let certs = factory::create_certificate_manager(&config);
    let sink = factory::event_sink(json, "cert");

    match action {
        CertAction::List { dir } => {
            let dir = super::cert_dir(&config, dir)?;
            let summaries = certs.summaries(&dir)?;
            if json {
                println!("{}", output::certificates_json(&summaries));
            } else {
                print!("{}", output::render_certificates(&summaries, true));
            }
            Ok(())
        }
        CertAction::Generate { domains, dir } => {
            let dir = super::cert_dir(&config, dir)?;
            for_each_domain(&domains, DomainAction::Generate, &sink, |d| {
                certs.generate(d, &dir).map(|_| ())
            })
        }
        CertAction::Install { domains, dir } => {
            let dir = super::cert_dir(&config, dir)?;
            for_each_domain(&domains, DomainAction::Trust, &sink, |d| {
                certs.install_to_trust_store(d, &dir)
            })
        }
        CertAction::Uninstall { domains } => {
            for_each_domain(&domains, DomainAction::Untrust, &sink, |d| {
                certs.uninstall_from_trust_store(d)
            })
        }
    }
}

fn for_each_domain(
    domains: &[String],
    action: DomainAction,
    sink: &Arc<dyn SetupEventSink>,
    op: impl Fn(&str) -> BootappResult<()>,
) -> Result<()> {
    let mut failed = 0usize;
    for domain in domains {
        match op(domain) {
            Ok(()) => sink.on_event(SetupEvent::DomainDone {
                domain: domain.clone(),
                action,
            }),
            Err(e) => {
                failed += 1;
                sink.on_event(SetupEvent::DomainFailed {
                    domain: domain.clone(),
                    action,
                    error: e.to_string(),
                });
            }
        }
    }
    sink.on_event(SetupEvent::Completed { warnings: failed });

    if failed > 0 {
        bail!("{failed} of {} certificate operation(s) failed", domains.len());
    }
    Ok(())
}
