//! Setup Use Case
//!
//! The `up` pipeline. Steps run strictly in order:
//!
//! 1. reconcile the registry record (errors abort before any system change)
//! 2. untrust and delete certificates of SSL domains no longer requested
//! 3. with `force_recreate`, untrust and delete current certificates
//! 4. generate missing certificates
//! 5. rewrite the project's hosts entries
//! 6. trust certificates
//!
//! Everything after step 1 is best effort: failures become warning events and
//! the remaining domains are still processed.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::{ContainerInfo, HostsRecord, ProjectInfo};
use crate::domain::ports::{DomainAction, SetupEvent, SetupEventSink};
use crate::domain::services::ProjectChanges;
use crate::error::BootappResult;

use super::certificates::CertificateManager;
use super::hosts::HostsEntryManager;
use super::reconcile::{ReconcileUseCase, Reconciliation};
use super::Reporter;

#[derive(Debug, Clone, Default)]
pub struct SetupRequest {
    pub project: String,
    pub path: PathBuf,
    pub domains: Vec<String>,
    pub ssl_domains: Vec<String>,
    /// Running containers keyed by service name
    pub containers: BTreeMap<String, ContainerInfo>,
    /// Directory receiving `<domain>.{crt,key,pem}`
    pub cert_dir: PathBuf,
    pub force_recreate: bool,
}

#[derive(Debug, Clone)]
pub struct SetupReport {
    pub project: ProjectInfo,
    pub changes: ProjectChanges,
    pub created: bool,
    pub hosts_records: Vec<HostsRecord>,
    /// SSL domains whose certificate was (re)generated this run
    pub generated: Vec<String>,
    pub warnings: usize,
}

pub struct SetupUseCase {
    reconcile: ReconcileUseCase,
    hosts: HostsEntryManager,
    certificates: CertificateManager,
}

impl SetupUseCase {
    pub fn new(
        reconcile: ReconcileUseCase,
        hosts: HostsEntryManager,
        certificates: CertificateManager,
    ) -> Self {
        Self {
            reconcile,
            hosts,
            certificates,
        }
    }

    pub fn execute(
        &self,
        request: &SetupRequest,
        events: Arc<dyn SetupEventSink>,
    ) -> BootappResult<SetupReport> {
        let reporter = Reporter::new(events);
        let name = request.project.as_str();

        let Reconciliation {
            project,
            changes,
            created,
        } = self.reconcile.reconcile(
            name,
            &request.path,
            &request.domains,
            &request.ssl_domains,
        )?;

        reporter.emit(SetupEvent::ProjectResolved {
            name: name.to_string(),
            subnet: project.subnet.clone(),
            created,
        });
        if changes.domain_changed {
            reporter.emit(SetupEvent::DomainsChanged {
                previous: changes.previous_domains.clone(),
                current: project.domains.clone(),
            });
        }

        self.clean_removed_ssl_domains(&changes, request, &reporter);
        if request.force_recreate {
            self.remove_current_certificates(request, &reporter);
        }
        let (generated, to_trust) = self.generate_certificates(request, &reporter);
        let hosts_records = self.update_hosts(name, &changes, request, &reporter);
        self.trust_certificates(&to_trust, request, &reporter);

        let warnings = reporter.warnings();
        reporter.emit(SetupEvent::Completed { warnings });
        info!(project = name, warnings, "setup finished");

        Ok(SetupReport {
            project,
            changes,
            created,
            hosts_records,
            generated,
            warnings,
        })
    }

    fn clean_removed_ssl_domains(
        &self,
        changes: &ProjectChanges,
        request: &SetupRequest,
        reporter: &Reporter,
    ) {
        for domain in &changes.removed_ssl_domains {
            self.untrust(domain, reporter);
            if self.certificates.exists(domain, &request.cert_dir) {
                self.delete(domain, request, reporter);
            }
        }
    }

    fn remove_current_certificates(&self, request: &SetupRequest, reporter: &Reporter) {
        for domain in &request.ssl_domains {
            if self.certificates.exists(domain, &request.cert_dir) {
                self.untrust(domain, reporter);
                self.delete(domain, request, reporter);
            }
        }
    }

    /// Returns (generated, to_trust).
    fn generate_certificates(
        &self,
        request: &SetupRequest,
        reporter: &Reporter,
    ) -> (Vec<String>, Vec<String>) {
        let mut generated = Vec::new();
        let mut to_trust = Vec::new();

        for domain in &request.ssl_domains {
            if !self.certificates.exists(domain, &request.cert_dir) {
                match self.certificates.generate(domain, &request.cert_dir) {
                    Ok(_) => {
                        reporter.done(domain, DomainAction::Generate);
                        generated.push(domain.clone());
                    }
                    Err(e) => {
                        reporter.failed(domain, DomainAction::Generate, e);
                        continue;
                    }
                }
            }

            let trusted = !request.force_recreate
                && self.certificates.is_trusted(domain).unwrap_or(false);
            if trusted {
                reporter.emit(SetupEvent::AlreadyTrusted {
                    domain: domain.clone(),
                });
            } else {
                to_trust.push(domain.clone());
            }
        }

        (generated, to_trust)
    }

    fn update_hosts(
        &self,
        name: &str,
        changes: &ProjectChanges,
        request: &SetupRequest,
        reporter: &Reporter,
    ) -> Vec<HostsRecord> {
        if changes.domain_changed && changes.previous_domain().is_some() {
            match self.hosts.remove_project_entries(name) {
                Ok(_) => reporter.emit(SetupEvent::HostsEntriesRemoved {
                    project: name.to_string(),
                }),
                Err(e) => reporter.emit(SetupEvent::HostsFailed {
                    error: e.to_string(),
                }),
            }
        }

        match self.hosts.add_entries(name, &request.containers) {
            Ok(records) => {
                for record in &records {
                    reporter.emit(SetupEvent::HostsEntryAdded {
                        hostname: record.hostname.clone(),
                        address: record.address.clone(),
                    });
                }
                records
            }
            Err(e) => {
                warn!(project = name, error = %e, "hosts update failed");
                reporter.emit(SetupEvent::HostsFailed {
                    error: e.to_string(),
                });
                Vec::new()
            }
        }
    }

    fn trust_certificates(&self, domains: &[String], request: &SetupRequest, reporter: &Reporter) {
        for domain in domains {
            match self
                .certificates
                .install_to_trust_store(domain, &request.cert_dir)
            {
                Ok(()) => reporter.done(domain, DomainAction::Trust),
                Err(e) => reporter.failed(domain, DomainAction::Trust, e),
            }
        }
    }

    fn untrust(&self, domain: &str, reporter: &Reporter) {
        match self.certificates.uninstall_from_trust_store(domain) {
            Ok(()) => reporter.done(domain, DomainAction::Untrust),
            Err(e) => reporter.failed(domain, DomainAction::Untrust, e),
        }
    }

    fn delete(&self, domain: &str, request: &SetupRequest, reporter: &Reporter) {
        match self.certificates.remove(domain, &request.cert_dir) {
            Ok(()) => reporter.done(domain, DomainAction::Remove),
            Err(e) => reporter.failed(domain, DomainAction::Remove, e),
        }
    }
}
