//! Teardown Use Case
//!
//! The `down` pipeline: drop the project's hosts entries unless asked to keep
//! them, then optionally forget the project so its subnet can be reused.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::ports::{SetupEvent, SetupEventSink};
use crate::error::BootappResult;

use super::hosts::HostsEntryManager;
use super::registry::RegistryUseCase;
use super::Reporter;

#[derive(Debug, Clone, Default)]
pub struct TeardownRequest {
    pub project: String,
    pub keep_hosts: bool,
    pub remove_config: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeardownReport {
    pub hosts_removed: bool,
    pub project_removed: bool,
    pub warnings: usize,
}

pub struct TeardownUseCase {
    registry: RegistryUseCase,
    hosts: HostsEntryManager,
}

impl TeardownUseCase {
    pub fn new(registry: RegistryUseCase, hosts: HostsEntryManager) -> Self {
        Self { registry, hosts }
    }

    pub fn execute(
        &self,
        request: &TeardownRequest,
        events: Arc<dyn SetupEventSink>,
    ) -> BootappResult<TeardownReport> {
        let reporter = Reporter::new(events);
        let name = request.project.as_str();
        let mut report = TeardownReport::default();

        if !request.keep_hosts {
            match self.hosts.remove_project_entries(name) {
                Ok(removed) => {
                    report.hosts_removed = removed;
                    if removed {
                        reporter.emit(SetupEvent::HostsEntriesRemoved {
                            project: name.to_string(),
                        });
                    }
                }
                Err(e) => {
                    warn!(project = name, error = %e, "hosts cleanup failed");
                    reporter.emit(SetupEvent::HostsFailed {
                        error: e.to_string(),
                    });
                }
            }
        }

        if request.remove_config && self.registry.remove(name)?.is_some() {
            report.project_removed = true;
            reporter.emit(SetupEvent::ProjectRemoved {
                name: name.to_string(),
            });
        }

        report.warnings = reporter.warnings();
        reporter.emit(SetupEvent::Completed {
            warnings: report.warnings,
        });
        info!(project = name, "teardown finished");
        Ok(report)
    }
}
