//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `RegistryUseCase` - Get, list and remove registered projects
//! - `ReconcileUseCase` - Create or update a project's registry record
//! - `HostsEntryManager` - Tool-owned records in the hosts file
//! - `CertificateManager` - Per-domain certificates and trust
//! - `SetupUseCase` - The `up` pipeline
//! - `TeardownUseCase` - The `down` pipeline

pub mod certificates;
pub mod hosts;
pub mod reconcile;
pub mod registry;
pub mod setup;
pub mod teardown;

#[cfg(test)]
pub(crate) mod test_support;

use std::cell::Cell;
use std::fmt::Display;
use std::sync::Arc;

use tracing::warn;

use crate::domain::ports::{DomainAction, SetupEvent, SetupEventSink};

pub use certificates::{CertificateManager, CertificateSummary};
pub use hosts::HostsEntryManager;
pub use reconcile::{ReconcileUseCase, Reconciliation};
pub use registry::RegistryUseCase;
pub use setup::{SetupReport, SetupRequest, SetupUseCase};
pub use teardown::{TeardownReport, TeardownRequest, TeardownUseCase};

/// Forwards events to a sink and counts warnings.
pub(crate) struct Reporter {
    sink: Arc<dyn SetupEventSink>,
    warnings: Cell<usize>,
}

impl Reporter {
    pub(crate) fn new(sink: Arc<dyn SetupEventSink>) -> Self {
        Self {
            sink,
            warnings: Cell::new(0),
        }
    }

    pub(crate) fn emit(&self, event: SetupEvent) {
        if event.is_warning() {
            self.warnings.set(self.warnings.get() + 1);
        }
        self.sink.on_event(event);
    }

    pub(crate) fn done(&self, domain: &str, action: DomainAction) {
        self.emit(SetupEvent::DomainDone {
            domain: domain.to_string(),
            action,
        });
    }

    pub(crate) fn failed(&self, domain: &str, action: DomainAction, error: impl Display) {
        warn!(domain, %action, error = %error, "domain step failed");
        self.emit(SetupEvent::DomainFailed {
            domain: domain.to_string(),
            action,
            error: error.to_string(),
        });
    }

    pub(crate) fn warnings(&self) -> usize {
        self.warnings.get()
    }
}
