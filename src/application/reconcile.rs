//! Reconcile Use Case
//!
//! Brings a project's registry record in line with what the caller asked for.
//! Unknown projects get a fresh subnet; known projects keep theirs and only
//! have their path and domain lists updated.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::ProjectInfo;
use crate::domain::ports::RegistryRepository;
use crate::domain::services::{detect_changes, domains_equal, ProjectChanges, SubnetAllocator};
use crate::error::BootappResult;

/// Outcome of one reconcile call.
#[derive(Debug, Clone)]
pub struct Reconciliation {
    pub project: ProjectInfo,
    pub changes: ProjectChanges,
    /// The record did not exist before this call
    pub created: bool,
}

pub struct ReconcileUseCase {
    repository: Arc<dyn RegistryRepository>,
    allocator: SubnetAllocator,
}

impl ReconcileUseCase {
    pub fn new(repository: Arc<dyn RegistryRepository>, allocator: SubnetAllocator) -> Self {
        Self {
            repository,
            allocator,
        }
    }

    /// Registry errors and pool exhaustion are returned before anything else
    /// is touched; an exhausted pool leaves the registry file unwritten.
    pub fn reconcile(
        &self,
        name: &str,
        path: &Path,
        domains: &[String],
        ssl_domains: &[String],
    ) -> BootappResult<Reconciliation> {
        let mut registry = self.repository.load()?;

        let Some(stored) = registry.get_mut(name) else {
            let subnet = self.allocator.allocate(&registry.used_slots())?;
            let project = ProjectInfo::new(
                path.to_path_buf(),
                subnet,
                domains.to_vec(),
                ssl_domains.to_vec(),
            );
            registry.insert(name, project.clone());
            self.repository.save(&registry)?;
            info!(project = name, subnet = %subnet, "registered new project");
            return Ok(Reconciliation {
                project,
                changes: ProjectChanges::default(),
                created: true,
            });
        };

        let changes = detect_changes(stored, domains, ssl_domains);

        // Domain lists are sets; a reordering alone is not worth a write.
        let mut updated = false;
        if stored.path != path {
            stored.path = path.to_path_buf();
            updated = true;
        }
        if !domains_equal(&stored.domains, domains) {
            stored.domains = domains.to_vec();
            updated = true;
        }
        if !domains_equal(&stored.ssl_domains, ssl_domains) {
            stored.ssl_domains = ssl_domains.to_vec();
            updated = true;
        }

        let project = stored.clone();
        if updated {
            self.repository.save(&registry)?;
            debug!(project = name, "project record updated");
        } else {
            debug!(project = name, "project record unchanged");
        }

        Ok(Reconciliation {
            project,
            changes,
            created: false,
        })
    }
}
