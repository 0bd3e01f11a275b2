//! Registry Use Case
//!
//! Application-layer access to the global project registry.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::ProjectInfo;
use crate::domain::ports::RegistryRepository;
use crate::error::BootappResult;

pub struct RegistryUseCase {
    repository: Arc<dyn RegistryRepository>,
}

impl RegistryUseCase {
    pub fn new(repository: Arc<dyn RegistryRepository>) -> Self {
        Self { repository }
    }

    pub fn get(&self, name: &str) -> BootappResult<Option<ProjectInfo>> {
        Ok(self.repository.load()?.get(name).cloned())
    }

    /// Every project, keyed by name. The map is a copy; changing it does not
    /// touch the registry.
    pub fn list(&self) -> BootappResult<BTreeMap<String, ProjectInfo>> {
        Ok(self.repository.load()?.projects().clone())
    }

    /// Delete `name` and persist right away. Returns the removed record.
    pub fn remove(&self, name: &str) -> BootappResult<Option<ProjectInfo>> {
        let mut registry = self.repository.load()?;
        let removed = registry.remove(name);
        if removed.is_some() {
            self.repository.save(&registry)?;
            debug!(project = name, "project removed from registry");
        }
        Ok(removed)
    }
}
