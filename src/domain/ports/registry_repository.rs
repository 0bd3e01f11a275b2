//! RegistryRepository port
//!
//! Persists the global project registry at `~/.bootapp/projects.json`.
//! No locking: the registry assumes one operator at a time.

use crate::domain::entities::Registry;
use std::path::PathBuf;

pub trait RegistryRepository: Send + Sync {
    /// Load the full registry. A missing file is an empty registry.
    fn load(&self) -> Result<Registry, RegistryError>;

    /// Write the full registry, creating parent directories as needed.
    fn save(&self, registry: &Registry) -> Result<(), RegistryError>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Failed to access registry {path}: {message}")]
    AccessError { path: PathBuf, message: String },

    #[error("Failed to serialize registry {path}: {message}")]
    SerializationError { path: PathBuf, message: String },

    #[error(
        "registry file corrupted: {path}\n  → Fix: Repair or delete the file (projects will get new subnets)\n  → Details: {message}"
    )]
    Corrupted { path: PathBuf, message: String },
}
