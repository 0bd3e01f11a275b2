//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod registry;

pub use registry::{default_registry_path, JsonRegistryRepository, REGISTRY_FILE_NAME};
