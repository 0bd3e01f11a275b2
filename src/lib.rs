//! Bootapp - per-project local networking for container apps
//!
//! Bootapp gives every registered project its own `172.<n>.0.0/16` subnet,
//! keeps tool-owned records for the project's hostnames in the hosts file,
//! and generates development certificates that it adds to the system trust
//! store.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    CertificateManager, HostsEntryManager, ReconcileUseCase, RegistryUseCase, SetupReport,
    SetupRequest, SetupUseCase, TeardownReport, TeardownRequest, TeardownUseCase,
};
pub use config::Config;
pub use domain::entities::{ContainerInfo, HostsRecord, ProjectInfo, Registry};
pub use domain::services::{ProjectChanges, SubnetAllocator};
pub use domain::value_objects::{Subnet, SubnetPool};
pub use error::{BootappError, BootappResult};
