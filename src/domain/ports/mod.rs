//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod command_runner;
pub mod hosts_file;
pub mod registry_repository;
pub mod setup_events;
pub mod trust_store;

pub use command_runner::{command_line, CommandError, CommandOutput, CommandRunner};
pub use hosts_file::{HostsError, HostsFile};
pub use registry_repository::{RegistryError, RegistryRepository};
pub use setup_events::{DomainAction, NoopEventSink, SetupEvent, SetupEventSink};
pub use trust_store::{TrustError, TrustStore};
