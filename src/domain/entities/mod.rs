//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `ProjectInfo` - A registered project (path, subnet, domains)
//! - `Registry` - All registered projects, keyed by name
//! - `ContainerInfo` - A running container's address and hostnames
//! - `HostsRecord` - A tool-owned hosts file entry

mod container;
mod hosts_record;
mod project;
mod registry;

pub use container::ContainerInfo;
pub use hosts_record::HostsRecord;
pub use project::ProjectInfo;
pub use registry::Registry;
