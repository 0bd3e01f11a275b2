//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Home directory resolution, atomic writes
//! - `repositories/` - Registry persistence
//! - `hosts/` - Hosts file adapters (direct, sudo)
//! - `certs/` - Certificate generation and artifact files
//! - `trust/` - Per-platform trust stores
//! - `events/` - Console and JSON event sinks

pub mod certs;
pub mod events;
pub mod fs;
pub mod hosts;
pub mod process;
pub mod repositories;
pub mod trust;

// Re-export for convenience
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::bootapp_home_dir;
pub use hosts::{LocalHostsFile, PrivilegedHostsFile};
pub use process::SystemCommandRunner;
pub use repositories::JsonRegistryRepository;
pub use trust::{system_trust_store, trust_store_for};
