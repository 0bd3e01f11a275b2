//! Hosts file adapters

mod local;
mod privileged;

pub use local::LocalHostsFile;
pub use privileged::PrivilegedHostsFile;

/// Default location of the system hosts file.
pub const SYSTEM_HOSTS_PATH: &str = "/etc/hosts";
