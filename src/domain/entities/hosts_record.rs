//! Hosts record entity
//!
//! One tool-owned (address, hostname, project) triple in the system hosts file.

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct HostsRecord {
    pub address: String,
    pub hostname: String,
    pub project: String,
}

impl HostsRecord {
    pub fn new(
        address: impl Into<String>,
        hostname: impl Into<String>,
        project: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            hostname: hostname.into(),
            project: project.into(),
        }
    }
}
