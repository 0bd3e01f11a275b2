//! Container entity
//!
//! A running container's discovered address and the hostnames it should
//! answer to. Produced per run by the caller; never persisted.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerInfo {
    pub address: String,
    pub domains: Vec<String>,
}

impl ContainerInfo {
    pub fn new(address: impl Into<String>, domains: Vec<String>) -> Self {
        Self {
            address: address.into(),
            domains,
        }
    }

    /// Trimmed, non-empty hostnames. Empty when the container has no
    /// address, since nothing can be written for it.
    pub fn hostnames(&self) -> Vec<&str> {
        if self.address.trim().is_empty() {
            return Vec::new();
        }
        self.domains
            .iter()
            .map(|d| d.trim())
            .filter(|d| !d.is_empty())
            .collect()
    }
}
