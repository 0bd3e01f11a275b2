//! Project entity
//!
//! One record per project name in the global registry.

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::domain::value_objects::Subnet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInfo {
    /// Directory holding the project's compose file
    pub path: PathBuf,
    /// CIDR string as persisted, e.g. `172.18.0.0/16`
    pub subnet: String,
    pub domains: Vec<String>,
    pub ssl_domains: Vec<String>,
}

impl ProjectInfo {
    pub fn new(
        path: PathBuf,
        subnet: Subnet,
        domains: Vec<String>,
        ssl_domains: Vec<String>,
    ) -> Self {
        Self {
            path,
            subnet: subnet.to_string(),
            domains,
            ssl_domains,
        }
    }

    /// Parsed subnet; `None` for records whose subnet string is not a
    /// `172.<n>.0.0/16` range.
    pub fn parsed_subnet(&self) -> Option<Subnet> {
        self.subnet.parse().ok()
    }

    /// Domains as an order-independent set.
    pub fn domain_set(&self) -> BTreeSet<&str> {
        self.domains.iter().map(String::as_str).collect()
    }

    pub fn ssl_domain_set(&self) -> BTreeSet<&str> {
        self.ssl_domains.iter().map(String::as_str).collect()
    }
}
