//! Hosts Entry Manager
//!
//! Owns the marker-tagged records in the shared hosts file. Lines it did not
//! write are never touched.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::{ContainerInfo, HostsRecord};
use crate::domain::ports::{HostsError, HostsFile};
use crate::domain::services::hosts_format::{
    join_lines, lookup_address, render_block, scan_records, split_lines, strip_project,
};
use crate::domain::services::DEFAULT_MARKER;

pub struct HostsEntryManager {
    hosts: Arc<dyn HostsFile>,
    marker: String,
}

impl HostsEntryManager {
    pub fn new(hosts: Arc<dyn HostsFile>) -> Self {
        Self::with_marker(hosts, DEFAULT_MARKER)
    }

    pub fn with_marker(hosts: Arc<dyn HostsFile>, marker: impl Into<String>) -> Self {
        Self {
            hosts,
            marker: marker.into(),
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Replace `project`'s records with one per (address, hostname) pair of
    /// `containers`. Containers without an address or hostnames are skipped.
    /// Returns the records written.
    pub fn add_entries(
        &self,
        project: &str,
        containers: &BTreeMap<String, ContainerInfo>,
    ) -> Result<Vec<HostsRecord>, HostsError> {
        self.remove_project_entries(project)?;

        let entries: Vec<(String, String)> = containers
            .values()
            .flat_map(|container| {
                container
                    .hostnames()
                    .into_iter()
                    .map(|hostname| (container.address.trim().to_string(), hostname.to_string()))
            })
            .collect();

        if entries.is_empty() {
            debug!(project, "no container qualifies for a hosts entry");
            return Ok(Vec::new());
        }

        let mut block = render_block(&self.marker, project, &entries);
        let current = self.hosts.read()?;
        if !current.is_empty() && !current.ends_with('\n') {
            block.insert(0, '\n');
        }
        self.hosts.append(&block)?;
        debug!(project, count = entries.len(), "hosts entries added");

        Ok(entries
            .into_iter()
            .map(|(address, hostname)| HostsRecord::new(address, hostname, project))
            .collect())
    }

    /// Delete every record of `project` in the current and legacy layouts.
    /// Returns whether anything was removed; the file is only rewritten then.
    pub fn remove_project_entries(&self, project: &str) -> Result<bool, HostsError> {
        let content = self.hosts.read()?;
        let (lines, trailing_newline) = split_lines(&content);
        let kept = strip_project(&lines, &self.marker, project);

        if kept.len() == lines.len() {
            return Ok(false);
        }

        self.hosts.replace(&join_lines(&kept, trailing_newline))?;
        debug!(project, removed = lines.len() - kept.len(), "hosts lines removed");
        Ok(true)
    }

    /// Every tool-owned record, in file order per layout.
    pub fn list_entries(&self) -> Result<Vec<HostsRecord>, HostsError> {
        let content = self.hosts.read()?;
        let (lines, _) = split_lines(&content);
        Ok(scan_records(&lines, &self.marker))
    }

    /// Whether a tool-owned record names `hostname`.
    pub fn entry_exists(&self, hostname: &str) -> Result<bool, HostsError> {
        Ok(self
            .list_entries()?
            .iter()
            .any(|record| record.hostname == hostname))
    }

    /// Address of the first line resolving `hostname`, tool-owned or not.
    pub fn address_for_hostname(&self, hostname: &str) -> Result<String, HostsError> {
        let content = self.hosts.read()?;
        let (lines, _) = split_lines(&content);
        lookup_address(&lines, hostname).ok_or_else(|| HostsError::NotFound {
            hostname: hostname.to_string(),
        })
    }
}
