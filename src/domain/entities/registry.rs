//! Registry entity
//!
//! Tracks every project Bootapp has set up, keyed by project name, for
//! subnet allocation and global operations like `bootapp ls`.

use std::collections::{BTreeMap, BTreeSet};

use super::ProjectInfo;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    projects: BTreeMap<String, ProjectInfo>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_projects(projects: BTreeMap<String, ProjectInfo>) -> Self {
        Self { projects }
    }

    pub fn get(&self, name: &str) -> Option<&ProjectInfo> {
        self.projects.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut ProjectInfo> {
        self.projects.get_mut(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, info: ProjectInfo) {
        self.projects.insert(name.into(), info);
    }

    pub fn remove(&mut self, name: &str) -> Option<ProjectInfo> {
        self.projects.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.projects.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn projects(&self) -> &BTreeMap<String, ProjectInfo> {
        &self.projects
    }

    /// Slots held by registered projects. Records with an unparseable subnet
    /// hold nothing.
    pub fn used_slots(&self) -> BTreeSet<u8> {
        self.projects
            .values()
            .filter_map(ProjectInfo::parsed_subnet)
            .map(|subnet| subnet.slot())
            .collect()
    }
}
