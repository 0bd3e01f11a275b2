//! Change Detector Domain Service
//!
//! Compares a stored project record with the requested state. Domain lists
//! are compared as sets; their order carries no meaning.

use std::collections::BTreeSet;

use crate::domain::entities::ProjectInfo;

/// What changed since the last reconciliation. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectChanges {
    /// Previously stored domains, sorted and deduplicated
    pub previous_domains: Vec<String>,
    pub previous_ssl_domains: Vec<String>,
    pub domain_changed: bool,
    /// Stored SSL domains absent from the request, in stored order
    pub removed_ssl_domains: Vec<String>,
}

impl ProjectChanges {
    /// Representative previous domain: the lexicographically first one.
    pub fn previous_domain(&self) -> Option<&str> {
        self.previous_domains.first().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Set equality of two domain lists.
pub fn domains_equal(a: &[String], b: &[String]) -> bool {
    as_set(a) == as_set(b)
}

/// Entries of `old` missing from `new`, without duplicates.
pub fn removed_domains(old: &[String], new: &[String]) -> Vec<String> {
    let keep = as_set(new);
    let mut seen = BTreeSet::new();
    old.iter()
        .filter(|d| !keep.contains(d.as_str()) && seen.insert(d.as_str()))
        .cloned()
        .collect()
}

pub fn detect_changes(
    stored: &ProjectInfo,
    domains: &[String],
    ssl_domains: &[String],
) -> ProjectChanges {
    ProjectChanges {
        previous_domains: as_set(&stored.domains)
            .into_iter()
            .map(str::to_string)
            .collect(),
        previous_ssl_domains: stored.ssl_domains.clone(),
        domain_changed: !domains_equal(&stored.domains, domains),
        removed_ssl_domains: removed_domains(&stored.ssl_domains, ssl_domains),
    }
}

fn as_set(items: &[String]) -> BTreeSet<&str> {
    items.iter().map(String::as_str).collect()
}
