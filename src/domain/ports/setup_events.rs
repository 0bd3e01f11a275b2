//! Setup Event Port
//!
//! Provides an observable interface for the up/down pipelines.
//! Every per-domain partial failure is reported here and processing continues.

use std::fmt;

/// Which per-domain step an event refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainAction {
    Generate,
    Remove,
    Trust,
    Untrust,
}

impl fmt::Display for DomainAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            DomainAction::Generate => "generate",
            DomainAction::Remove => "remove",
            DomainAction::Trust => "trust",
            DomainAction::Untrust => "untrust",
        };
        f.write_str(verb)
    }
}

/// Event emitted during setup and teardown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupEvent {
    /// Registry record resolved (created or existing)
    ProjectResolved {
        name: String,
        subnet: String,
        created: bool,
    },

    /// Stored domain set differs from the requested one
    DomainsChanged {
        previous: Vec<String>,
        current: Vec<String>,
    },

    /// A per-domain certificate/trust step succeeded
    DomainDone { domain: String, action: DomainAction },

    /// Certificate already trusted, install skipped
    AlreadyTrusted { domain: String },

    /// A per-domain step failed; the batch continues
    DomainFailed {
        domain: String,
        action: DomainAction,
        error: String,
    },

    /// Hosts record written
    HostsEntryAdded { hostname: String, address: String },

    /// Project's hosts records removed
    HostsEntriesRemoved { project: String },

    /// Hosts file update failed (warning, not fatal)
    HostsFailed { error: String },

    /// Registry record deleted
    ProjectRemoved { name: String },

    /// Pipeline finished
    Completed { warnings: usize },
}

impl SetupEvent {
    /// Events that count as warnings in the final summary.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            SetupEvent::DomainFailed { .. } | SetupEvent::HostsFailed { .. }
        )
    }
}

/// Trait for receiving setup events
///
/// Implementations:
/// - ConsoleEventSink: one line per event in the terminal
/// - JsonEventSink: NDJSON event stream for scripts
/// - NoopEventSink: Silent operation
pub trait SetupEventSink: Send + Sync {
    fn on_event(&self, event: SetupEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl SetupEventSink for NoopEventSink {
    fn on_event(&self, _event: SetupEvent) {}
}
