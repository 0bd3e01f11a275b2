//! JSON Event Sink
//!
//! Outputs setup events as NDJSON for scripts and CI.

use crate::domain::ports::{SetupEvent, SetupEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    command: &'static str,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl SetupEventSink for JsonEventSink {
    fn on_event(&self, event: SetupEvent) {
        let command = self.command;
        let json = match event {
            SetupEvent::ProjectResolved {
                name,
                subnet,
                created,
            } => serde_json::json!({
                "event": "project",
                "command": command,
                "project": name,
                "subnet": subnet,
                "created": created,
            }),

            SetupEvent::DomainsChanged { previous, current } => serde_json::json!({
                "event": "domains_changed",
                "command": command,
                "previous": previous,
                "current": current,
            }),

            SetupEvent::DomainDone { domain, action } => serde_json::json!({
                "event": "domain_done",
                "command": command,
                "domain": domain,
                "action": action.to_string(),
            }),

            SetupEvent::AlreadyTrusted { domain } => serde_json::json!({
                "event": "already_trusted",
                "command": command,
                "domain": domain,
            }),

            SetupEvent::DomainFailed {
                domain,
                action,
                error,
            } => serde_json::json!({
                "event": "domain_error",
                "command": command,
                "domain": domain,
                "action": action.to_string(),
                "error": error,
            }),

            SetupEvent::HostsEntryAdded { hostname, address } => serde_json::json!({
                "event": "hosts_added",
                "command": command,
                "hostname": hostname,
                "address": address,
            }),

            SetupEvent::HostsEntriesRemoved { project } => serde_json::json!({
                "event": "hosts_removed",
                "command": command,
                "project": project,
            }),

            SetupEvent::HostsFailed { error } => serde_json::json!({
                "event": "hosts_error",
                "command": command,
                "error": error,
            }),

            SetupEvent::ProjectRemoved { name } => serde_json::json!({
                "event": "project_removed",
                "command": command,
                "project": name,
            }),

            SetupEvent::Completed { warnings } => {
                let status = if warnings == 0 { "success" } else { "partial" };
                serde_json::json!({
                    "event": "complete",
                    "command": command,
                    "status": status,
                    "warnings": warnings,
                })
            }
        };

        self.write_event(json);
    }
}
