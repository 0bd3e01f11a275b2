//! Console Event Sink
//!
//! One human-readable line per event on stderr.

use crate::domain::ports::{DomainAction, SetupEvent, SetupEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

const OK: &str = "✓";
const WARN: &str = "⚠";

pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stderr() -> Self {
        Self::with_writer(io::stderr())
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn line(&self, text: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{text}");
        }
    }
}

fn done_message(domain: &str, action: DomainAction) -> String {
    match action {
        DomainAction::Generate => format!("{OK} Certificate generated: {domain}"),
        DomainAction::Remove => format!("{OK} Certificate removed: {domain}"),
        DomainAction::Trust => format!("{OK} Certificate trusted: {domain}"),
        DomainAction::Untrust => format!("{OK} Certificate untrusted: {domain}"),
    }
}

impl SetupEventSink for ConsoleEventSink {
    fn on_event(&self, event: SetupEvent) {
        let text = match event {
            SetupEvent::ProjectResolved {
                name,
                subnet,
                created: true,
            } => format!("{OK} Registered {name} with subnet {subnet}"),
            SetupEvent::ProjectResolved { name, subnet, .. } => {
                format!("{OK} Using {name} ({subnet})")
            }
            SetupEvent::DomainsChanged { previous, current } => format!(
                "Domains changed: {} -> {}",
                previous.join(", "),
                current.join(", ")
            ),
            SetupEvent::DomainDone { domain, action } => done_message(&domain, action),
            SetupEvent::AlreadyTrusted { domain } => {
                format!("{OK} Certificate already trusted: {domain}")
            }
            SetupEvent::DomainFailed {
                domain,
                action,
                error,
            } => format!("{WARN} Failed to {action} certificate for {domain}: {error}"),
            SetupEvent::HostsEntryAdded { hostname, address } => {
                format!("{OK} {hostname} -> {address}")
            }
            SetupEvent::HostsEntriesRemoved { project } => {
                format!("{OK} Removed hosts entries for {project}")
            }
            SetupEvent::HostsFailed { error } => {
                format!("{WARN} Failed to update hosts file: {error}")
            }
            SetupEvent::ProjectRemoved { name } => format!("{OK} Removed {name} from registry"),
            SetupEvent::Completed { warnings: 0 } => return,
            SetupEvent::Completed { warnings } => {
                format!("{WARN} Finished with {warnings} warning(s)")
            }
        };
        self.line(text);
    }
}
