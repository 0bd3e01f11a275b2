//! In-memory port implementations shared by the use case tests.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::entities::{ProjectInfo, Registry};
use crate::domain::ports::{
    HostsError, HostsFile, RegistryError, RegistryRepository, SetupEvent, SetupEventSink,
    TrustError, TrustStore,
};
use crate::domain::value_objects::Subnet;

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn project(slot: u8) -> ProjectInfo {
    ProjectInfo::new(
        PathBuf::from(format!("/work/p{slot}")),
        Subnet::from_slot(slot),
        Vec::new(),
        Vec::new(),
    )
}

/// Registry kept in memory; counts saves.
#[derive(Default)]
pub struct InMemoryRegistryRepo {
    registry: Mutex<Registry>,
    saves: Mutex<usize>,
}

impl InMemoryRegistryRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_projects<K: Into<String>>(
        projects: impl IntoIterator<Item = (K, ProjectInfo)>,
    ) -> Self {
        let projects: BTreeMap<String, ProjectInfo> =
            projects.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Self {
            registry: Mutex::new(Registry::from_projects(projects)),
            saves: Mutex::new(0),
        }
    }

    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }

    pub fn snapshot(&self) -> Registry {
        self.registry.lock().unwrap().clone()
    }
}

impl RegistryRepository for InMemoryRegistryRepo {
    fn load(&self) -> Result<Registry, RegistryError> {
        Ok(self.registry.lock().unwrap().clone())
    }

    fn save(&self, registry: &Registry) -> Result<(), RegistryError> {
        *self.registry.lock().unwrap() = registry.clone();
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }
}

/// Hosts file held in a string. Writes can be made to fail.
pub struct MemoryHostsFile {
    content: Mutex<String>,
    writes: Mutex<usize>,
    fail_writes: bool,
}

impl MemoryHostsFile {
    pub fn new(content: &str) -> Self {
        Self {
            content: Mutex::new(content.to_string()),
            writes: Mutex::new(0),
            fail_writes: false,
        }
    }

    pub fn failing(content: &str) -> Self {
        Self {
            fail_writes: true,
            ..Self::new(content)
        }
    }

    pub fn content(&self) -> String {
        self.content.lock().unwrap().clone()
    }

    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }

    fn check_write(&self) -> Result<(), HostsError> {
        *self.writes.lock().unwrap() += 1;
        if self.fail_writes {
            return Err(HostsError::Write {
                path: PathBuf::from("/etc/hosts"),
                tool: "sudo tee".to_string(),
                message: "a password is required".to_string(),
            });
        }
        Ok(())
    }
}

impl HostsFile for MemoryHostsFile {
    fn path(&self) -> &Path {
        Path::new("/etc/hosts")
    }

    fn read(&self) -> Result<String, HostsError> {
        Ok(self.content())
    }

    fn append(&self, block: &str) -> Result<(), HostsError> {
        self.check_write()?;
        self.content.lock().unwrap().push_str(block);
        Ok(())
    }

    fn replace(&self, content: &str) -> Result<(), HostsError> {
        self.check_write()?;
        *self.content.lock().unwrap() = content.to_string();
        Ok(())
    }
}

/// Trust store remembering which domains are trusted and every call made.
#[derive(Default)]
pub struct RecordingTrustStore {
    trusted: Mutex<Vec<String>>,
    calls: Mutex<Vec<String>>,
    failing_domains: Vec<String>,
}

impl RecordingTrustStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_for(domains: &[&str]) -> Self {
        Self {
            failing_domains: strings(domains),
            ..Self::default()
        }
    }

    pub fn trust(&self, domain: &str) {
        self.trusted.lock().unwrap().push(domain.to_string());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn trusted(&self) -> Vec<String> {
        self.trusted.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<(), TrustError> {
        let failing = self
            .failing_domains
            .iter()
            .any(|d| call.ends_with(&format!(" {d}")));
        self.calls.lock().unwrap().push(call);
        if failing {
            return Err(TrustError::NoMechanism);
        }
        Ok(())
    }
}

impl TrustStore for RecordingTrustStore {
    fn platform(&self) -> &str {
        "test"
    }

    fn install(&self, domain: &str, certificate: &Path) -> Result<(), TrustError> {
        if !certificate.exists() {
            return Err(TrustError::CertificateMissing {
                path: certificate.to_path_buf(),
            });
        }
        self.record(format!("install {domain}"))?;
        let mut trusted = self.trusted.lock().unwrap();
        trusted.retain(|d| d != domain);
        trusted.push(domain.to_string());
        Ok(())
    }

    fn uninstall(&self, domain: &str) -> Result<(), TrustError> {
        self.record(format!("uninstall {domain}"))?;
        self.trusted.lock().unwrap().retain(|d| d != domain);
        Ok(())
    }

    fn is_trusted(&self, domain: &str) -> Result<bool, TrustError> {
        Ok(self.trusted.lock().unwrap().iter().any(|d| d == domain))
    }
}

#[derive(Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<SetupEvent>>,
}

impl RecordingEventSink {
    pub fn events(&self) -> Vec<SetupEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl SetupEventSink for RecordingEventSink {
    fn on_event(&self, event: SetupEvent) {
        self.events.lock().unwrap().push(event);
    }
}
