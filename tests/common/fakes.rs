//! Port fakes for library-level scenarios.

use std::path::Path;
use std::sync::{Arc, Mutex};

use bootapp::domain::ports::{SetupEvent, SetupEventSink, TrustError, TrustStore};

/// Trust store backed by a set of domain names.
#[derive(Default)]
pub struct RecordingTrustStore {
    trusted: Mutex<Vec<String>>,
    calls: Mutex<Vec<String>>,
}

impl RecordingTrustStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn trusted(&self) -> Vec<String> {
        self.trusted.lock().unwrap().clone()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
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
        self.calls.lock().unwrap().push(format!("install {domain}"));
        let mut trusted = self.trusted.lock().unwrap();
        if !trusted.iter().any(|d| d == domain) {
            trusted.push(domain.to_string());
        }
        Ok(())
    }

    fn uninstall(&self, domain: &str) -> Result<(), TrustError> {
        self.calls.lock().unwrap().push(format!("uninstall {domain}"));
        self.trusted.lock().unwrap().retain(|d| d != domain);
        Ok(())
    }

    fn is_trusted(&self, domain: &str) -> Result<bool, TrustError> {
        Ok(self.trusted.lock().unwrap().iter().any(|d| d == domain))
    }
}

#[derive(Default)]
pub struct CollectingSink {
    events: Mutex<Vec<SetupEvent>>,
}

impl CollectingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<SetupEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl SetupEventSink for CollectingSink {
    fn on_event(&self, event: SetupEvent) {
        self.events.lock().unwrap().push(event);
    }
}
