use std::path::Path;

use crate::domain::ports::{TrustError, TrustStore};

/// Trust store for an OS with no known mechanism. Every call fails.
pub struct UnsupportedTrustStore {
    os: String,
}

impl UnsupportedTrustStore {
    pub fn new(os: impl Into<String>) -> Self {
        Self { os: os.into() }
    }

    fn unsupported(&self) -> TrustError {
        TrustError::Unsupported {
            os: self.os.clone(),
        }
    }
}

impl TrustStore for UnsupportedTrustStore {
    fn platform(&self) -> &str {
        &self.os
    }

    fn install(&self, _domain: &str, _certificate: &Path) -> Result<(), TrustError> {
        Err(self.unsupported())
    }

    fn uninstall(&self, _domain: &str) -> Result<(), TrustError> {
        Err(self.unsupported())
    }

    fn is_trusted(&self, _domain: &str) -> Result<bool, TrustError> {
        Err(self.unsupported())
    }
}
