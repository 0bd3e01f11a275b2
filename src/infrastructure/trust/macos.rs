//! macOS trust store
//!
//! Certificates live in the System keychain. `security` is the only
//! supported interface; writes go through `sudo`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::ports::{CommandError, CommandRunner, TrustError, TrustStore};
use crate::domain::services::trust_output::{has_active_trust_settings, sha1_hashes_labelled};

pub const SYSTEM_KEYCHAIN: &str = "/Library/Keychains/System.keychain";

pub struct MacTrustStore {
    runner: Arc<dyn CommandRunner>,
    keychain: PathBuf,
}

impl MacTrustStore {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            runner,
            keychain: PathBuf::from(SYSTEM_KEYCHAIN),
        }
    }

    pub fn with_keychain(mut self, keychain: impl Into<PathBuf>) -> Self {
        self.keychain = keychain.into();
        self
    }

    /// SHA-1 hashes of keychain certificates named exactly `domain`.
    fn find_hashes(&self, domain: &str) -> Result<Vec<String>, TrustError> {
        let keychain = self.keychain.to_string_lossy();
        match self.runner.run(
            "security",
            &["find-certificate", "-a", "-Z", "-c", domain, &*keychain],
            None,
        ) {
            Ok(output) => Ok(sha1_hashes_labelled(&output.stdout, domain)),
            // exit status 44: no matching item
            Err(CommandError::Failed { .. }) => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl TrustStore for MacTrustStore {
    fn platform(&self) -> &str {
        "macos"
    }

    fn install(&self, domain: &str, certificate: &Path) -> Result<(), TrustError> {
        if !certificate.exists() {
            return Err(TrustError::CertificateMissing {
                path: certificate.to_path_buf(),
            });
        }

        if let Err(e) = self.uninstall(domain) {
            warn!(domain, error = %e, "could not remove previous trust entry");
        }

        let keychain = self.keychain.to_string_lossy();
        let certificate = certificate.to_string_lossy();
        self.runner.run(
            "sudo",
            &[
                "security",
                "add-trusted-cert",
                "-d",
                "-r",
                "trustRoot",
                "-p",
                "ssl",
                "-k",
                &*keychain,
                &*certificate,
            ],
            None,
        )?;
        debug!(domain, "certificate added to keychain");
        Ok(())
    }

    fn uninstall(&self, domain: &str) -> Result<(), TrustError> {
        let hashes = self.find_hashes(domain)?;
        if hashes.is_empty() {
            debug!(domain, "no keychain entries to remove");
            return Ok(());
        }

        let keychain = self.keychain.to_string_lossy();
        for hash in &hashes {
            self.runner.run(
                "sudo",
                &["security", "delete-certificate", "-Z", hash, &*keychain],
                None,
            )?;
        }
        debug!(domain, removed = hashes.len(), "keychain entries removed");
        Ok(())
    }

    fn is_trusted(&self, domain: &str) -> Result<bool, TrustError> {
        match self.runner.run("security", &["dump-trust-settings", "-d"], None) {
            Ok(output) => Ok(has_active_trust_settings(&output.stdout, domain)),
            // exits non-zero when the admin domain has no trust settings at all
            Err(CommandError::Failed { .. }) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
