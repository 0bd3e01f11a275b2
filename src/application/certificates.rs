//! Certificate Manager
//!
//! Per-domain certificate lifecycle: generate artifacts, enumerate and
//! remove them, and hand them to the platform trust store. Every method
//! works on one domain; batch callers decide what a failure means.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::domain::ports::TrustStore;
use crate::domain::value_objects::CertificatePaths;
use crate::error::{BootappError, BootappResult};
use crate::infrastructure::certs::{
    fingerprint_sha256, generate_self_signed, list_domains, remove_artifacts, write_artifacts,
    SubjectInfo, DEFAULT_VALIDITY_DAYS,
};

/// One row of `cert list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateSummary {
    pub domain: String,
    pub fingerprint: Option<String>,
    pub trusted: Option<bool>,
}

pub struct CertificateManager {
    trust_store: Arc<dyn TrustStore>,
    subject: SubjectInfo,
    validity_days: u32,
}

impl CertificateManager {
    pub fn new(trust_store: Arc<dyn TrustStore>) -> Self {
        Self {
            trust_store,
            subject: SubjectInfo::default(),
            validity_days: DEFAULT_VALIDITY_DAYS,
        }
    }

    pub fn with_validity_days(mut self, days: u32) -> Self {
        self.validity_days = days;
        self
    }

    pub fn with_subject(mut self, subject: SubjectInfo) -> Self {
        self.subject = subject;
        self
    }

    pub fn platform(&self) -> &str {
        self.trust_store.platform()
    }

    /// Create `<dir>/<domain>.{crt,key,pem}`, overwriting existing ones.
    pub fn generate(&self, domain: &str, dir: &Path) -> BootappResult<CertificatePaths> {
        let material = generate_self_signed(domain, &self.subject, self.validity_days).map_err(
            |e| BootappError::Certificate {
                domain: domain.to_string(),
                message: e.to_string(),
            },
        )?;

        let paths = CertificatePaths::new(dir, domain);
        write_artifacts(&paths, &material).map_err(|e| BootappError::Certificate {
            domain: domain.to_string(),
            message: format!("cannot write {}: {e}", dir.display()),
        })?;

        debug!(domain, dir = %dir.display(), "certificate generated");
        Ok(paths)
    }

    pub fn exists(&self, domain: &str, dir: &Path) -> bool {
        CertificatePaths::new(dir, domain).certificate.exists()
    }

    /// Domains with a certificate in `dir`, sorted.
    pub fn list(&self, dir: &Path) -> BootappResult<Vec<String>> {
        Ok(list_domains(dir)?)
    }

    /// Certificates in `dir` with fingerprint and trust state. A trust query
    /// that fails leaves `trusted` unknown.
    pub fn summaries(&self, dir: &Path) -> BootappResult<Vec<CertificateSummary>> {
        let summaries = self
            .list(dir)?
            .into_iter()
            .map(|domain| {
                let paths = CertificatePaths::new(dir, &domain);
                let fingerprint = fs::read_to_string(&paths.certificate)
                    .ok()
                    .and_then(|pem| fingerprint_sha256(&pem));
                let trusted = self.trust_store.is_trusted(&domain).ok();
                CertificateSummary {
                    domain,
                    fingerprint,
                    trusted,
                }
            })
            .collect();
        Ok(summaries)
    }

    /// Delete the three artifacts. Missing files are not an error.
    pub fn remove(&self, domain: &str, dir: &Path) -> BootappResult<()> {
        remove_artifacts(&CertificatePaths::new(dir, domain))?;
        debug!(domain, "certificate files removed");
        Ok(())
    }

    /// Trust `<dir>/<domain>.crt`, replacing any earlier entry for `domain`.
    pub fn install_to_trust_store(&self, domain: &str, dir: &Path) -> BootappResult<()> {
        let paths = CertificatePaths::new(dir, domain);
        if !paths.certificate.exists() {
            return Err(BootappError::NotFound {
                what: "certificate",
                name: paths.certificate.display().to_string(),
            });
        }
        self.trust_store.install(domain, &paths.certificate)?;
        Ok(())
    }

    pub fn uninstall_from_trust_store(&self, domain: &str) -> BootappResult<()> {
        self.trust_store.uninstall(domain)?;
        Ok(())
    }

    pub fn is_trusted(&self, domain: &str) -> BootappResult<bool> {
        Ok(self.trust_store.is_trusted(domain)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::RecordingTrustStore;
    use crate::domain::value_objects::ARTIFACT_EXTENSIONS;
    use tempfile::tempdir;

    fn manager(store: &Arc<RecordingTrustStore>) -> CertificateManager {
        CertificateManager::new(store.clone())
    }

    #[test]
    fn generate_writes_three_artifacts() {
        let dir = tempdir().unwrap();
        let certs = manager(&Arc::new(RecordingTrustStore::new()));

        certs.generate("shop.local", dir.path()).unwrap();

        for ext in ARTIFACT_EXTENSIONS {
            assert!(dir.path().join(format!("shop.local.{ext}")).exists());
        }
        assert!(certs.exists("shop.local", dir.path()));
        assert_eq!(certs.list(dir.path()).unwrap(), vec!["shop.local"]);
    }

    #[test]
    fn generate_into_unwritable_location_is_certificate_error() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "").unwrap();
        let certs = manager(&Arc::new(RecordingTrustStore::new()));

        let err = certs.generate("shop.local", &blocker.join("certs")).unwrap_err();
        assert!(matches!(err, BootappError::Certificate { ref domain, .. } if domain == "shop.local"));
    }

    #[test]
    fn remove_then_exists_is_false() {
        let dir = tempdir().unwrap();
        let certs = manager(&Arc::new(RecordingTrustStore::new()));

        certs.generate("shop.local", dir.path()).unwrap();
        certs.remove("shop.local", dir.path()).unwrap();

        assert!(!certs.exists("shop.local", dir.path()));
        assert!(certs.list(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn install_requires_generated_certificate() {
        let dir = tempdir().unwrap();
        let store = Arc::new(RecordingTrustStore::new());
        let certs = manager(&store);

        let err = certs
            .install_to_trust_store("shop.local", dir.path())
            .unwrap_err();
        assert!(matches!(err, BootappError::NotFound { what: "certificate", .. }));
        assert!(store.calls().is_empty());
    }

    #[test]
    fn install_and_uninstall_reach_trust_store() {
        let dir = tempdir().unwrap();
        let store = Arc::new(RecordingTrustStore::new());
        let certs = manager(&store);

        certs.generate("shop.local", dir.path()).unwrap();
        certs.install_to_trust_store("shop.local", dir.path()).unwrap();
        assert!(certs.is_trusted("shop.local").unwrap());

        certs.uninstall_from_trust_store("shop.local").unwrap();
        assert!(!certs.is_trusted("shop.local").unwrap());
        assert_eq!(store.calls(), vec!["install shop.local", "uninstall shop.local"]);
    }

    #[test]
    fn summaries_report_fingerprint_and_trust() {
        let dir = tempdir().unwrap();
        let store = Arc::new(RecordingTrustStore::new());
        let certs = manager(&store);

        certs.generate("a.local", dir.path()).unwrap();
        certs.generate("b.local", dir.path()).unwrap();
        store.trust("b.local");

        let summaries = certs.summaries(dir.path()).unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].domain, "a.local");
        assert_eq!(summaries[0].trusted, Some(false));
        assert_eq!(summaries[1].trusted, Some(true));
        assert!(summaries.iter().all(|s| s.fingerprint.is_some()));
    }
}
