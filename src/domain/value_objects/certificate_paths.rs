//! On-disk layout of a domain's certificate artifacts.

use std::path::{Path, PathBuf};

/// File extensions of the three artifacts, in creation order.
pub const ARTIFACT_EXTENSIONS: [&str; 3] = ["crt", "key", "pem"];

/// `<dir>/<domain>.crt`, `<dir>/<domain>.key` and `<dir>/<domain>.pem`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificatePaths {
    pub certificate: PathBuf,
    pub private_key: PathBuf,
    pub bundle: PathBuf,
}

impl CertificatePaths {
    pub fn new(dir: &Path, domain: &str) -> Self {
        Self {
            certificate: dir.join(format!("{domain}.crt")),
            private_key: dir.join(format!("{domain}.key")),
            bundle: dir.join(format!("{domain}.pem")),
        }
    }

    pub fn all(&self) -> [&Path; 3] {
        [&self.certificate, &self.private_key, &self.bundle]
    }
}

/// Domain name a certificate file belongs to, if `file_name` is a `.crt`.
pub fn domain_from_certificate_file(file_name: &str) -> Option<&str> {
    file_name
        .strip_suffix(".crt")
        .filter(|domain| !domain.is_empty())
}
