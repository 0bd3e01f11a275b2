//! TrustStore port - OS-level certificate trust
//!
//! One implementation per platform, chosen once by the platform capability
//! table (`infrastructure::trust::trust_store_for`).

use std::path::{Path, PathBuf};

use super::CommandError;

pub trait TrustStore: Send + Sync {
    /// OS identifier this store serves (`macos`, `linux`, ...).
    fn platform(&self) -> &str;

    /// Trust `certificate` for server authentication. Any prior entry for
    /// `domain` is removed first.
    fn install(&self, domain: &str, certificate: &Path) -> Result<(), TrustError>;

    /// Remove trust entries for `domain`. Nothing to remove is success.
    fn uninstall(&self, domain: &str) -> Result<(), TrustError>;

    fn is_trusted(&self, domain: &str) -> Result<bool, TrustError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TrustError {
    #[error("unsupported OS: {os}")]
    Unsupported { os: String },

    #[error("certificate not found: {}", .path.display())]
    CertificateMissing { path: PathBuf },

    #[error("no supported certificate trust mechanism found")]
    NoMechanism,

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
