//! Error types for Bootapp
//!
//! Uses `thiserror` for library errors. Port-level errors (`RegistryError`,
//! `HostsError`, `TrustError`, `CommandError`) convert into `BootappError`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{CommandError, HostsError, RegistryError, TrustError};
use crate::domain::services::SubnetExhausted;

/// Result type alias for Bootapp operations
pub type BootappResult<T> = Result<T, BootappError>;

/// Main error type for Bootapp operations
#[derive(Error, Debug)]
pub enum BootappError {
    /// Registry file could not be read or written
    #[error("cannot access project registry {path}: {message}")]
    ConfigIo { path: PathBuf, message: String },

    /// Registry file exists but is not valid
    #[error("project registry {path} is malformed: {message}")]
    Parse { path: PathBuf, message: String },

    /// Every slot of the subnet pool is taken
    #[error("no available subnets (all {start}-{end} in use)")]
    SubnetExhausted { start: u8, end: u8 },

    /// Trust-store operation on an OS without a trust-store implementation
    #[error("unsupported OS: {os}")]
    UnsupportedPlatform { os: String },

    /// An invoked OS mechanism (sudo, security, update-ca-*) failed
    #[error("{tool} failed: {message}")]
    ExternalToolFailure { tool: String, message: String },

    /// Lookup of a certificate or hosts entry that does not exist
    #[error("{what} not found: {name}")]
    NotFound { what: &'static str, name: String },

    /// Key pair or certificate generation failed
    #[error("failed to generate certificate for {domain}: {message}")]
    Certificate { domain: String, message: String },

    /// Malformed configuration file
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BootappError {
    /// Structural failures halt the whole operation; everything else is
    /// reported per item and skipped.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            BootappError::ConfigIo { .. }
                | BootappError::Parse { .. }
                | BootappError::SubnetExhausted { .. }
                | BootappError::Config { .. }
        )
    }
}

impl From<RegistryError> for BootappError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::AccessError { path, message } => {
                BootappError::ConfigIo { path, message }
            }
            RegistryError::SerializationError { path, message } => {
                BootappError::ConfigIo { path, message }
            }
            RegistryError::Corrupted { path, message } => BootappError::Parse { path, message },
        }
    }
}

impl From<SubnetExhausted> for BootappError {
    fn from(err: SubnetExhausted) -> Self {
        BootappError::SubnetExhausted {
            start: err.start,
            end: err.end,
        }
    }
}

impl From<HostsError> for BootappError {
    fn from(err: HostsError) -> Self {
        match err {
            HostsError::Read { path, source } => BootappError::Io(std::io::Error::new(
                source.kind(),
                format!("{}: {}", path.display(), source),
            )),
            HostsError::Write { tool, message, .. } => {
                BootappError::ExternalToolFailure { tool, message }
            }
            HostsError::NotFound { hostname } => BootappError::NotFound {
                what: "hosts entry",
                name: hostname,
            },
        }
    }
}

impl From<TrustError> for BootappError {
    fn from(err: TrustError) -> Self {
        match err {
            TrustError::Unsupported { os } => BootappError::UnsupportedPlatform { os },
            TrustError::CertificateMissing { path } => BootappError::NotFound {
                what: "certificate",
                name: path.display().to_string(),
            },
            TrustError::NoMechanism => BootappError::ExternalToolFailure {
                tool: "trust store".to_string(),
                message: "no supported certificate trust mechanism found".to_string(),
            },
            TrustError::Command(e) => e.into(),
            TrustError::Io(e) => BootappError::Io(e),
        }
    }
}

impl From<CommandError> for BootappError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Spawn { program, source } => BootappError::ExternalToolFailure {
                tool: program,
                message: source.to_string(),
            },
            CommandError::Failed {
                program, stderr, ..
            } => BootappError::ExternalToolFailure {
                tool: program,
                message: stderr,
            },
        }
    }
}
