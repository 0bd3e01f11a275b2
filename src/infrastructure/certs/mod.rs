//! Certificate generation and artifact files

mod files;
mod generator;

pub use files::{list_domains, remove_artifacts, write_artifacts};
pub use generator::{
    fingerprint_sha256, generate_self_signed, CertificateMaterial, SubjectInfo,
    DEFAULT_VALIDITY_DAYS,
};
