//! Value Objects
//!
//! Immutable values without identity.

mod certificate_paths;
mod subnet;

pub use certificate_paths::{domain_from_certificate_file, CertificatePaths, ARTIFACT_EXTENSIONS};
pub use subnet::{Subnet, SubnetParseError, SubnetPool};
