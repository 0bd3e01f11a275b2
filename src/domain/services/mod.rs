//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod change_detector;
pub mod hosts_format;
mod subnet_allocator;
pub mod trust_output;

pub use change_detector::{detect_changes, domains_equal, removed_domains, ProjectChanges};
pub use hosts_format::{RecordFormat, DEFAULT_MARKER, KNOWN_FORMATS};
pub use subnet_allocator::{SubnetAllocator, SubnetExhausted};
