//! Platform trust stores
//!
//! [`PLATFORMS`] maps an OS identifier (as in `std::env::consts::OS`) to the
//! constructor of its trust store. The table is consulted once, when the
//! store is built; an OS missing from it gets [`UnsupportedTrustStore`].

mod linux;
mod macos;
mod unsupported;

#[cfg(test)]
pub(crate) mod fake;

use std::sync::Arc;

use crate::domain::ports::{CommandRunner, TrustStore};

pub use linux::{AnchorLayout, LinuxTrustStore};
pub use macos::{MacTrustStore, SYSTEM_KEYCHAIN};
pub use unsupported::UnsupportedTrustStore;

type TrustStoreConstructor = fn(Arc<dyn CommandRunner>) -> Arc<dyn TrustStore>;

pub static PLATFORMS: &[(&str, TrustStoreConstructor)] =
    &[("macos", macos_store), ("linux", linux_store)];

fn macos_store(runner: Arc<dyn CommandRunner>) -> Arc<dyn TrustStore> {
    Arc::new(MacTrustStore::new(runner))
}

fn linux_store(runner: Arc<dyn CommandRunner>) -> Arc<dyn TrustStore> {
    Arc::new(LinuxTrustStore::detect(runner))
}

pub fn is_supported(os: &str) -> bool {
    PLATFORMS.iter().any(|(name, _)| *name == os)
}

pub fn trust_store_for(os: &str, runner: Arc<dyn CommandRunner>) -> Arc<dyn TrustStore> {
    match PLATFORMS.iter().find(|(name, _)| *name == os) {
        Some((_, construct)) => construct(runner),
        None => Arc::new(UnsupportedTrustStore::new(os)),
    }
}

/// Trust store for the OS this binary runs on.
pub fn system_trust_store(runner: Arc<dyn CommandRunner>) -> Arc<dyn TrustStore> {
    trust_store_for(std::env::consts::OS, runner)
}
