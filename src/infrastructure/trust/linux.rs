//! Linux trust store
//!
//! Linux has no trust metadata to query, only system anchor directories that
//! a refresh tool compiles into the CA bundle. Two layouts are known:
//! Debian (`update-ca-certificates`) and RHEL/Fedora (`update-ca-trust`).

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::ports::{CommandRunner, TrustError, TrustStore};

/// Where anchors go and how the bundle is rebuilt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorLayout {
    pub anchor_dir: PathBuf,
    pub refresh_tool: &'static str,
    pub refresh_args: &'static [&'static str],
    /// Arguments after removing an anchor, so stale links get dropped.
    pub refresh_after_remove_args: &'static [&'static str],
}

impl AnchorLayout {
    pub fn debian() -> Self {
        Self {
            anchor_dir: PathBuf::from("/usr/local/share/ca-certificates"),
            refresh_tool: "update-ca-certificates",
            refresh_args: &[],
            refresh_after_remove_args: &["--fresh"],
        }
    }

    pub fn rhel() -> Self {
        Self {
            anchor_dir: PathBuf::from("/etc/pki/ca-trust/source/anchors"),
            refresh_tool: "update-ca-trust",
            refresh_args: &["extract"],
            refresh_after_remove_args: &["extract"],
        }
    }

    pub fn with_anchor_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.anchor_dir = dir.into();
        self
    }

    pub fn anchor_path(&self, domain: &str) -> PathBuf {
        self.anchor_dir.join(format!("{domain}.crt"))
    }
}

pub struct LinuxTrustStore {
    runner: Arc<dyn CommandRunner>,
    layout: Option<AnchorLayout>,
}

impl LinuxTrustStore {
    /// Pick the first layout whose refresh tool is installed.
    pub fn detect(runner: Arc<dyn CommandRunner>) -> Self {
        let layout = [AnchorLayout::debian(), AnchorLayout::rhel()]
            .into_iter()
            .find(|layout| runner.find_program(layout.refresh_tool).is_some());
        match &layout {
            Some(layout) => debug!(tool = layout.refresh_tool, "linux trust layout detected"),
            None => debug!("no linux trust refresh tool found"),
        }
        Self { runner, layout }
    }

    pub fn with_layout(runner: Arc<dyn CommandRunner>, layout: AnchorLayout) -> Self {
        Self {
            runner,
            layout: Some(layout),
        }
    }

    fn layout(&self) -> Result<&AnchorLayout, TrustError> {
        self.layout.as_ref().ok_or(TrustError::NoMechanism)
    }

    fn refresh(&self, layout: &AnchorLayout, args: &[&str]) -> Result<(), TrustError> {
        let mut sudo_args = vec![layout.refresh_tool];
        sudo_args.extend_from_slice(args);
        self.runner.run("sudo", &sudo_args, None)?;
        Ok(())
    }
}

impl TrustStore for LinuxTrustStore {
    fn platform(&self) -> &str {
        "linux"
    }

    fn install(&self, domain: &str, certificate: &Path) -> Result<(), TrustError> {
        let layout = self.layout()?;
        if !certificate.exists() {
            return Err(TrustError::CertificateMissing {
                path: certificate.to_path_buf(),
            });
        }

        if let Err(e) = self.uninstall(domain) {
            warn!(domain, error = %e, "could not remove previous anchor");
        }

        let source = certificate.to_string_lossy();
        let anchor = layout.anchor_path(domain);
        let anchor = anchor.to_string_lossy();
        self.runner.run("sudo", &["cp", &*source, &*anchor], None)?;
        self.refresh(layout, layout.refresh_args)?;
        debug!(domain, anchor = %anchor, "anchor installed");
        Ok(())
    }

    fn uninstall(&self, domain: &str) -> Result<(), TrustError> {
        let layout = self.layout()?;
        let anchor = layout.anchor_path(domain);
        if !anchor.exists() {
            debug!(domain, "no anchor to remove");
            return Ok(());
        }

        let anchor = anchor.to_string_lossy();
        self.runner.run("sudo", &["rm", "-f", &*anchor], None)?;
        self.refresh(layout, layout.refresh_after_remove_args)?;
        Ok(())
    }

    /// Presence of the anchor file; there is no trust metadata to inspect.
    fn is_trusted(&self, domain: &str) -> Result<bool, TrustError> {
        let layout = self.layout()?;
        Ok(layout.anchor_path(domain).exists())
    }
}
