//! Configuration types

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::DEFAULT_MARKER;
use crate::domain::value_objects::SubnetPool;
use crate::error::BootappResult;
use crate::infrastructure::certs::DEFAULT_VALIDITY_DAYS;
use crate::infrastructure::hosts::SYSTEM_HOSTS_PATH;

use super::loader::{self, ConfigWarning};

/// Subnet pool bounds (second octet of `172.<n>.0.0/16`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub subnet_start: u8,
    pub subnet_end: u8,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            subnet_start: SubnetPool::DEFAULT.start(),
            subnet_end: SubnetPool::DEFAULT.end(),
        }
    }
}

impl NetworkConfig {
    /// `None` when `subnet_start > subnet_end`.
    pub fn pool(&self) -> Option<SubnetPool> {
        SubnetPool::new(self.subnet_start, self.subnet_end)
    }
}

/// Hosts file settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostsConfig {
    pub path: PathBuf,
    pub marker: String,
    /// Edit through `sudo tee` instead of writing directly
    pub privileged: bool,
}

impl Default for HostsConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(SYSTEM_HOSTS_PATH),
            marker: DEFAULT_MARKER.to_string(),
            privileged: true,
        }
    }
}

/// Certificate settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertsConfig {
    /// Relative paths resolve against the project path
    pub dir: PathBuf,
    pub validity_days: u32,
}

impl Default for CertsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("var/certs"),
            validity_days: DEFAULT_VALIDITY_DAYS,
        }
    }
}

impl CertsConfig {
    pub fn resolve_dir(&self, project_path: &Path) -> PathBuf {
        if self.dir.is_absolute() {
            self.dir.clone()
        } else {
            project_path.join(&self.dir)
        }
    }
}

/// Registry location
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub path: Option<PathBuf>,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub hosts: HostsConfig,
    pub certs: CertsConfig,
    pub registry: RegistryConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> BootappResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> BootappResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `~/.bootapp/config.toml` if present, then apply `BOOTAPP_*`
    /// environment overrides.
    pub fn load_or_default() -> BootappResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default()
    }

    /// Apply environment variable overrides (BOOTAPP_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
