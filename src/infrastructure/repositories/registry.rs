//! JSON Registry Repository
//!
//! Persists the global registry at `~/.bootapp/projects.json` as an indented
//! object keyed by project name.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::entities::{ProjectInfo, Registry};
use crate::domain::ports::{RegistryError, RegistryRepository};
use crate::infrastructure::fs::{atomic_write, bootapp_state_dir};

pub const REGISTRY_FILE_NAME: &str = "projects.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct JsonProjectInfo {
    path: PathBuf,
    subnet: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    domains: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    ssl_domains: Vec<String>,
    /// Single-domain field written by old versions; read, never written.
    #[serde(default, skip_serializing)]
    domain: Option<String>,
}

pub struct JsonRegistryRepository {
    path: PathBuf,
}

impl JsonRegistryRepository {
    pub fn new() -> Self {
        Self {
            path: default_registry_path(),
        }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn access_error(&self, err: impl ToString) -> RegistryError {
        RegistryError::AccessError {
            path: self.path.clone(),
            message: err.to_string(),
        }
    }
}

impl Default for JsonRegistryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryRepository for JsonRegistryRepository {
    fn load(&self) -> Result<Registry, RegistryError> {
        if !self.path.exists() {
            return Ok(Registry::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| self.access_error(e))?;
        if content.trim().is_empty() {
            return Ok(Registry::new());
        }

        let projects: BTreeMap<String, JsonProjectInfo> =
            serde_json::from_str(&content).map_err(|e| RegistryError::Corrupted {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        Ok(from_json(projects))
    }

    fn save(&self, registry: &Registry) -> Result<(), RegistryError> {
        let mut content = serde_json::to_string_pretty(&to_json(registry)).map_err(|e| {
            RegistryError::SerializationError {
                path: self.path.clone(),
                message: e.to_string(),
            }
        })?;
        content.push('\n');

        atomic_write(&self.path, content.as_bytes()).map_err(|e| self.access_error(e))?;
        debug!(path = %self.path.display(), projects = registry.len(), "registry saved");
        Ok(())
    }
}

pub fn default_registry_path() -> PathBuf {
    if let Ok(path) = std::env::var("BOOTAPP_REGISTRY_PATH") {
        return PathBuf::from(path);
    }
    bootapp_state_dir().join(REGISTRY_FILE_NAME)
}

fn from_json(projects: BTreeMap<String, JsonProjectInfo>) -> Registry {
    let projects = projects
        .into_iter()
        .map(|(name, p)| {
            let domains = match (p.domains.is_empty(), p.domain) {
                (true, Some(legacy)) if !legacy.is_empty() => vec![legacy],
                _ => p.domains,
            };
            let info = ProjectInfo {
                path: p.path,
                subnet: p.subnet,
                domains,
                ssl_domains: p.ssl_domains,
            };
            (name, info)
        })
        .collect();
    Registry::from_projects(projects)
}

fn to_json(registry: &Registry) -> BTreeMap<String, JsonProjectInfo> {
    registry
        .projects()
        .iter()
        .map(|(name, p)| {
            let json = JsonProjectInfo {
                path: p.path.clone(),
                subnet: p.subnet.clone(),
                domains: p.domains.clone(),
                ssl_domains: p.ssl_domains.clone(),
                domain: None,
            };
            (name.clone(), json)
        })
        .collect()
}
