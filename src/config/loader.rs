//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{BootappError, BootappResult};
use crate::infrastructure::fs::bootapp_state_dir;

use super::types::Config;

pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const HOSTS_FILE_VAR: &str = "BOOTAPP_HOSTS_FILE";
pub const NO_SUDO_VAR: &str = "BOOTAPP_NO_SUDO";
pub const REGISTRY_PATH_VAR: &str = "BOOTAPP_REGISTRY_PATH";
pub const CERT_DIR_VAR: &str = "BOOTAPP_CERT_DIR";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

pub fn config_path() -> PathBuf {
    bootapp_state_dir().join(CONFIG_FILE_NAME)
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> BootappResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

pub(crate) fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> BootappResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| BootappError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    validate(&config, path)?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// User config if present, else defaults; env overrides on top.
pub fn load_or_default() -> BootappResult<(Config, Vec<ConfigWarning>)> {
    let path = config_path();
    let (config, warnings) = if path.exists() {
        debug!(path = %path.display(), "loading config");
        load_with_warnings(&path)?
    } else {
        (Config::default(), Vec::new())
    };
    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (BOOTAPP_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

pub(crate) fn apply_overrides(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Config {
    let set = |key: &str| lookup(key).filter(|v| !v.is_empty());

    if let Some(path) = set(HOSTS_FILE_VAR) {
        config.hosts.path = PathBuf::from(path);
    }

    // BOOTAPP_NO_SUDO=1 (anything but "0"/"false")
    if let Some(val) = set(NO_SUDO_VAR) {
        config.hosts.privileged = val == "0" || val.eq_ignore_ascii_case("false");
    }

    if let Some(path) = set(REGISTRY_PATH_VAR) {
        config.registry.path = Some(PathBuf::from(path));
    }

    if let Some(dir) = set(CERT_DIR_VAR) {
        config.certs.dir = PathBuf::from(dir);
    }

    config
}

fn validate(config: &Config, path: &Path) -> BootappResult<()> {
    if config.network.pool().is_none() {
        return Err(BootappError::Config {
            file: path.to_path_buf(),
            message: format!(
                "network.subnet_start ({}) is greater than network.subnet_end ({})",
                config.network.subnet_start, config.network.subnet_end
            ),
        });
    }
    if config.hosts.marker.trim().is_empty() {
        return Err(BootappError::Config {
            file: path.to_path_buf(),
            message: "hosts.marker must not be empty".to_string(),
        });
    }
    Ok(())
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "network",
        "subnet_start",
        "subnet_end",
        "hosts",
        "path",
        "marker",
        "privileged",
        "certs",
        "dir",
        "validity_days",
        "registry",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
