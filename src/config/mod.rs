//! Configuration module for Bootapp
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (BOOTAPP_*)
//! 3. User config (~/.bootapp/config.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    config_path, ConfigWarning, CERT_DIR_VAR, CONFIG_FILE_NAME, HOSTS_FILE_VAR, NO_SUDO_VAR,
    REGISTRY_PATH_VAR,
};
pub use types::{CertsConfig, Config, HostsConfig, NetworkConfig, RegistryConfig};
