//! Home directory resolution with test isolation support.
//!
//! On Windows, `dirs::home_dir()` uses the system API rather than environment
//! variables, so setting `HOME` in tests has no effect there. All
//! Bootapp-internal paths (registry, config) resolve the home directory
//! through `bootapp_home_dir()`, which checks `BOOTAPP_TEST_HOME` first.

use std::path::PathBuf;

/// Environment variable for test isolation of home directory.
pub const BOOTAPP_TEST_HOME_VAR: &str = "BOOTAPP_TEST_HOME";

/// Directory under home holding Bootapp's global state.
pub const BOOTAPP_DIR_NAME: &str = ".bootapp";

/// Get the home directory for Bootapp-internal paths.
///
/// # Example
///
/// ```
/// use bootapp::infrastructure::fs::bootapp_home_dir;
///
/// if let Some(home) = bootapp_home_dir() {
///     let registry = home.join(".bootapp/projects.json");
/// }
/// ```
pub fn bootapp_home_dir() -> Option<PathBuf> {
    std::env::var(BOOTAPP_TEST_HOME_VAR)
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

/// `~/.bootapp`, falling back to a relative `.bootapp` when no home exists.
pub fn bootapp_state_dir() -> PathBuf {
    bootapp_home_dir()
        .map(|home| home.join(BOOTAPP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(BOOTAPP_DIR_NAME))
}
