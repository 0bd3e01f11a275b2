pub mod cert;
pub mod down;
pub mod hosts;
pub mod ls;
pub mod up;

use std::path::{Path, PathBuf};

use anyhow::Result;
use bootapp::config::Config;

/// Load `~/.bootapp/config.toml` plus env overrides, printing unknown-key
/// warnings to stderr.
pub(crate) fn load_config() -> Result<Config> {
    let (config, warnings) = Config::load_or_default()?;
    for warning in &warnings {
        let location = match warning.line {
            Some(line) => format!("{}:{}", warning.file.display(), line),
            None => warning.file.display().to_string(),
        };
        match &warning.suggestion {
            Some(suggestion) => eprintln!(
                "⚠ Unknown config key '{}' at {} (did you mean '{}'?)",
                warning.key, location, suggestion
            ),
            None => eprintln!("⚠ Unknown config key '{}' at {}", warning.key, location),
        }
    }
    Ok(config)
}

/// Absolute form of `path`, relative to the current directory.
pub(crate) fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

/// `--dir` if given, else the configured certificate directory resolved
/// against the current directory.
pub(crate) fn cert_dir(config: &Config, dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(dir) => absolute(&dir),
        None => Ok(config.certs.resolve_dir(&std::env::current_dir()?)),
    }
}
