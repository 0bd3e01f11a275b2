//! Local hosts file
//!
//! Edits the file directly with the current user's permissions. Used with
//! `BOOTAPP_NO_SUDO`, for hosts files the user owns, and in tests.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::domain::ports::{HostsError, HostsFile};

pub struct LocalHostsFile {
    path: PathBuf,
}

impl LocalHostsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn write_error(&self, err: std::io::Error) -> HostsError {
        HostsError::Write {
            path: self.path.clone(),
            tool: "direct write".to_string(),
            message: err.to_string(),
        }
    }
}

impl HostsFile for LocalHostsFile {
    fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<String, HostsError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(source) => Err(HostsError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn append(&self, block: &str) -> Result<(), HostsError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.write_error(e))?;
        file.write_all(block.as_bytes())
            .map_err(|e| self.write_error(e))
    }

    fn replace(&self, content: &str) -> Result<(), HostsError> {
        // In place, not via rename: /etc/hosts may be a bind mount or symlink
        fs::write(&self.path, content).map_err(|e| self.write_error(e))
    }
}
