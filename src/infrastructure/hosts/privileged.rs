//! Privileged hosts file
//!
//! Reads directly (hosts files are world-readable) and writes through
//! `sudo tee`, feeding the new content on stdin. `tee` behaves the same on
//! macOS and Linux, unlike `sed -i`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::domain::ports::{CommandRunner, HostsError, HostsFile};

pub struct PrivilegedHostsFile {
    path: PathBuf,
    runner: Arc<dyn CommandRunner>,
}

impl PrivilegedHostsFile {
    pub fn new(path: impl Into<PathBuf>, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            path: path.into(),
            runner,
        }
    }

    fn tee(&self, append: bool, content: &str) -> Result<(), HostsError> {
        let path = self.path.to_string_lossy();
        let mut args = vec!["tee"];
        if append {
            args.push("-a");
        }
        args.push(&path);

        debug!(path = %path, append, bytes = content.len(), "writing hosts file via sudo");
        self.runner
            .run("sudo", &args, Some(content))
            .map(|_| ())
            .map_err(|e| HostsError::Write {
                path: self.path.clone(),
                tool: "sudo tee".to_string(),
                message: e.to_string(),
            })
    }
}

impl HostsFile for PrivilegedHostsFile {
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
        self.tee(true, block)
    }

    fn replace(&self, content: &str) -> Result<(), HostsError> {
        self.tee(false, content)
    }
}
