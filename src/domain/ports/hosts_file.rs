//! HostsFile port - access to the shared system hosts file
//!
//! Reads never need privileges. `append` and `replace` may go through an
//! external privileged editor, so each is a separate, non-atomic step.

use std::path::{Path, PathBuf};

pub trait HostsFile: Send + Sync {
    fn path(&self) -> &Path;

    /// Full current content.
    fn read(&self) -> Result<String, HostsError>;

    /// Append `block` (newline-terminated lines) at the end of the file.
    fn append(&self, block: &str) -> Result<(), HostsError>;

    /// Overwrite the whole file with `content`.
    fn replace(&self, content: &str) -> Result<(), HostsError>;
}

#[derive(Debug, thiserror::Error)]
pub enum HostsError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to update {} via {tool}: {message}", .path.display())]
    Write {
        path: PathBuf,
        tool: String,
        message: String,
    },

    #[error("{hostname} not found in hosts file")]
    NotFound { hostname: String },
}
