//! CommandRunner port - blocking calls out to OS tools
//!
//! Every privileged or platform-specific side effect (sudo, security,
//! update-ca-certificates, ...) goes through this trait so tests can script
//! the tools' output and record what would have run.

use std::path::PathBuf;

/// Captured output of a successful command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

pub trait CommandRunner: Send + Sync {
    /// Run `program` to completion, feeding `stdin` if given. A non-zero exit
    /// status is an error.
    fn run(
        &self,
        program: &str,
        args: &[&str],
        stdin: Option<&str>,
    ) -> Result<CommandOutput, CommandError>;

    /// Locate `program` on `PATH`.
    fn find_program(&self, program: &str) -> Option<PathBuf>;
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {}: {stderr}", describe_status(.status))]
    Failed {
        program: String,
        status: Option<i32>,
        stderr: String,
    },
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("status {code}"),
        None => "signal".to_string(),
    }
}

/// Render a command for log lines.
pub fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
