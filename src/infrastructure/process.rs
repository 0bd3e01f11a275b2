//! System Command Runner
//!
//! Runs OS tools through `std::process::Command`, capturing their output.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;

use tracing::{debug, trace};

use crate::domain::ports::{command_line, CommandError, CommandOutput, CommandRunner};

/// Runner backed by real processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(
        &self,
        program: &str,
        args: &[&str],
        stdin: Option<&str>,
    ) -> Result<CommandOutput, CommandError> {
        debug!(command = %command_line(program, args), "running");

        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .stdin(if stdin.is_some() {
                Stdio::piped()
            } else {
                // sudo may still prompt on the terminal
                Stdio::inherit()
            });

        let spawn_error = |source| CommandError::Spawn {
            program: program.to_string(),
            source,
        };

        let mut child = cmd.spawn().map_err(spawn_error)?;
        let pipe = child.stdin.take();

        // Tools like `tee` echo their input, so stdin is fed from its own
        // thread while the output pipes are drained.
        let (written, output) = thread::scope(|scope| {
            let writer = scope.spawn(move || match (pipe, stdin) {
                (Some(mut pipe), Some(input)) => pipe.write_all(input.as_bytes()),
                _ => Ok(()),
            });
            let output = child.wait_with_output();
            let written = writer
                .join()
                .unwrap_or_else(|_| Err(io::Error::other("stdin writer panicked")));
            (written, output)
        });

        let output = output.map_err(spawn_error)?;
        match written {
            // The exit status reports why the child stopped reading
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {}
            other => other.map_err(spawn_error)?,
        }
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        trace!(program, status = ?output.status.code(), "finished");

        if !output.status.success() {
            return Err(CommandError::Failed {
                program: program.to_string(),
                status: output.status.code(),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(CommandOutput { stdout, stderr })
    }

    fn find_program(&self, program: &str) -> Option<PathBuf> {
        let path = std::env::var_os("PATH")?;
        std::env::split_paths(&path)
            .map(|dir| dir.join(program))
            .find(|candidate| candidate.is_file())
    }
}
