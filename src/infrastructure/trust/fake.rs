//! Scripted command runner for trust store tests

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::domain::ports::{command_line, CommandError, CommandOutput, CommandRunner};

/// Records every call. A call whose program or any argument equals a
/// scripted key gets that key's stdout, or fails if the key is marked failing.
#[derive(Default)]
pub struct ScriptedRunner {
    responses: Vec<(String, Result<String, ()>)>,
    programs: BTreeSet<String>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, key: &str, stdout: &str) -> Self {
        self.responses.push((key.to_string(), Ok(stdout.to_string())));
        self
    }

    pub fn fail(mut self, key: &str) -> Self {
        self.responses.push((key.to_string(), Err(())));
        self
    }

    pub fn with_program(mut self, program: &str) -> Self {
        self.programs.insert(program.to_string());
        self
    }

    pub fn command_lines(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(
        &self,
        program: &str,
        args: &[&str],
        _stdin: Option<&str>,
    ) -> Result<CommandOutput, CommandError> {
        self.calls.lock().unwrap().push(command_line(program, args));

        let scripted = self.responses.iter().find(|(key, _)| {
            program == key || args.iter().any(|arg| arg == key)
        });
        match scripted {
            Some((_, Ok(stdout))) => Ok(CommandOutput {
                stdout: stdout.clone(),
                stderr: String::new(),
            }),
            Some((_, Err(()))) => Err(CommandError::Failed {
                program: program.to_string(),
                status: Some(44),
                stderr: "scripted failure".to_string(),
            }),
            None => Ok(CommandOutput::default()),
        }
    }

    fn find_program(&self, program: &str) -> Option<PathBuf> {
        self.programs
            .contains(program)
            .then(|| PathBuf::from("/usr/bin").join(program))
    }
}
