use std::process::{Command, Stdio};

use tracing::debug;

use crate::core::command::Invocation;
use crate::core::error::ComphyError;

/// Captured streams of a finished child.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

/// Executes invocations on behalf of the dispatcher.
pub trait CommandRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput, ComphyError>;
}

/// Spawns the real program and waits for it to exit.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput, ComphyError> {
        debug!(command = %invocation, "spawning");
        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ComphyError::Launch {
                program: invocation.program_name(),
                source,
            })?;

        if !output.status.success() {
            debug!(
                command = %invocation,
                code = ?output.status.code(),
                "command failed"
            );
            return Err(ComphyError::Subprocess {
                program: invocation.program_name(),
                code: output.status.code(),
                stderr: output.stderr,
            });
        }
        debug!(bytes = output.stdout.len(), "command succeeded");
        Ok(CommandOutput {
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

/// Reports what would run without spawning anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunRunner;

impl CommandRunner for DryRunRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput, ComphyError> {
        Ok(CommandOutput {
            stdout: format!("{invocation}\n").into_bytes(),
            stderr: Vec::new(),
        })
    }
}
