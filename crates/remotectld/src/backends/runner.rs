//! Blocking execution of host tools.

use std::process::Command;

use tracing::trace;

use super::BACKEND_TARGET;
use super::errors::BackendError;

/// Runs an external program to completion and returns its standard output.
pub trait CommandRunner: Send + Sync {
    /// Executes `program` with `args`.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Spawn`] when the program cannot be started and
    /// [`BackendError::Exit`] when it exits unsuccessfully.
    fn run(&self, program: &str, args: &[&str]) -> Result<String, BackendError>;
}

/// Runner backed by [`std::process::Command`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String, BackendError> {
        trace!(target: BACKEND_TARGET, program, ?args, "running host tool");
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| BackendError::spawn(program, source))?;

        if !output.status.success() {
            return Err(BackendError::Exit {
                program: program.to_owned(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
