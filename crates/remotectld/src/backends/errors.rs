//! Errors reported by host audio and input tools.

use std::io;
use std::process::ExitStatus;

use thiserror::Error;

/// Failure of a single backend call.
///
/// The display text is sent to clients verbatim as the `err` field of the
/// failure envelope, so it names the program and keeps the tool's own stderr.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The program could not be started.
    #[error("failed to run {program}: {source}")]
    Spawn {
        /// Program that failed to start.
        program: String,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },
    /// The program ran but reported failure.
    #[error("{program} exited with {status}: {stderr}")]
    Exit {
        /// Program that failed.
        program: String,
        /// Exit status reported by the OS.
        status: ExitStatus,
        /// Trimmed standard error output.
        stderr: String,
    },
    /// The program's output did not have the expected shape.
    #[error("unexpected output from {program}: {output:?}")]
    UnexpectedOutput {
        /// Program whose output was rejected.
        program: String,
        /// Raw output that failed to parse.
        output: String,
    },
}

impl BackendError {
    /// Creates a spawn error.
    pub fn spawn(program: impl Into<String>, source: io::Error) -> Self {
        Self::Spawn {
            program: program.into(),
            source,
        }
    }

    /// Creates an unexpected-output error.
    pub fn unexpected_output(program: impl Into<String>, output: impl Into<String>) -> Self {
        Self::UnexpectedOutput {
            program: program.into(),
            output: output.into(),
        }
    }
}
