//! Process failures.

use std::io;

use super::fate::ExitError;
use super::run::ProcessResult;
use crate::stream::{FoldError, PipeError};

/// Everything that can go wrong while running a child process.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    /// The process could not be started.
    #[error("failed to spawn `{command}`")]
    Spawn {
        /// The program that was being launched.
        command: String,
        /// Underlying launch error.
        #[source]
        source: io::Error,
    },

    /// Feeding stdin failed.
    #[error("failed to write process stdin")]
    Stdin(#[source] PipeError),

    /// Draining stdout failed.
    #[error("failed to read process stdout")]
    Stdout(#[source] FoldError<String>),

    /// Draining stderr failed.
    #[error("failed to read process stderr")]
    Stderr(#[source] FoldError<String>),

    /// Waiting for termination failed.
    #[error("failed to wait for process")]
    Wait(#[source] io::Error),

    /// The process ran to completion but did not succeed. `result` holds
    /// everything it printed.
    #[error("process {} {error}", .result.pid)]
    Exit {
        /// Captured output and fate.
        result: Box<ProcessResult>,
        /// Why the fate counts as failure.
        error: ExitError,
    },
}
