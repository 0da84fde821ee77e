//! Stream failures.

use std::io;

/// A byte source failed while being folded.
///
/// Carries everything accumulated before the failure so callers can
/// diagnose or salvage a partial read.
#[derive(Debug, thiserror::Error)]
#[error("Readable stream failed!")]
pub struct FoldError<M> {
    /// Accumulation of every chunk received before the failure.
    pub intermediate: M,
    /// The error the source reported.
    #[source]
    pub source: io::Error,
}

impl<M> FoldError<M> {
    /// Convert the partial accumulation, keeping the cause.
    pub fn map_intermediate<N, F>(self, f: F) -> FoldError<N>
    where
        F: FnOnce(M) -> N,
    {
        FoldError {
            intermediate: f(self.intermediate),
            source: self.source,
        }
    }
}

/// Writing into a byte sink failed while piping.
#[derive(Debug, thiserror::Error)]
#[error("Writing to stream failed!")]
pub struct PipeError {
    /// The error the sink reported.
    #[source]
    pub source: io::Error,
}

impl From<io::Error> for PipeError {
    fn from(source: io::Error) -> Self {
        PipeError { source }
    }
}
