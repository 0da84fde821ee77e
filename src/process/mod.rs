//! Child processes as effects.
//!
//! [`run`] spawns a process, optionally feeds its stdin, drains stdout and
//! stderr concurrently with waiting for it to end, and fails unless it
//! exited with code 0. The pieces ([`spawn`], [`gather`], [`classify`],
//! [`ensure_success`]) are exposed for callers that need a different shape.

mod error;
mod fate;
mod run;
mod spawn;

pub use error::ProcessError;
pub use fate::{classify, ExitError, ProcessFate};
pub use run::{ensure_success, gather, run, run_with_stdin, ProcessResult};
pub use spawn::{spawn, RunningProcess, SpawnConfig, SpawnOptions};
