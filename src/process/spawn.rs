//! Launching child processes.

use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;
use std::process::Stdio;

use serde::Deserialize;
use tokio::process::{Child, Command};
use tracing::debug;

use super::error::ProcessError;
use crate::effect::prelude::*;

/// Launcher settings that are handed to the OS unexamined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Working directory of the child.
    pub current_dir: Option<PathBuf>,
    /// Extra environment variables.
    pub env: BTreeMap<String, String>,
    /// Start from an empty environment instead of inheriting ours.
    pub env_clear: bool,
}

/// What to run.
///
/// ```
/// use undertow::process::SpawnOptions;
///
/// let opts = SpawnOptions::new("bash").arg("-c").arg("echo hi");
/// assert_eq!(opts.args, ["-c", "echo hi"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SpawnOptions {
    /// Program to launch, looked up on `PATH` when not a path.
    pub command: String,
    /// Arguments, not including the program name.
    #[serde(default)]
    pub args: Vec<String>,
    /// Platform launcher settings.
    #[serde(default)]
    pub options: SpawnConfig,
}

impl SpawnOptions {
    /// Run `command` with no arguments and default settings.
    pub fn new(command: impl Into<String>) -> Self {
        SpawnOptions {
            command: command.into(),
            args: Vec::new(),
            options: SpawnConfig::default(),
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Replace the launcher settings.
    pub fn options(mut self, options: SpawnConfig) -> Self {
        self.options = options;
        self
    }

    fn to_command(&self) -> Command {
        let mut command = Command::new(&self.command);
        command
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if self.options.env_clear {
            command.env_clear();
        }
        command.envs(&self.options.env);
        if let Some(dir) = &self.options.current_dir {
            command.current_dir(dir);
        }
        command
    }
}

/// A started child with all three stdio streams piped.
#[derive(Debug)]
pub struct RunningProcess {
    /// OS process id.
    pub pid: u32,
    /// The child handle.
    pub child: Child,
}

/// Start the process described by `opts`.
///
/// Nothing is launched until the effect runs.
pub fn spawn<Env>(opts: SpawnOptions) -> impl Effect<Output = RunningProcess, Error = ProcessError, Env = Env>
where
    Env: Clone + Send + Sync,
{
    from_async(move |_: &Env| async move {
        let failed = |source| ProcessError::Spawn {
            command: opts.command.clone(),
            source,
        };

        let child = opts.to_command().spawn().map_err(failed)?;
        let pid = child
            .id()
            .ok_or_else(|| failed(io::Error::other("spawned process has no pid")))?;

        debug!(pid, command = %opts.command, args = ?opts.args, "process spawned");
        Ok(RunningProcess { pid, child })
    })
}
