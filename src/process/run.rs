//! Running a child to completion.

use tokio::io::AsyncRead;
use tokio::process::{Child, ChildStdin};
use tracing::debug;

use super::error::ProcessError;
use super::fate::{classify, ProcessFate};
use super::spawn::{spawn, RunningProcess, SpawnOptions};
use crate::effect::prelude::*;
use crate::stream::{self, fold_string, pipe, ByteSource};

/// Everything a finished process left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    /// OS process id. The process has been reaped.
    pub pid: u32,
    /// Everything written to stdout.
    pub stdout: String,
    /// Everything written to stderr.
    pub stderr: String,
    /// How the process ended.
    pub fate: ProcessFate,
}

/// Run `opts` with no input and require a clean exit.
///
/// # Example
///
/// ```rust,no_run
/// use undertow::effect::prelude::*;
/// use undertow::process::{self, SpawnOptions};
///
/// # tokio_test::block_on(async {
/// let result = process::run::<()>(SpawnOptions::new("uname").arg("-s"))
///     .run(&())
///     .await
///     .unwrap();
/// println!("{}", result.stdout.trim());
/// # });
/// ```
pub fn run<Env>(opts: SpawnOptions) -> impl Effect<Output = ProcessResult, Error = ProcessError, Env = Env>
where
    Env: Clone + Send + Sync + 'static,
{
    lift(stream::empty()).and_then(move |input| run_with_stdin(input, opts))
}

/// Run `opts`, feeding `input` to its stdin, and require a clean exit.
///
/// `input` is written while stdout and stderr are drained, so a filter
/// that answers before it has read all of its input cannot stall on a
/// full pipe. Stdin is closed once `input` ends. A failed write fails the
/// whole run with [`ProcessError::Stdin`], even if the process also failed.
pub fn run_with_stdin<Env>(
    input: ByteSource,
    opts: SpawnOptions,
) -> impl Effect<Output = ProcessResult, Error = ProcessError, Env = Env>
where
    Env: Clone + Send + Sync + 'static,
{
    let span = tracing::debug_span!("process", command = %opts.command);

    spawn(opts)
        .and_then(move |mut process| {
            let stdin = process.child.stdin.take();
            feed_stdin(input, stdin).par_zip_with(gather(process), |(), result| result)
        })
        .and_then(|result| from_result(ensure_success(result)))
        .instrument(span)
}

fn feed_stdin<Env>(input: ByteSource, stdin: Option<ChildStdin>) -> BoxedEffect<(), ProcessError, Env>
where
    Env: Clone + Send + Sync + 'static,
{
    match stdin {
        Some(sink) => pipe(input, sink).map_err(ProcessError::Stdin).boxed(),
        None => pure(()).boxed(),
    }
}

/// Drain stdout and stderr while waiting for the process to end.
///
/// All three run concurrently, so a child that writes a lot to both
/// streams cannot block on a full pipe. The result is built only once all
/// three have finished.
pub fn gather<Env>(process: RunningProcess) -> impl Effect<Output = ProcessResult, Error = ProcessError, Env = Env>
where
    Env: Clone + Send + Sync,
{
    let RunningProcess { pid, mut child } = process;
    let stdout = drain(child.stdout.take());
    let stderr = drain(child.stderr.take());

    par_zip3(
        fold_string(stdout).map_err(ProcessError::Stdout),
        fold_string(stderr).map_err(ProcessError::Stderr),
        wait_for_fate(child),
    )
    .map(move |(stdout, stderr, fate)| ProcessResult {
        pid,
        stdout,
        stderr,
        fate,
    })
}

fn drain<R>(pipe: Option<R>) -> ByteSource
where
    R: AsyncRead + Unpin + Send + 'static,
{
    match pipe {
        Some(reader) => stream::from_reader(reader),
        None => stream::from_chunks(Vec::<bytes::Bytes>::new()),
    }
}

fn wait_for_fate<Env>(child: Child) -> impl Effect<Output = ProcessFate, Error = ProcessError, Env = Env>
where
    Env: Clone + Send + Sync,
{
    from_async(move |_: &Env| async move {
        let mut child = child;
        let status = child.wait().await.map_err(ProcessError::Wait)?;
        let fate = ProcessFate::from(status);
        debug!(?fate, "process terminated");
        Ok(fate)
    })
}

/// Fail with [`ProcessError::Exit`] unless the process exited with 0.
pub fn ensure_success(result: ProcessResult) -> Result<ProcessResult, ProcessError> {
    match classify(&result.fate) {
        None => Ok(result),
        Some(error) => {
            debug!(pid = result.pid, %error, "process failed");
            Err(ProcessError::Exit {
                result: Box::new(result),
                error,
            })
        }
    }
}
