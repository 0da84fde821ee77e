//! Pipe a byte source into a byte sink.

use futures::StreamExt;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use super::error::PipeError;
use super::ByteSource;
use crate::effect::prelude::*;

/// Write every chunk of `source` into `sink`, in arrival order, then finish
/// the sink.
///
/// Each chunk is fully accepted by the sink before the next one is pulled
/// from the source, so a slow sink slows the source down instead of
/// buffering without bound. Once the source ends the sink is shut down
/// (flushing it); the effect resolves after the shutdown completes.
///
/// A failing sink resolves to [`PipeError`].
///
/// Source-side errors are not reported: a failing source ends the transfer
/// early, the sink is finished, and the pipe still succeeds. Callers that
/// must detect truncation need to check the source themselves.
///
/// # Example
///
/// ```rust
/// use undertow::effect::prelude::*;
/// use undertow::stream::{self, pipe};
///
/// # tokio_test::block_on(async {
/// let mut sink = Vec::new();
/// let source = stream::from_chunks(["one ", "two"]);
/// pipe::<_, ()>(source, &mut sink).run(&()).await.unwrap();
/// assert_eq!(sink, b"one two");
/// # });
/// ```
pub fn pipe<W, Env>(source: ByteSource, sink: W) -> impl Effect<Output = (), Error = PipeError, Env = Env>
where
    W: AsyncWrite + Unpin + Send,
    Env: Clone + Send + Sync,
{
    from_async(move |_: &Env| async move {
        let mut source = source;
        let mut sink = sink;
        let mut written = 0usize;

        while let Some(chunk) = source.next().await {
            match chunk {
                Ok(bytes) => {
                    sink.write_all(&bytes).await?;
                    written += bytes.len();
                }
                Err(error) => {
                    tracing::warn!(%error, written, "source failed while piping, finishing sink");
                    break;
                }
            }
        }

        sink.shutdown().await?;
        tracing::trace!(written, "pipe finished");
        Ok::<(), PipeError>(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::{create, empty, from_chunks};
    use bytes::Bytes;
    use std::io;
    use std::pin::Pin;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::task::{Context, Poll};

    /// Sink that records writes and whether it was shut down.
    #[derive(Default)]
    struct RecordingSink {
        data: Vec<u8>,
        finished: Arc<AtomicBool>,
        fail_writes: bool,
    }

    impl AsyncWrite for RecordingSink {
        fn poll_write(
            mut self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            buf: &[u8],
        ) -> Poll<io::Result<usize>> {
            if self.fail_writes {
                return Poll::Ready(Err(io::Error::new(io::ErrorKind::Other, "disk full")));
            }
            self.data.extend_from_slice(buf);
            Poll::Ready(Ok(buf.len()))
        }

        fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
            Poll::Ready(Ok(()))
        }

        fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
            self.finished.store(true, Ordering::SeqCst);
            Poll::Ready(Ok(()))
        }
    }

    #[tokio::test]
    async fn test_pipe_copies_chunks_in_order_and_finishes() {
        let finished = Arc::new(AtomicBool::new(false));
        let mut sink = RecordingSink {
            finished: finished.clone(),
            ..Default::default()
        };

        let result = pipe::<_, ()>(from_chunks(["a", "b", "c"]), &mut sink)
            .run_standalone()
            .await;

        assert!(result.is_ok());
        assert!(finished.load(Ordering::SeqCst));
        assert_eq!(sink.data, b"abc");
    }

    #[tokio::test]
    async fn test_pipe_empty_source_still_finishes_sink() {
        let finished = Arc::new(AtomicBool::new(false));
        let sink = RecordingSink {
            finished: finished.clone(),
            ..Default::default()
        };

        let source = empty().start().await;
        pipe::<_, ()>(source, sink).run_standalone().await.unwrap();
        assert!(finished.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_pipe_reports_sink_error() {
        let sink = RecordingSink {
            fail_writes: true,
            ..Default::default()
        };

        let source = create("payload").start().await;
        let err = pipe::<_, ()>(source, sink).run_standalone().await.unwrap_err();
        assert_eq!(err.to_string(), "Writing to stream failed!");
        assert_eq!(err.source.to_string(), "disk full");
    }

    #[tokio::test]
    async fn test_pipe_does_not_observe_source_errors() {
        let chunks: Vec<io::Result<Bytes>> = vec![
            Ok(Bytes::from_static(b"head")),
            Err(io::Error::new(io::ErrorKind::UnexpectedEof, "cut")),
        ];
        let mut sink = Vec::new();

        let result = pipe::<_, ()>(Box::pin(futures::stream::iter(chunks)), &mut sink)
            .run_standalone()
            .await;

        assert!(result.is_ok());
        assert_eq!(sink, b"head");
    }

    #[tokio::test]
    async fn test_pipe_into_duplex_respects_small_buffer() {
        let (writer, reader) = tokio::io::duplex(4);
        let payload = "x".repeat(64 * 1024);

        let write = pipe::<_, ()>(create(payload.clone()).start().await, writer);
        let read = crate::stream::fold_string::<()>(crate::stream::from_reader(reader))
            .map_err(|e| PipeError { source: e.source });

        let ((), read_back) = write.par_zip(read).run_standalone().await.unwrap();
        assert_eq!(read_back, payload);
    }
}
