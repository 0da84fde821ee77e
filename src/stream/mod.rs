//! Byte streams as effects.
//!
//! A [`ByteSource`] is an event-driven producer of chunks: it yields
//! `Ok(chunk)` per data event, ends with `None`, or fails once with an
//! `Err`. A byte sink is any [`AsyncWrite`]; finishing it means shutting it
//! down.
//!
//! Two operations turn these into effects:
//! - [`fold`] drains a source into a [`Monoid`](crate::Monoid) accumulator
//! - [`pipe`] copies a source into a sink and waits for the sink to finish
//!
//! [`create`] and [`empty`] build in-memory sources as continuations;
//! [`from_reader`] lifts any `AsyncRead` (a child's stdout, a file).

mod error;
mod fold;
mod pipe;
mod text;

use std::io;
use std::pin::Pin;

use bytes::{Bytes, BytesMut};
use futures::Stream;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::cont::Cont;

pub use error::{FoldError, PipeError};
pub use fold::{fold, fold_string};
pub use pipe::pipe;
pub use text::Text;

/// A boxed, sendable source of byte chunks.
pub type ByteSource = Pin<Box<dyn Stream<Item = io::Result<Bytes>> + Send>>;

/// Read size used when lifting an `AsyncRead` into a [`ByteSource`].
const CHUNK_SIZE: usize = 8 * 1024;

/// A source that emits `value` as one chunk and then ends.
///
/// ```rust
/// use undertow::effect::prelude::*;
/// use undertow::stream;
///
/// # tokio_test::block_on(async {
/// let source = stream::create("hi").start().await;
/// let text = stream::fold_string::<()>(source).run(&()).await.unwrap();
/// assert_eq!(text, "hi");
/// # });
/// ```
pub fn create<B>(value: B) -> Cont<ByteSource>
where
    B: Into<Bytes>,
{
    let chunk: Bytes = value.into();
    Cont::new(move |cb| {
        let source: ByteSource = Box::pin(futures::stream::once(async move { Ok(chunk) }));
        cb.call(source)
    })
}

/// A source that ends immediately without emitting a chunk.
pub fn empty() -> Cont<ByteSource> {
    Cont::new(|cb| {
        let source: ByteSource = Box::pin(futures::stream::empty());
        cb.call(source)
    })
}

/// A source that emits each item of `chunks` in order and then ends.
pub fn from_chunks<I, B>(chunks: I) -> ByteSource
where
    I: IntoIterator<Item = B>,
    B: Into<Bytes>,
{
    let chunks: Vec<io::Result<Bytes>> = chunks.into_iter().map(|b| Ok(b.into())).collect();
    Box::pin(futures::stream::iter(chunks))
}

/// Lift an `AsyncRead` into a [`ByteSource`].
///
/// The source ends at EOF. A read error is emitted once and ends the source.
pub fn from_reader<R>(reader: R) -> ByteSource
where
    R: AsyncRead + Unpin + Send + 'static,
{
    Box::pin(futures::stream::unfold(Some(reader), |state| async move {
        let Some(mut reader) = state else {
            return None;
        };
        let mut buf = BytesMut::with_capacity(CHUNK_SIZE);
        match reader.read_buf(&mut buf).await {
            Ok(0) => None,
            Ok(_) => Some((Ok(buf.freeze()), Some(reader))),
            Err(e) => Some((Err(e), None)),
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::prelude::*;

    #[tokio::test]
    async fn test_from_reader_reads_until_eof() {
        let reader = std::io::Cursor::new(b"line one\nline two\n".to_vec());
        let text = fold_string::<()>(from_reader(reader))
            .run_standalone()
            .await
            .unwrap();
        assert_eq!(text, "line one\nline two\n");
    }

    #[tokio::test]
    async fn test_from_reader_splits_large_input_into_chunks() {
        use futures::StreamExt;

        let data = vec![7u8; CHUNK_SIZE * 3 + 1];
        let chunks: Vec<_> = from_reader(std::io::Cursor::new(data)).collect().await;
        assert!(chunks.len() >= 4);
        assert!(chunks.iter().all(|c| c.is_ok()));
    }

    #[tokio::test]
    async fn test_create_accepts_owned_strings() {
        let source = create(String::from("owned")).start().await;
        let text = fold_string::<()>(source).run_standalone().await.unwrap();
        assert_eq!(text, "owned");
    }
}
