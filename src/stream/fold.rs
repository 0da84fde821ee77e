//! Fold a byte source into a single accumulated value.

use bytes::Bytes;
use futures::StreamExt;

use super::error::FoldError;
use super::text::Text;
use super::ByteSource;
use crate::effect::prelude::*;
use crate::Monoid;

/// Drain `source`, combining every chunk into an `M` that starts at
/// `M::empty()`.
///
/// Resolves to the accumulated value when the source ends, or to a
/// [`FoldError`] carrying the partial accumulation when it fails.
///
/// # Example
///
/// ```rust
/// use undertow::effect::prelude::*;
/// use undertow::stream::{self, fold};
///
/// # tokio_test::block_on(async {
/// let source = stream::from_chunks(["ab", "c"]);
/// let bytes = fold::<Vec<u8>, ()>(source).run(&()).await.unwrap();
/// assert_eq!(bytes, b"abc");
/// # });
/// ```
pub fn fold<M, Env>(source: ByteSource) -> impl Effect<Output = M, Error = FoldError<M>, Env = Env>
where
    M: Monoid + From<Bytes> + Send,
    Env: Clone + Send + Sync,
{
    from_async(move |_: &Env| async move {
        let mut source = source;
        let mut intermediate = M::empty();

        while let Some(chunk) = source.next().await {
            match chunk {
                Ok(bytes) => intermediate = intermediate.combine(M::from(bytes)),
                Err(error) => {
                    tracing::debug!(%error, "readable stream failed during fold");
                    return Err(FoldError {
                        intermediate,
                        source: error,
                    });
                }
            }
        }

        Ok(intermediate)
    })
}

/// Drain `source` into a `String`.
///
/// Chunks are concatenated and decoded as UTF-8 at the end (see [`Text`]).
pub fn fold_string<Env>(
    source: ByteSource,
) -> impl Effect<Output = String, Error = FoldError<String>, Env = Env>
where
    Env: Clone + Send + Sync,
{
    fold::<Text, Env>(source)
        .map(Text::into_string)
        .map_err(|e| e.map_intermediate(Text::into_string))
}
