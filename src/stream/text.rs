//! UTF-8 text accumulator for folds.

use bytes::Bytes;

use crate::{Monoid, Semigroup};

/// Accumulates raw bytes and decodes them as UTF-8 once the fold is done.
///
/// Chunk boundaries may split a multi-byte character, so decoding happens at
/// the end rather than per chunk. Invalid sequences decode to U+FFFD.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text(Vec<u8>);

impl Text {
    /// Decode the accumulated bytes.
    pub fn into_string(self) -> String {
        match String::from_utf8(self.0) {
            Ok(text) => text,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        }
    }
}

impl Semigroup for Text {
    fn combine(mut self, other: Self) -> Self {
        self.0.extend_from_slice(&other.0);
        self
    }
}

impl Monoid for Text {
    fn empty() -> Self {
        Text(Vec::new())
    }
}

impl From<Bytes> for Text {
    fn from(chunk: Bytes) -> Self {
        Text(chunk.to_vec())
    }
}
