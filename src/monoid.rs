//! Monoid trait: a Semigroup with an identity element.
//!
//! A `Monoid` is what a stream fold needs from its accumulator: an empty
//! starting value and an associative way to append a chunk. The
//! accumulators that ship with the crate are `Vec<u8>` (raw bytes),
//! [`Sum<usize>`] (byte count) and [`Text`](crate::stream::Text).
//!
//! Laws, on top of Semigroup associativity:
//!
//! ```text
//! a.combine(M::empty()) == a           (right identity)
//! M::empty().combine(a) == a           (left identity)
//! ```
//!
//! # Example
//!
//! ```
//! use undertow::{Monoid, Semigroup};
//!
//! let bytes = b"abc".to_vec();
//! let empty: Vec<u8> = Monoid::empty();
//! assert_eq!(bytes.clone().combine(empty.clone()), bytes);
//! assert_eq!(empty.combine(bytes.clone()), bytes);
//! ```

use std::ops::Add;

use bytes::Bytes;

use crate::Semigroup;

/// A `Semigroup` with an identity element.
pub trait Monoid: Semigroup {
    /// The identity element for this monoid.
    fn empty() -> Self;
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }
}

/// Monoid under addition.
///
/// `Sum<usize>` folds a byte stream into its length:
///
/// ```
/// use bytes::Bytes;
/// use undertow::monoid::Sum;
/// use undertow::Semigroup;
///
/// let total = Sum::from(Bytes::from_static(b"abc")).combine(Sum::from(Bytes::from_static(b"de")));
/// assert_eq!(total, Sum(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<T>(pub T);

impl<T: Add<Output = T>> Semigroup for Sum<T> {
    fn combine(self, other: Self) -> Self {
        Sum(self.0 + other.0)
    }
}

impl<T: Add<Output = T> + Default> Monoid for Sum<T> {
    fn empty() -> Self {
        Sum(T::default())
    }
}

impl From<Bytes> for Sum<usize> {
    fn from(chunk: Bytes) -> Self {
        Sum(chunk.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sum_counts_bytes() {
        let total = Sum::<usize>::empty()
            .combine(Sum::from(Bytes::from_static(b"hello")))
            .combine(Sum::from(Bytes::new()))
            .combine(Sum::from(Bytes::from_static(b"!")));
        assert_eq!(total, Sum(6));
    }

    proptest! {
        #[test]
        fn prop_bytes_identity(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
            prop_assert_eq!(bytes.clone().combine(Vec::empty()), bytes.clone());
            prop_assert_eq!(Vec::empty().combine(bytes.clone()), bytes);
        }

        #[test]
        fn prop_sum_matches_total_length(chunks in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..16), 0..8)) {
            let expected: usize = chunks.iter().map(Vec::len).sum();
            let total = chunks
                .into_iter()
                .map(|chunk| Sum::from(Bytes::from(chunk)))
                .fold(Sum::empty(), Semigroup::combine);
            prop_assert_eq!(total, Sum(expected));
        }
    }
}
