//! Semigroup trait for associative combination.
//!
//! A Semigroup is a type with an associative binary operation. Stream folds
//! use it to merge each incoming chunk into the running accumulator.
//!
//! For a valid Semigroup, `combine` must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use undertow::Semigroup;
//!
//! let head = b"abc".to_vec();
//! let tail = b"def".to_vec();
//! assert_eq!(head.combine(tail), b"abcdef");
//! ```

/// A type that supports an associative binary operation
///
/// # Note on Ownership
///
/// `combine` takes `self` by value so accumulators can grow in place without
/// cloning.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_vec_semigroup_keeps_order() {
        assert_eq!(b"ab".to_vec().combine(b"c".to_vec()), b"abc");
    }

    proptest! {
        #[test]
        fn prop_bytes_associative(
            a in prop::collection::vec(any::<u8>(), 0..32),
            b in prop::collection::vec(any::<u8>(), 0..32),
            c in prop::collection::vec(any::<u8>(), 0..32),
        ) {
            let left = a.clone().combine(b.clone()).combine(c.clone());
            let right = a.combine(b.combine(c));
            prop_assert_eq!(left, right);
        }
    }
}
