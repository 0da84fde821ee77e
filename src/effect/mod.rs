//! The error-channel layer.
//!
//! An [`Effect`] is a deferred computation that completes exactly once with a
//! `Result`. Effects compose sequentially with `and_then` (short-circuiting on
//! the first failure) and in parallel with `par_zip` / `par_zip3` /
//! [`par_all`].
//!
//! # Example
//!
//! ```rust
//! use undertow::effect::prelude::*;
//!
//! # tokio_test::block_on(async {
//! let effect = pure::<_, String, ()>(5)
//!     .par_zip_with(pure(10), |a, b| a + b)
//!     .and_then(|sum| if sum > 10 { pure(sum).boxed() } else { fail("small".into()).boxed() });
//!
//! assert_eq!(effect.run(&()).await, Ok(15));
//! # });
//! ```
//!
//! Boxing is opt-in, needed for recursion, collections and match arms with
//! different effect types.

pub mod boxed;
pub mod combinators;
pub mod constructors;
pub mod ext;
pub mod parallel;
pub mod prelude;
pub mod tracing;
mod trait_def;

pub use trait_def::Effect;

pub use ext::EffectExt;

pub use boxed::{BoxFuture, BoxedEffect};

pub use combinators::{
    AndThen, Fail, FromAsync, FromResult, Lift, Map, MapErr, OrElse, ParZip, ParZip3, ParZipWith,
    Pure,
};

pub use constructors::{
    chain, fail, from_async, from_result, lift, par_zip, par_zip3, par_zip_with, pure,
};

pub use parallel::{par_all, par_all_errors};

pub use self::tracing::{EffectTracingExt, Instrument};
