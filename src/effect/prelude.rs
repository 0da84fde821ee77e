//! Prelude module for convenient imports.
//!
//! ```rust
//! use undertow::effect::prelude::*;
//!
//! # tokio_test::block_on(async {
//! let effect = pure::<_, String, ()>(42)
//!     .map(|x| x * 2)
//!     .and_then(|x| pure(x + 1));
//!
//! assert_eq!(effect.execute(&()).await, Ok(85));
//! # });
//! ```

// Traits
pub use crate::effect::ext::EffectExt;
pub use crate::effect::trait_def::Effect;
pub use crate::effect::tracing::EffectTracingExt;

// Boxed Effect
pub use crate::effect::boxed::{BoxFuture, BoxedEffect};

// Combinator Types (for advanced use, usually `impl Effect` suffices)
pub use crate::effect::combinators::{
    AndThen, Fail, FromAsync, FromResult, Lift, Map, MapErr, OrElse, ParZip, ParZip3, ParZipWith,
    Pure,
};

// Constructors
pub use crate::effect::constructors::{
    chain, fail, from_async, from_result, lift, par_zip, par_zip3, par_zip_with, pure,
};

// Parallel collections
pub use crate::effect::parallel::{par_all, par_all_errors};
