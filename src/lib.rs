//! # Undertow
//!
//! Effect composition for callback-driven I/O.
//!
//! Every operation is an [`Effect`]: a deferred computation that completes
//! once with `Ok(value)` or `Err(error)`. Effects chain with `and_then`,
//! stopping at the first failure, and fan out with `par_zip`/`par_zip3`,
//! waiting for every branch before joining.
//!
//! On top of that core sit three small state machines:
//!
//! - [`http`]: send a request, follow redirects, reject non-2xx statuses
//! - [`stream`]: fold a byte source into a value, or pipe it into a sink
//! - [`process`]: spawn a child, drain its output while waiting for it,
//!   classify how it ended
//!
//! ## Quick Example
//!
//! ```rust,no_run
//! use undertow::prelude::*;
//! use undertow::process::{self, SpawnOptions};
//! use undertow::stream;
//!
//! # tokio_test::block_on(async {
//! let script = lift(stream::create(r#"echo "Hello, World!""#));
//! let result = script
//!     .and_then(|stdin| process::run_with_stdin(stdin, SpawnOptions::new("bash")))
//!     .run(&())
//!     .await
//!     .unwrap();
//!
//! assert_eq!(result.stdout, "Hello, World!\n");
//! # });
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod console;
pub mod cont;
pub mod effect;
pub mod fs;
pub mod http;
pub mod monoid;
pub mod process;
pub mod semigroup;
pub mod stream;

// Re-exports
pub use cont::{Callback, Cont};
pub use effect::{Effect, EffectExt};
pub use monoid::Monoid;
pub use semigroup::Semigroup;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::cont::{Callback, Cont};
    pub use crate::effect::prelude::*;
    pub use crate::monoid::Monoid;
    pub use crate::semigroup::Semigroup;
}
