//! Effect trait definition - the error-channel computation.
//!
//! An `Effect` is a deferred computation that completes exactly once with a
//! `Result`. It is the continuation primitive layered with a short-circuiting
//! error channel: `Ok` carries the success payload, `Err` the structured
//! failure.
//!
//! # Design
//!
//! This trait follows the same pattern as `Future` and `Iterator`:
//! - Combinators return concrete types
//! - Use `.boxed()` when you need type erasure (recursion, match arms)
//!
//! # Environment
//!
//! Effects read their dependencies from `Env`. I/O adapters that need a
//! collaborator (an HTTP client, for instance) ask for it with an `AsRef`
//! bound, so one environment can serve every component:
//!
//! ```rust
//! use undertow::http::HttpClient;
//!
//! #[derive(Clone)]
//! struct AppEnv {
//!     http: HttpClient,
//! }
//!
//! impl AsRef<HttpClient> for AppEnv {
//!     fn as_ref(&self) -> &HttpClient {
//!         &self.http
//!     }
//! }
//! ```

use std::future::Future;

/// A computation that completes once with `Ok(Output)` or `Err(Error)`.
///
/// Running an effect consumes it; composing two effects produces a new
/// effect that owns the sequencing of both.
///
/// # Example
///
/// ```rust
/// use undertow::effect::prelude::*;
///
/// fn double(x: i32) -> impl Effect<Output = i32, Error = String, Env = ()> {
///     pure(x).map(|x| x * 2)
/// }
///
/// # tokio_test::block_on(async {
/// assert_eq!(double(21).run(&()).await, Ok(42));
/// # });
/// ```
pub trait Effect: Sized + Send {
    /// The success type produced by this effect.
    type Output: Send;

    /// The failure type produced by this effect.
    type Error: Send;

    /// The environment type required to run this effect.
    ///
    /// Must be `Clone` to support boxing (cloning is deferred until boxing).
    type Env: Clone + Send + Sync;

    /// Execute this effect with the given environment.
    ///
    /// The returned future resolves exactly once, to `Ok(output)` on success
    /// or `Err(error)` on failure.
    fn run(self, env: &Self::Env)
        -> impl Future<Output = Result<Self::Output, Self::Error>> + Send;
}
