//! Constructor functions for creating effects.
//!
//! These are the entry points of the error channel: `pure` (success),
//! `fail` (explicit failure injection), `lift` (raw continuation), and the
//! `from_*` adapters that wrap already running I/O.

use std::future::Future;

use crate::cont::Cont;
use crate::effect::combinators::{
    AndThen, Fail, FromAsync, FromResult, Lift, ParZip, ParZip3, ParZipWith, Pure,
};
use crate::effect::trait_def::Effect;

/// Create an effect that succeeds with the given value.
///
/// # Example
///
/// ```rust
/// use undertow::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let effect = pure::<_, String, ()>(42);
/// assert_eq!(effect.run(&()).await, Ok(42));
/// # });
/// ```
pub fn pure<T, E, Env>(value: T) -> Pure<T, E, Env>
where
    T: Send,
    E: Send,
    Env: Clone + Send + Sync,
{
    Pure::new(value)
}

/// Create an effect that fails with the given error.
///
/// # Example
///
/// ```rust
/// use undertow::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let effect = fail::<i32, _, ()>("error".to_string());
/// assert_eq!(effect.run(&()).await, Err("error".to_string()));
/// # });
/// ```
pub fn fail<T, E, Env>(error: E) -> Fail<T, E, Env>
where
    T: Send,
    E: Send,
    Env: Clone + Send + Sync,
{
    Fail::new(error)
}

/// Lift a raw continuation into the error channel.
///
/// The continuation's value is always treated as success.
pub fn lift<T, E, Env>(cont: Cont<T>) -> Lift<T, E, Env>
where
    T: Send + 'static,
    E: Send,
    Env: Clone + Send + Sync,
{
    Lift::new(cont)
}

/// Create an effect from an async function.
///
/// The function receives a reference to the environment and returns a Future.
pub fn from_async<T, E, Env, F, Fut>(f: F) -> FromAsync<F, Env>
where
    F: FnOnce(&Env) -> Fut + Send,
    Fut: Future<Output = Result<T, E>> + Send,
    T: Send,
    E: Send,
    Env: Clone + Send + Sync,
{
    FromAsync::new(f)
}

/// Create an effect from a Result.
///
/// # Example
///
/// ```rust
/// use undertow::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let effect = from_result::<_, String, ()>(Ok(42));
/// assert_eq!(effect.run(&()).await, Ok(42));
/// # });
/// ```
pub fn from_result<T, E, Env>(result: Result<T, E>) -> FromResult<T, E, Env>
where
    T: Send,
    E: Send,
    Env: Clone + Send + Sync,
{
    FromResult::new(result)
}

/// Chain `f` after `effect`, in function-call form.
///
/// Equivalent to `effect.and_then(f)`; convenient when building pipelines
/// from named stages.
pub fn chain<Eff, F, Next>(f: F, effect: Eff) -> AndThen<Eff, F>
where
    Eff: Effect,
    Next: Effect<Error = Eff::Error, Env = Eff::Env>,
    F: FnOnce(Eff::Output) -> Next + Send,
{
    AndThen { inner: effect, f }
}

/// Run two effects concurrently, joining their values into a tuple.
///
/// See [`ParZip`] for the failure rule.
pub fn par_zip<E1, E2>(first: E1, second: E2) -> ParZip<E1, E2>
where
    E1: Effect,
    E2: Effect<Error = E1::Error, Env = E1::Env>,
{
    ParZip::new(first, second)
}

/// Run two effects concurrently and combine their values with `f`.
pub fn par_zip_with<E1, E2, F, R>(first: E1, second: E2, f: F) -> ParZipWith<E1, E2, F>
where
    E1: Effect,
    E2: Effect<Error = E1::Error, Env = E1::Env>,
    F: FnOnce(E1::Output, E2::Output) -> R + Send,
    R: Send,
{
    ParZipWith::new(first, second, f)
}

/// Run three effects concurrently, joining into a flat tuple.
pub fn par_zip3<E1, E2, E3>(e1: E1, e2: E2, e3: E3) -> ParZip3<E1, E2, E3>
where
    E1: Effect,
    E2: Effect<Error = E1::Error, Env = E1::Env>,
    E3: Effect<Error = E1::Error, Env = E1::Env>,
{
    ParZip3::new(e1, e2, e3)
}
