//! Extension trait providing combinator methods for all Effects.
//!
//! The `EffectExt` trait is automatically implemented for all types
//! that implement `Effect`. It provides ergonomic combinator methods
//! like `map`, `and_then`, `or_else`, `par_zip` and `boxed`.

use crate::effect::boxed::BoxedEffect;
use crate::effect::combinators::{AndThen, Map, MapErr, OrElse, ParZip, ParZipWith};
use crate::effect::trait_def::Effect;

/// Extension trait providing combinator methods for all Effects.
///
/// This trait is automatically implemented for all types that implement `Effect`.
/// You don't need to implement this trait yourself.
///
/// # Example
///
/// ```rust
/// use undertow::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let effect = pure::<_, String, ()>(21)
///     .map(|x| x * 2)
///     .and_then(|x| pure(x + 1))
///     .map_err(|e| format!("Error: {}", e));
///
/// assert_eq!(effect.execute(&()).await, Ok(43));
/// # });
/// ```
pub trait EffectExt: Effect {
    /// Transform the success value.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        F: FnOnce(Self::Output) -> U + Send,
        U: Send,
    {
        Map { inner: self, f }
    }

    /// Transform the error value.
    ///
    /// Useful for converting error types to enable chaining with `and_then`.
    fn map_err<E2, F>(self, f: F) -> MapErr<Self, F>
    where
        F: FnOnce(Self::Error) -> E2 + Send,
        E2: Send,
    {
        MapErr { inner: self, f }
    }

    /// Chain a dependent effect.
    ///
    /// If this effect succeeds, apply the function to produce the next effect.
    /// If this effect fails, propagate the error without calling `f`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use undertow::effect::prelude::*;
    ///
    /// # tokio_test::block_on(async {
    /// let effect = fail::<i32, _, ()>("boom".to_string())
    ///     .and_then(|x| -> Pure<i32, String, ()> { unreachable!("never runs: {}", x) });
    /// assert_eq!(effect.execute(&()).await, Err("boom".to_string()));
    /// # });
    /// ```
    fn and_then<E2, F>(self, f: F) -> AndThen<Self, F>
    where
        E2: Effect<Error = Self::Error, Env = Self::Env>,
        F: FnOnce(Self::Output) -> E2 + Send,
    {
        AndThen { inner: self, f }
    }

    /// Recover from an error.
    ///
    /// If this effect fails, apply the recovery function to produce a new effect.
    /// If this effect succeeds, the value passes through unchanged.
    fn or_else<E2, F>(self, f: F) -> OrElse<Self, F>
    where
        E2: Effect<Output = Self::Output, Env = Self::Env>,
        F: FnOnce(Self::Error) -> E2 + Send,
    {
        OrElse { inner: self, f }
    }

    /// Run this effect and `other` concurrently, joining into a tuple.
    ///
    /// Both effects are started immediately and the join completes only
    /// when both have finished. On failure, this effect's error wins over
    /// `other`'s.
    fn par_zip<E2>(self, other: E2) -> ParZip<Self, E2>
    where
        E2: Effect<Error = Self::Error, Env = Self::Env>,
    {
        ParZip::new(self, other)
    }

    /// Run this effect and `other` concurrently and combine their values.
    fn par_zip_with<E2, F, R>(self, other: E2, f: F) -> ParZipWith<Self, E2, F>
    where
        E2: Effect<Error = Self::Error, Env = Self::Env>,
        F: FnOnce(Self::Output, E2::Output) -> R + Send,
        R: Send,
    {
        ParZipWith::new(self, other, f)
    }

    /// Convert to a boxed effect for type erasure.
    fn boxed(self) -> BoxedEffect<Self::Output, Self::Error, Self::Env>
    where
        Self: 'static,
        Self::Output: 'static,
        Self::Error: 'static,
        Self::Env: 'static,
    {
        BoxedEffect::new(self)
    }

    /// Run and await the effect.
    ///
    /// Convenience method combining run + await.
    async fn execute(self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        self.run(env).await
    }

    /// Run an effect that needs no environment.
    async fn run_standalone(self) -> Result<Self::Output, Self::Error>
    where
        Self: Effect<Env = ()>,
    {
        self.run(&()).await
    }
}

// Blanket implementation for all Effect types
impl<E: Effect> EffectExt for E {}
