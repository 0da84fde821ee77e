//! Tracing support for effects.
//!
//! Provides the `Instrument` combinator and the `instrument` method for
//! wrapping an effect in a tracing span. The HTTP and process adapters use it
//! to put each request and each child process in its own span.

use crate::effect::trait_def::Effect;

/// An effect wrapped in a tracing span.
///
/// Created by [`EffectTracingExt::instrument`].
#[derive(Debug)]
pub struct Instrument<E> {
    pub(crate) inner: E,
    pub(crate) span: tracing::Span,
}

impl<E> Effect for Instrument<E>
where
    E: Effect,
{
    type Output = E::Output;
    type Error = E::Error;
    type Env = E::Env;

    async fn run(self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        use tracing::Instrument as _;
        self.inner.run(env).instrument(self.span).await
    }
}

/// Extension trait for adding tracing instrumentation to effects.
pub trait EffectTracingExt: Effect {
    /// Wrap this effect in a tracing span.
    ///
    /// The span is entered whenever the effect is polled and exited when it
    /// yields, following the `tracing::Instrument` pattern for async code.
    ///
    /// ```rust
    /// use undertow::effect::prelude::*;
    /// use tracing::debug_span;
    ///
    /// # tokio_test::block_on(async {
    /// let effect = pure::<_, String, ()>(42).instrument(debug_span!("answer"));
    /// assert_eq!(effect.run(&()).await, Ok(42));
    /// # });
    /// ```
    fn instrument(self, span: tracing::Span) -> Instrument<Self> {
        Instrument { inner: self, span }
    }
}

impl<E: Effect> EffectTracingExt for E {}
