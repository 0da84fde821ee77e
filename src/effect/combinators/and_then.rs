//! AndThen combinator - sequences dependent effects.

use crate::effect::trait_def::Effect;

/// AndThen combinator - runs the inner effect, then feeds its success value
/// into `f` and adopts the result of the effect `f` returns.
///
/// A failure of the inner effect short-circuits: `f` is never called and no
/// side effect of the second stage happens.
///
/// The error type of the chained effect must match. Use `map_err` to convert
/// error types before chaining:
///
/// ```rust,ignore
/// fold_string(stdout)                      // Error = FoldError<String>
///     .map_err(ProcessError::Stdout)       // Error = ProcessError
///     .and_then(|out| report(out))         // Error = ProcessError
/// ```
pub struct AndThen<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F> std::fmt::Debug for AndThen<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AndThen")
            .field("inner", &"<effect>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, E2> Effect for AndThen<Inner, F>
where
    Inner: Effect,
    E2: Effect<Error = Inner::Error, Env = Inner::Env>,
    F: FnOnce(Inner::Output) -> E2 + Send,
{
    type Output = E2::Output;
    type Error = Inner::Error;
    type Env = Inner::Env;

    async fn run(self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        let value = self.inner.run(env).await?;
        (self.f)(value).run(env).await
    }
}
