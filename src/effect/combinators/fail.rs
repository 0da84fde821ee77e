//! Fail effect - an immediately failed computation.

use std::marker::PhantomData;

use crate::effect::trait_def::Effect;

/// An error wrapped as an immediately failed effect.
///
/// Used for explicit failure injection in a chain:
///
/// ```rust
/// use undertow::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let effect = pure::<i32, String, ()>(-1)
///     .and_then(|x| if x < 0 { fail("negative".to_string()).boxed() } else { pure(x).boxed() });
/// assert_eq!(effect.run(&()).await, Err("negative".to_string()));
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct Fail<T, E, Env> {
    error: E,
    _phantom: PhantomData<fn() -> (T, Env)>,
}

impl<T, E, Env> Fail<T, E, Env> {
    /// Create a new Fail effect from an error.
    pub fn new(error: E) -> Self {
        Fail {
            error,
            _phantom: PhantomData,
        }
    }
}

impl<T, E, Env> Effect for Fail<T, E, Env>
where
    T: Send,
    E: Send,
    Env: Clone + Send + Sync,
{
    type Output = T;
    type Error = E;
    type Env = Env;

    async fn run(self, _env: &Self::Env) -> Result<T, E> {
        Err(self.error)
    }
}
