//! Lift - a raw continuation treated as an always-successful effect.

use std::marker::PhantomData;

use crate::cont::Cont;
use crate::effect::trait_def::Effect;

/// A [`Cont`] lifted into the error channel.
///
/// The continuation's value always arrives as `Ok`; the error type is free so
/// the lifted effect can join any chain.
///
/// # Example
///
/// ```rust
/// use undertow::cont::Cont;
/// use undertow::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let effect = lift::<_, String, ()>(Cont::of(5)).map(|x| x + 1);
/// assert_eq!(effect.run(&()).await, Ok(6));
/// # });
/// ```
pub struct Lift<T, E, Env> {
    cont: Cont<T>,
    _phantom: PhantomData<fn() -> (E, Env)>,
}

impl<T, E, Env> std::fmt::Debug for Lift<T, E, Env> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lift").field("cont", &self.cont).finish()
    }
}

impl<T, E, Env> Lift<T, E, Env> {
    /// Lift `cont` into an effect.
    pub fn new(cont: Cont<T>) -> Self {
        Lift {
            cont,
            _phantom: PhantomData,
        }
    }
}

impl<T, E, Env> Effect for Lift<T, E, Env>
where
    T: Send + 'static,
    E: Send,
    Env: Clone + Send + Sync,
{
    type Output = T;
    type Error = E;
    type Env = Env;

    async fn run(self, _env: &Self::Env) -> Result<T, E> {
        Ok(self.cont.start().await)
    }
}
