//! Parallel-join combinators - run independent effects concurrently and join
//! their results once all of them have completed.
//!
//! Branches are polled concurrently on the current task (`futures::join!`);
//! no thread or task is spawned. The join waits for every branch, even after
//! one has failed, so no branch is abandoned half-way through its I/O.
//!
//! # Failure rule
//!
//! If any branch fails the joined effect fails with exactly one of the
//! failure payloads. When several branches fail, the left-most branch (the
//! first one registered) wins. Other failures are dropped.

use crate::effect::trait_def::Effect;

/// Run two effects concurrently and combine their values with `f`.
///
/// # Example
///
/// ```rust
/// use undertow::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let effect = pure::<_, String, ()>(2).par_zip_with(pure(3), |a, b| a * b);
/// assert_eq!(effect.run(&()).await, Ok(6));
/// # });
/// ```
#[derive(Debug)]
pub struct ParZipWith<E1, E2, F> {
    pub(crate) first: E1,
    pub(crate) second: E2,
    pub(crate) f: F,
}

impl<E1, E2, F> ParZipWith<E1, E2, F> {
    /// Create a new ParZipWith combinator.
    pub fn new(first: E1, second: E2, f: F) -> Self {
        ParZipWith { first, second, f }
    }
}

impl<E1, E2, F, R> Effect for ParZipWith<E1, E2, F>
where
    E1: Effect,
    E2: Effect<Error = E1::Error, Env = E1::Env>,
    F: FnOnce(E1::Output, E2::Output) -> R + Send,
    R: Send,
{
    type Output = R;
    type Error = E1::Error;
    type Env = E1::Env;

    async fn run(self, env: &Self::Env) -> Result<R, Self::Error> {
        let (first, second) = futures::join!(self.first.run(env), self.second.run(env));
        Ok((self.f)(first?, second?))
    }
}

/// Run two effects concurrently, joining into a tuple.
#[derive(Debug)]
pub struct ParZip<E1, E2> {
    pub(crate) first: E1,
    pub(crate) second: E2,
}

impl<E1, E2> ParZip<E1, E2> {
    /// Create a new ParZip combinator from two effects.
    pub fn new(first: E1, second: E2) -> Self {
        ParZip { first, second }
    }
}

impl<E1, E2> Effect for ParZip<E1, E2>
where
    E1: Effect,
    E2: Effect<Error = E1::Error, Env = E1::Env>,
{
    type Output = (E1::Output, E2::Output);
    type Error = E1::Error;
    type Env = E1::Env;

    async fn run(self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        let (first, second) = futures::join!(self.first.run(env), self.second.run(env));
        Ok((first?, second?))
    }
}

/// Run three effects concurrently, joining into a flat tuple.
///
/// This is the shape of the process gather: stdout drain, stderr drain and
/// exit wait all progress together.
#[derive(Debug)]
pub struct ParZip3<E1, E2, E3> {
    pub(crate) e1: E1,
    pub(crate) e2: E2,
    pub(crate) e3: E3,
}

impl<E1, E2, E3> ParZip3<E1, E2, E3> {
    /// Create a new ParZip3 combinator from three effects.
    pub fn new(e1: E1, e2: E2, e3: E3) -> Self {
        ParZip3 { e1, e2, e3 }
    }
}

impl<E1, E2, E3> Effect for ParZip3<E1, E2, E3>
where
    E1: Effect,
    E2: Effect<Error = E1::Error, Env = E1::Env>,
    E3: Effect<Error = E1::Error, Env = E1::Env>,
{
    type Output = (E1::Output, E2::Output, E3::Output);
    type Error = E1::Error;
    type Env = E1::Env;

    async fn run(self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        let (r1, r2, r3) = futures::join!(self.e1.run(env), self.e2.run(env), self.e3.run(env));
        Ok((r1?, r2?, r3?))
    }
}
