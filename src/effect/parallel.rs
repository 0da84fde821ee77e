//! Parallel execution over collections of effects.
//!
//! The pairwise joins live on [`EffectExt`](crate::effect::EffectExt)
//! (`par_zip`, `par_zip_with`) and in the constructors (`par_zip3`). This
//! module holds the homogeneous n-ary forms, which need boxed effects because
//! a `Vec` needs a single element type.

use crate::effect::boxed::BoxedEffect;
use crate::effect::trait_def::Effect;

/// Execute boxed effects concurrently, joining once every one has completed.
///
/// Returns `Ok(values)` in input order if all succeed. If any fail, returns
/// the error of the first failing effect in input order.
///
/// # Example
///
/// ```rust
/// use undertow::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let effects: Vec<BoxedEffect<i32, String, ()>> = vec![
///     pure(1).boxed(),
///     pure(2).boxed(),
///     pure(3).boxed(),
/// ];
///
/// assert_eq!(par_all(effects, &()).await, Ok(vec![1, 2, 3]));
/// # });
/// ```
pub async fn par_all<T, E, Env>(effects: Vec<BoxedEffect<T, E, Env>>, env: &Env) -> Result<Vec<T>, E>
where
    T: Send + 'static,
    E: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    let futures: Vec<_> = effects.into_iter().map(|eff| eff.run(env)).collect();

    let results: Vec<Result<T, E>> = futures::future::join_all(futures).await;

    results.into_iter().collect()
}

/// Execute boxed effects concurrently, keeping every failure.
///
/// Returns `Ok(values)` if all succeed, `Err(errors)` with all failures in
/// input order otherwise.
pub async fn par_all_errors<T, E, Env>(
    effects: Vec<BoxedEffect<T, E, Env>>,
    env: &Env,
) -> Result<Vec<T>, Vec<E>>
where
    T: Send + 'static,
    E: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    let futures: Vec<_> = effects.into_iter().map(|eff| eff.run(env)).collect();

    let results: Vec<Result<T, E>> = futures::future::join_all(futures).await;

    let mut successes = Vec::new();
    let mut failures = Vec::new();

    for result in results {
        match result {
            Ok(value) => successes.push(value),
            Err(e) => failures.push(e),
        }
    }

    if failures.is_empty() {
        Ok(successes)
    } else {
        Err(failures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::constructors::{fail, from_async, pure};
    use crate::effect::ext::EffectExt;
    use std::time::{Duration, Instant};

    fn delayed_success<T: Clone + Send + 'static>(
        value: T,
        delay: Duration,
    ) -> BoxedEffect<T, String, ()> {
        from_async(move |_: &()| {
            let value = value.clone();
            async move {
                tokio::time::sleep(delay).await;
                Ok(value)
            }
        })
        .boxed()
    }

    fn delayed_failure<T: Send + 'static>(
        error: String,
        delay: Duration,
    ) -> BoxedEffect<T, String, ()> {
        from_async(move |_: &()| {
            let error = error.clone();
            async move {
                tokio::time::sleep(delay).await;
                Err(error)
            }
        })
        .boxed()
    }

    #[tokio::test]
    async fn test_par_all_all_succeed() {
        let effects: Vec<BoxedEffect<i32, String, ()>> =
            vec![pure(1).boxed(), pure(2).boxed(), pure(3).boxed()];

        assert_eq!(par_all(effects, &()).await, Ok(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn test_par_all_first_failure_in_input_order_wins() {
        let effects: Vec<BoxedEffect<i32, String, ()>> = vec![
            pure(1).boxed(),
            delayed_failure("slow".to_string(), Duration::from_millis(30)),
            delayed_failure("fast".to_string(), Duration::from_millis(1)),
        ];

        assert_eq!(par_all(effects, &()).await, Err("slow".to_string()));
    }

    #[tokio::test]
    async fn test_par_all_empty_collection() {
        let effects: Vec<BoxedEffect<i32, String, ()>> = vec![];
        assert_eq!(par_all(effects, &()).await, Ok(vec![]));
    }

    #[tokio::test]
    async fn test_par_all_runs_concurrently() {
        let delay = Duration::from_millis(50);
        let effects = vec![
            delayed_success(1, delay),
            delayed_success(2, delay),
            delayed_success(3, delay),
        ];

        let start = Instant::now();
        let result = par_all(effects, &()).await;
        let elapsed = start.elapsed();

        assert_eq!(result, Ok(vec![1, 2, 3]));
        assert!(elapsed < Duration::from_millis(140), "took {:?}", elapsed);
    }

    #[tokio::test]
    async fn test_par_all_errors_keeps_every_failure() {
        let effects: Vec<BoxedEffect<i32, String, ()>> = vec![
            pure(1).boxed(),
            fail("error1".to_string()).boxed(),
            pure(3).boxed(),
            fail("error2".to_string()).boxed(),
        ];

        assert_eq!(
            par_all_errors(effects, &()).await,
            Err(vec!["error1".to_string(), "error2".to_string()])
        );
    }
}
