//! Continuation primitive for callback-driven I/O.
//!
//! A [`Cont<T>`] is a deferred computation parameterized by a single-shot
//! completion callback. Nothing happens until the continuation is started;
//! once started it hands its result to the supplied [`Callback`] exactly once.
//!
//! `Callback::call` takes `self` by value, so invoking a callback twice does
//! not compile. A callback that is dropped without being called leaves the
//! continuation suspended forever, the same as a callback that never fires.
//!
//! # Example
//!
//! ```rust
//! use undertow::cont::Cont;
//!
//! # tokio_test::block_on(async {
//! let greeting = Cont::new(|cb| cb.call("hello".to_string()))
//!     .map(|s| format!("{}, world", s));
//!
//! assert_eq!(greeting.start().await, "hello, world");
//! # });
//! ```

use std::future::Future;

use futures::channel::oneshot;
use futures::future::{BoxFuture, FutureExt};

/// Single-shot completion callback handed to a [`Cont`] body.
#[must_use = "a continuation only resumes when its callback is called"]
pub struct Callback<T> {
    resume: Box<dyn FnOnce(T) + Send>,
}

impl<T> std::fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callback")
            .field("resume", &"<function>")
            .finish()
    }
}

impl<T> Callback<T> {
    fn new<F>(resume: F) -> Self
    where
        F: FnOnce(T) + Send + 'static,
    {
        Callback {
            resume: Box::new(resume),
        }
    }

    /// Complete the continuation with `value`.
    pub fn call(self, value: T) {
        (self.resume)(value)
    }
}

enum Repr<T> {
    Callback(Box<dyn FnOnce(Callback<T>) + Send>),
    Future(BoxFuture<'static, T>),
}

/// A deferred computation that invokes its callback exactly once.
///
/// Continuations are single use: [`Cont::start`] consumes them.
pub struct Cont<T> {
    repr: Repr<T>,
}

impl<T> std::fmt::Debug for Cont<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let body = match self.repr {
            Repr::Callback(_) => "<callback>",
            Repr::Future(_) => "<future>",
        };
        f.debug_struct("Cont").field("body", &body).finish()
    }
}

impl<T: Send + 'static> Cont<T> {
    /// Create a continuation from a body that receives the completion callback.
    ///
    /// The body runs when the continuation is started, not before.
    pub fn new<F>(body: F) -> Self
    where
        F: FnOnce(Callback<T>) + Send + 'static,
    {
        Cont {
            repr: Repr::Callback(Box::new(body)),
        }
    }

    /// A continuation that resumes immediately with `value`.
    pub fn of(value: T) -> Self {
        Cont::new(move |cb| cb.call(value))
    }

    /// Lift a future into a continuation.
    ///
    /// The future is polled by whoever starts the continuation; nothing is
    /// spawned.
    pub fn from_future<Fut>(fut: Fut) -> Self
    where
        Fut: Future<Output = T> + Send + 'static,
    {
        Cont {
            repr: Repr::Future(fut.boxed()),
        }
    }

    /// Transform the value this continuation resumes with.
    pub fn map<U, F>(self, f: F) -> Cont<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        match self.repr {
            Repr::Callback(body) => Cont::new(move |cb: Callback<U>| {
                body(Callback::new(move |value| cb.call(f(value))))
            }),
            Repr::Future(fut) => Cont::from_future(fut.map(f)),
        }
    }

    /// Start the continuation and wait for its single completion.
    pub async fn start(self) -> T {
        match self.repr {
            Repr::Future(fut) => fut.await,
            Repr::Callback(body) => {
                let (tx, rx) = oneshot::channel();
                body(Callback::new(move |value| {
                    // Only fails if the waiting side was dropped first.
                    let _ = tx.send(value);
                }));
                match rx.await {
                    Ok(value) => value,
                    Err(oneshot::Canceled) => {
                        tracing::warn!("continuation callback dropped without being called");
                        std::future::pending().await
                    }
                }
            }
        }
    }
}
