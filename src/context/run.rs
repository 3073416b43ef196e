//! Scoped execution
//!
//! `run_with` and friends enter a value, run a body inside it, and always
//! leave again. These are the intended entry points for consumers; direct
//! `enter`/`leave` calls are for code that cannot express its scope as a
//! closure.

use crate::context::manager::ContextManager;
use crate::error::{ContextError, RunError};
use std::future::Future;

impl<V: Clone> ContextManager<V> {
    /// Run `body` with `value` as the current context.
    ///
    /// Returns the value popped on release together with the body result. The
    /// frame is left on every exit path, including a panicking body. If the
    /// release fails, its error replaces the body result.
    pub fn run_with<R, F>(&self, value: V, body: F) -> Result<(V, R), ContextError>
    where
        F: FnOnce(V) -> R,
    {
        let guard = self.enter_scope(value.clone())?;
        let result = body(value);
        let restored = guard.release()?;
        Ok((restored, result))
    }

    /// Like [`run_with`](Self::run_with) for a fallible body. A body error
    /// and a release error are both reported when both happen.
    pub fn try_run_with<T, E, F>(&self, value: V, body: F) -> Result<(V, T), RunError<E>>
    where
        F: FnOnce(V) -> Result<T, E>,
    {
        let guard = self.enter_scope(value.clone())?;
        let outcome = body(value);
        settle(guard.release(), outcome)
    }

    /// Asynchronous [`run_with`](Self::run_with).
    ///
    /// The scope is entered when this method is called, not when the returned
    /// future is first polled, so call order fixes stack order. The frame is
    /// left once the body settles, or when the returned future is dropped.
    pub fn run_with_async<'a, R, F, Fut>(
        &'a self,
        value: V,
        body: F,
    ) -> impl Future<Output = Result<(V, R), ContextError>> + 'a
    where
        V: 'a,
        F: FnOnce(V) -> Fut + 'a,
        Fut: Future<Output = R> + 'a,
        R: 'a,
    {
        let entered = self.enter_scope(value.clone());
        async move {
            let guard = entered?;
            let result = body(value).await;
            let restored = guard.release()?;
            Ok::<_, ContextError>((restored, result))
        }
    }

    /// Asynchronous [`try_run_with`](Self::try_run_with).
    pub fn try_run_with_async<'a, T, E, F, Fut>(
        &'a self,
        value: V,
        body: F,
    ) -> impl Future<Output = Result<(V, T), RunError<E>>> + 'a
    where
        V: 'a,
        F: FnOnce(V) -> Fut + 'a,
        Fut: Future<Output = Result<T, E>> + 'a,
        T: 'a,
        E: 'a,
    {
        let entered = self.enter_scope(value.clone());
        async move {
            let guard = entered?;
            let outcome = body(value).await;
            settle(guard.release(), outcome)
        }
    }
}

fn settle<V, T, E>(
    released: Result<V, ContextError>,
    outcome: Result<T, E>,
) -> Result<(V, T), RunError<E>> {
    match (released, outcome) {
        (Ok(restored), Ok(result)) => Ok((restored, result)),
        (Ok(_), Err(body)) => Err(RunError::Body(body)),
        (Err(release), Ok(_)) => Err(RunError::Context(release)),
        (Err(release), Err(body)) => Err(RunError::ReleaseAfterBody { release, body }),
    }
}
