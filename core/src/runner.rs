//! The resumption cycle.
//!
//! [`run`] instantiates a fresh coroutine from a factory and drives it to a
//! single terminal outcome. Each cycle resumes the coroutine, settles the
//! awaitable it yields, then resumes again on a fresh scheduler turn with
//! the settled value — or injects the failure at the suspension point and
//! lets the coroutine decide whether to recover.
//!
//! # Ordering
//!
//! Resumptions are strictly sequential: the loop owns the coroutine
//! exclusively, and every resumption after the first is preceded by a
//! [`yield_now`] so it never runs re-entrantly inside the stack that
//! settled the awaitable.

use tokio::task::yield_now;

use crate::coroutine::Coroutine;
use crate::step::Step;

/// Instantiates a coroutine and drives it to completion.
///
/// Init arguments are closed over by the factory; each call builds a fresh
/// coroutine bound to this run only.
///
/// Resolves with the coroutine's final value, or fails with the first error
/// the coroutine let propagate — unmodified, delivered exactly once.
pub async fn run<C, F>(factory: F) -> Result<C::Output, C::Error>
where
    C: Coroutine,
    F: FnOnce() -> C,
{
    drive(factory()).await
}

/// Drives an already-instantiated coroutine to completion.
///
/// Takes the coroutine by value: a run owns its coroutine exclusively, so
/// resuming an instance that is mid-run is unrepresentable.
pub async fn drive<C>(mut coroutine: C) -> Result<C::Output, C::Error>
where
    C: Coroutine,
{
    let mut cycle: u64 = 0;
    let mut step = coroutine.resume(None)?;

    loop {
        let awaitable = match step {
            Step::Complete(value) => {
                tracing::debug!(cycle, "coroutine completed");
                return Ok(value);
            }
            Step::Suspended(awaitable) => awaitable,
        };

        tracing::trace!(cycle, ready = awaitable.is_ready(), "settling yielded awaitable");
        let settled = awaitable.settle().await;

        // Resume on a fresh scheduler turn, never inside the stack that
        // settled the awaitable.
        yield_now().await;

        cycle += 1;
        step = match settled {
            Ok(value) => coroutine.resume(Some(value))?,
            Err(error) => match coroutine.resume_with_error(error) {
                Ok(next) => {
                    tracing::trace!(cycle, "coroutine recovered from injected failure");
                    next
                }
                Err(error) => {
                    tracing::debug!(cycle, "injected failure propagated uncaught");
                    return Err(error);
                }
            },
        };
    }
}
