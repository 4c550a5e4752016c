//! Combinators over whole runs.
//!
//! These compose complete runs, never individual resumptions: a coroutine
//! instance is still driven strictly sequentially by its own run. Losing or
//! out-of-time runs are cancelled by dropping their futures, which is the
//! only cancellation this design supports.

use std::time::Duration;

use futures_util::future::{select_all, try_join_all};
use thiserror::Error;

use crate::coroutine::Coroutine;
use crate::runner::drive;

/// Failure of a deadline-bounded run.
#[derive(Debug, Error)]
pub enum DeadlineError<E> {
    /// The coroutine failed before the deadline.
    #[error("coroutine failed before the deadline: {0}")]
    Failed(E),
    /// The deadline elapsed first; the run was dropped at that point.
    #[error("coroutine did not complete within {0:?}")]
    Elapsed(Duration),
}

/// Drives one coroutine per factory, concurrently.
///
/// Resolves with every output in input order, or fails with the first
/// failure, cancelling the runs still in flight.
pub async fn run_all<C, F, I>(factories: I) -> Result<Vec<C::Output>, C::Error>
where
    C: Coroutine,
    F: FnOnce() -> C,
    I: IntoIterator<Item = F>,
{
    try_join_all(factories.into_iter().map(|factory| drive(factory()))).await
}

/// Drives one coroutine per factory; the first run to settle wins.
///
/// The winner's outcome is returned whether it succeeded or failed; the
/// losing runs are cancelled.
///
/// # Panics
///
/// Panics if `factories` is empty — a race with no contestants would never
/// settle.
pub async fn run_race<C, F, I>(factories: I) -> Result<C::Output, C::Error>
where
    C: Coroutine,
    F: FnOnce() -> C,
    I: IntoIterator<Item = F>,
{
    let runs: Vec<_> = factories
        .into_iter()
        .map(|factory| Box::pin(drive(factory())))
        .collect();
    assert!(!runs.is_empty(), "run_race requires at least one coroutine");

    let (outcome, _index, _losers) = select_all(runs).await;
    outcome
}

/// Drives one coroutine, racing it against a timer.
///
/// If the deadline elapses first the run is dropped and
/// [`DeadlineError::Elapsed`] is returned; a failure from the coroutine
/// itself surfaces as [`DeadlineError::Failed`] with its identity intact.
pub async fn run_with_deadline<C, F>(
    factory: F,
    limit: Duration,
) -> Result<C::Output, DeadlineError<C::Error>>
where
    C: Coroutine,
    F: FnOnce() -> C,
{
    match tokio::time::timeout(limit, drive(factory())).await {
        Ok(outcome) => outcome.map_err(DeadlineError::Failed),
        Err(_elapsed) => Err(DeadlineError::Elapsed(limit)),
    }
}

#[cfg(test)]
mod tests {
    use tokio::time::sleep;

    use super::*;
    use crate::awaitable::Awaitable;
    use crate::coroutine::Resumption;
    use crate::step::Step;

    /// Settles its configured outcome after a delay, then completes with
    /// the fed-back value.
    struct SettleAfter {
        outcome: Result<i32, String>,
        delay_ms: u64,
    }

    impl Coroutine for SettleAfter {
        type Resume = i32;
        type Output = i32;
        type Error = String;

        fn resume(&mut self, input: Option<i32>) -> Resumption<i32, i32, String> {
            match input {
                None => {
                    let outcome = self.outcome.clone();
                    let delay = Duration::from_millis(self.delay_ms);
                    Ok(Step::Suspended(Awaitable::pending(async move {
                        sleep(delay).await;
                        outcome
                    })))
                }
                Some(value) => Ok(Step::Complete(value)),
            }
        }
    }

    fn settle_after(outcome: Result<i32, String>, delay_ms: u64) -> impl FnOnce() -> SettleAfter {
        move || SettleAfter { outcome, delay_ms }
    }

    #[tokio::test]
    async fn test_run_all_preserves_input_order() {
        let outputs = run_all(vec![
            settle_after(Ok(5), 10), // slower, still first in the output
            settle_after(Ok(7), 1),
        ])
        .await;

        assert_eq!(outputs, Ok(vec![5, 7]));
    }

    #[tokio::test]
    async fn test_run_all_fails_with_first_failure() {
        let outputs = run_all(vec![
            settle_after(Ok(5), 20),
            settle_after(Err("boom".to_string()), 1),
        ])
        .await;

        assert_eq!(outputs, Err("boom".to_string()));
    }

    #[tokio::test]
    async fn test_run_race_fastest_settlement_wins() {
        let outcome = run_race(vec![
            settle_after(Ok(5), 20),
            settle_after(Ok(7), 1),
        ])
        .await;

        assert_eq!(outcome, Ok(7));
    }

    #[tokio::test]
    async fn test_run_race_fast_failure_wins() {
        let outcome = run_race(vec![
            settle_after(Ok(5), 20),
            settle_after(Err("boom".to_string()), 1),
        ])
        .await;

        assert_eq!(outcome, Err("boom".to_string()));
    }

    #[tokio::test]
    async fn test_deadline_elapses_before_completion() {
        let outcome = run_with_deadline(settle_after(Ok(1), 50), Duration::from_millis(5)).await;

        match outcome {
            Err(DeadlineError::Elapsed(limit)) => assert_eq!(limit, Duration::from_millis(5)),
            other => panic!("expected Elapsed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_deadline_completion_in_time() {
        let outcome = run_with_deadline(settle_after(Ok(1), 1), Duration::from_millis(500)).await;

        match outcome {
            Ok(value) => assert_eq!(value, 1),
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_deadline_failure_keeps_error_identity() {
        let outcome = run_with_deadline(
            settle_after(Err("boom".to_string()), 1),
            Duration::from_millis(500),
        )
        .await;

        match outcome {
            Err(DeadlineError::Failed(error)) => assert_eq!(error, "boom"),
            other => panic!("expected Failed, got {other:?}"),
        }
    }
}
