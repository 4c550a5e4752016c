//! drover demo - drives a few coroutines over simulated async work.
//!
//! Scenarios:
//!
//! 1. A two-request price pipeline (base, then factor, then their product).
//! 2. A lookup whose primary source fails, recovered at the suspension
//!    point by falling back to a secondary source.
//! 3. The price pipeline again, under a deadline too short to meet.
//!
//! Run with `RUST_LOG=trace` to watch each resumption cycle.

use std::io;
use std::time::Duration;

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

use drover_core::{Awaitable, Coroutine, Resumption, Step, run, run_with_deadline};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

/// Simulated remote fetch: resolves to `value` after `delay`.
fn fetched_after(value: i64, delay: Duration) -> Awaitable<i64, String> {
    Awaitable::pending(async move {
        tokio::time::sleep(delay).await;
        Ok(value)
    })
}

/// Looks up a base price and a multiplier, one request at a time.
struct PricePipeline {
    base: Option<i64>,
}

impl Coroutine for PricePipeline {
    type Resume = i64;
    type Output = i64;
    type Error = String;

    fn resume(&mut self, input: Option<i64>) -> Resumption<i64, i64, String> {
        match (self.base, input) {
            (None, None) => Ok(Step::Suspended(fetched_after(
                6,
                Duration::from_millis(30),
            ))),
            (None, Some(base)) => {
                self.base = Some(base);
                Ok(Step::Suspended(fetched_after(7, Duration::from_millis(20))))
            }
            (Some(base), Some(factor)) => Ok(Step::Complete(base * factor)),
            (Some(_), None) => Err("resumed without a feed value".to_string()),
        }
    }
}

/// Asks a primary source that is offline; recovers by asking a fallback.
struct FallbackLookup;

impl Coroutine for FallbackLookup {
    type Resume = i64;
    type Output = i64;
    type Error = String;

    fn resume(&mut self, input: Option<i64>) -> Resumption<i64, i64, String> {
        match input {
            None => Ok(Step::Suspended(Awaitable::pending(async {
                tokio::time::sleep(Duration::from_millis(10)).await;
                Err("primary source offline".to_string())
            }))),
            Some(value) => Ok(Step::Complete(value)),
        }
    }

    fn resume_with_error(&mut self, error: String) -> Resumption<i64, i64, String> {
        tracing::warn!(%error, "primary lookup failed, trying fallback");
        Ok(Step::Suspended(fetched_after(10, Duration::from_millis(5))))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let total = run(|| PricePipeline { base: None })
        .await
        .map_err(|e| anyhow!(e))?;
    tracing::info!(total, "price pipeline completed");

    let fallback = run(|| FallbackLookup).await.map_err(|e| anyhow!(e))?;
    tracing::info!(fallback, "fallback lookup completed");

    match run_with_deadline(|| PricePipeline { base: None }, Duration::from_millis(5)).await {
        Ok(total) => tracing::info!(total, "deadline run completed in time"),
        Err(error) => tracing::warn!(%error, "deadline run did not complete"),
    }

    Ok(())
}
