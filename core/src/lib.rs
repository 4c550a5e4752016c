//! Drive suspendable computations to completion over yielded awaitables.
//!
//! A [`Coroutine`] pauses by yielding an [`Awaitable`] — a plain value or
//! an adopted future — and is resumed with the settled result on a fresh
//! scheduler turn. [`run`] drives one coroutine to a single terminal
//! outcome; the combinators compose whole runs:
//!
//! - **[`run`] / [`drive`]**: one coroutine, one terminal `Result`
//! - **[`run_all`]**: every run must succeed, outputs in input order
//! - **[`run_race`]**: first run to settle wins, success or failure
//! - **[`run_with_deadline`]**: a run raced against a timer
//!
//! Upstream failures settle back into the coroutine at its suspension
//! point; whether a run recovers is entirely the coroutine's decision
//! ([`Coroutine::resume_with_error`]).
//!
//! ```
//! use drover_core::{Awaitable, Step, from_fn, run};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let outcome = run(|| {
//!     from_fn(|input: Option<i32>| match input {
//!         None => Ok(Step::Suspended(Awaitable::ready(21))),
//!         Some(n) => Ok::<_, String>(Step::Complete(n * 2)),
//!     })
//! })
//! .await;
//!
//! assert_eq!(outcome, Ok(42));
//! # }
//! ```

pub mod awaitable;
pub mod combinators;
pub mod coroutine;
pub mod runner;
pub mod step;

pub use awaitable::Awaitable;
pub use combinators::{DeadlineError, run_all, run_race, run_with_deadline};
pub use coroutine::{Coroutine, FromFn, Resumption, from_fn};
pub use runner::{drive, run};
pub use step::Step;
