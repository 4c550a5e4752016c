//! The suspendable-computation capability set.
//!
//! A coroutine is an explicit state machine with two resumption entry
//! points: [`resume`](Coroutine::resume) feeds a settled value back at the
//! current suspension point, and
//! [`resume_with_error`](Coroutine::resume_with_error) injects a failure
//! there instead. Whether an injected failure is recoverable is decided at
//! exactly that boundary: `Ok(step)` means the coroutine caught it and
//! carried on; `Err(error)` means it propagated out uncaught.

use std::marker::PhantomData;

use crate::awaitable::Awaitable;
use crate::step::Step;

/// Result of a single resumption: the next step, or an error the coroutine
/// let propagate.
pub type Resumption<R, O, E> = Result<Step<Awaitable<R, E>, O>, E>;

/// A computation that pauses at defined points and resumes with an injected
/// value or error.
///
/// One instance is exclusively owned by one run; the runner resumes it
/// strictly sequentially through `&mut self`.
pub trait Coroutine {
    /// Value fed back at a suspension point.
    type Resume;
    /// Final value of a completed run.
    type Output;
    /// Failure type, delivered to the caller unmodified.
    type Error;

    /// Resume with the settled value of the previously yielded awaitable.
    ///
    /// `input` is `None` only for the first resumption, before anything has
    /// been yielded.
    fn resume(
        &mut self,
        input: Option<Self::Resume>,
    ) -> Resumption<Self::Resume, Self::Output, Self::Error>;

    /// Deliver `error` at the current suspension point instead of a value.
    ///
    /// The default propagates, modeling a coroutine with no recovery logic.
    fn resume_with_error(
        &mut self,
        error: Self::Error,
    ) -> Resumption<Self::Resume, Self::Output, Self::Error> {
        Err(error)
    }
}

/// Coroutine built from a single resumption closure. See [`from_fn`].
pub struct FromFn<F, R> {
    f: F,
    _resume: PhantomData<fn(R)>,
}

/// Builds a coroutine from a closure over its own captured state.
///
/// The closure is the [`resume`](Coroutine::resume) implementation; error
/// injection uses the default (propagate), so closure coroutines cannot
/// recover from upstream failures. Implement [`Coroutine`] directly when
/// recovery is needed.
#[must_use]
pub fn from_fn<F, R, O, E>(f: F) -> FromFn<F, R>
where
    F: FnMut(Option<R>) -> Resumption<R, O, E>,
{
    FromFn {
        f,
        _resume: PhantomData,
    }
}

impl<F, R, O, E> Coroutine for FromFn<F, R>
where
    F: FnMut(Option<R>) -> Resumption<R, O, E>,
{
    type Resume = R;
    type Output = O;
    type Error = E;

    fn resume(&mut self, input: Option<R>) -> Resumption<R, O, E> {
        (self.f)(input)
    }
}
