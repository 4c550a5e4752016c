//! Resumption outcome type.

/// Outcome of one resumption of a [`Coroutine`](crate::Coroutine).
///
/// This is a sum type that structurally distinguishes a pause from
/// termination, ensuring callers cannot accidentally treat a suspended
/// coroutine as finished.
#[derive(Debug)]
pub enum Step<Y, O> {
    /// The coroutine paused, yielding a request to settle before the next
    /// resumption.
    Suspended(Y),
    /// The coroutine ran to completion with its final value.
    Complete(O),
}

impl<Y, O> Step<Y, O> {
    #[must_use]
    pub const fn is_suspended(&self) -> bool {
        matches!(self, Self::Suspended(_))
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }
}
