//! Canonical form for values a coroutine yields.
//!
//! A coroutine may yield a plain value or a genuine future; both are
//! normalized into an [`Awaitable`] before entering the resumption cycle,
//! so the runner treats every yield uniformly. Plain values behave as
//! already-settled futures.

use std::fmt;
use std::future::Future;

use futures_util::FutureExt;
use futures_util::future::BoxFuture;

/// A yielded value in canonical awaitable form.
pub enum Awaitable<T, E> {
    /// Plain value, trivially resolved.
    Ready(T),
    /// Adopted future, settling to success or failure.
    Pending(BoxFuture<'static, Result<T, E>>),
}

impl<T, E> Awaitable<T, E> {
    /// Wraps a plain value as an already-settled awaitable.
    #[must_use]
    pub fn ready(value: T) -> Self {
        Self::Ready(value)
    }

    /// Adopts a future as-is.
    #[must_use]
    pub fn pending<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self::Pending(future.boxed())
    }

    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Resolves this awaitable to its settled result.
    ///
    /// `Ready` values settle immediately with `Ok`; `Pending` futures are
    /// awaited and their outcome passes through unchanged.
    pub async fn settle(self) -> Result<T, E> {
        match self {
            Self::Ready(value) => Ok(value),
            Self::Pending(future) => future.await,
        }
    }
}

/// Plain values auto-wrap as resolved awaitables.
impl<T, E> From<T> for Awaitable<T, E> {
    fn from(value: T) -> Self {
        Self::Ready(value)
    }
}

impl<T: fmt::Debug, E> fmt::Debug for Awaitable<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready(value) => f.debug_tuple("Ready").field(value).finish(),
            Self::Pending(_) => f.debug_tuple("Pending").field(&"..").finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_value_auto_wraps_ready() {
        let awaitable: Awaitable<i32, String> = Awaitable::from(42);
        assert!(awaitable.is_ready());
    }

    #[tokio::test]
    async fn test_ready_settles_immediately() {
        let awaitable: Awaitable<i32, String> = Awaitable::ready(7);
        assert_eq!(awaitable.settle().await, Ok(7));
    }

    #[tokio::test]
    async fn test_pending_adopts_future() {
        let awaitable = Awaitable::pending(async { Ok::<_, String>(9) });
        assert!(!awaitable.is_ready());
        assert_eq!(awaitable.settle().await, Ok(9));
    }

    #[tokio::test]
    async fn test_pending_failure_passes_through() {
        let awaitable: Awaitable<i32, String> =
            Awaitable::pending(async { Err("boom".to_string()) });
        assert_eq!(awaitable.settle().await, Err("boom".to_string()));
    }
}
