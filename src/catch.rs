//! Catch boundaries between panics, fallible futures and [`Outcome`]
//!
//! `try_catch` and `try_catch_async` are the only places a panic becomes a
//! value; [`IntoOutcome`] folds a `Result`-producing future into an
//! `Outcome`-producing one that always completes.

use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

use futures::FutureExt;

use crate::error::CaughtPanic;
use crate::outcome::Outcome;

impl<R> Outcome<R, CaughtPanic> {
    /// Run the supplier, catching any panic it raises
    ///
    /// Completion wraps as `Ok`; a panic of any payload type wraps as
    /// `Err(CaughtPanic)` and never escapes. The supplier is treated as
    /// unwind safe: it is consumed here, so a caught panic leaves no way to
    /// observe state it may have left half-updated.
    pub fn try_catch<F>(supplier: F) -> Self
    where
        F: FnOnce() -> R,
    {
        match panic::catch_unwind(AssertUnwindSafe(supplier)) {
            Ok(result) => Outcome::Ok(result),
            Err(payload) => Outcome::Err(CaughtPanic::from_payload(payload)),
        }
    }

    /// Await the future, catching any panic it raises
    ///
    /// Single suspension point; scheduling relative to other tasks is
    /// whatever the ambient executor provides. The returned future itself
    /// never panics. Unwind safety is asserted as in [`Outcome::try_catch`].
    pub async fn try_catch_async<F>(future: F) -> Self
    where
        F: Future<Output = R>,
    {
        match AssertUnwindSafe(future).catch_unwind().await {
            Ok(result) => Outcome::Ok(result),
            Err(payload) => Outcome::Err(CaughtPanic::from_payload(payload)),
        }
    }
}

/// Adapter from a fallible future to an [`Outcome`]-producing one
///
/// Implemented for every `Future<Output = Result<T, E>>`, so any pending
/// fallible computation converts with a single method call instead of
/// per-call-site match code. The produced future always completes with a
/// value; the `Err` output is folded into the `Err` variant, never re-raised.
pub trait IntoOutcome<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Resolve this future into an [`Outcome`]
    fn into_outcome(self) -> impl Future<Output = Outcome<T, E>> {
        async move { Outcome::from(self.await) }
    }
}

impl<F, T, E> IntoOutcome<T, E> for F where F: Future<Output = Result<T, E>> {}
