//! Concrete error types for the outcome container
//!
//! [`EmptyError`] marks "no value and no explicit error"; [`CaughtPanic`]
//! carries the message recovered from a panic payload at the catch boundary.

use serde::{Deserialize, Serialize};
use std::any::Any;
use thiserror::Error;

/// Sentinel error meaning no value and no explicit error were supplied
///
/// Produced by [`Outcome::of`](crate::Outcome::of) on `None` and by
/// [`Outcome::empty`](crate::Outcome::empty).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("no value and no error were supplied")]
pub struct EmptyError;

/// Error holding the message of a panic caught by
/// [`Outcome::try_catch`](crate::Outcome::try_catch) or
/// [`Outcome::try_catch_async`](crate::Outcome::try_catch_async)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct CaughtPanic {
    message: String,
}

impl CaughtPanic {
    /// Extract a printable message from a caught panic payload
    ///
    /// `panic!` with a format string unwinds with a `String` payload and a
    /// bare literal with `&'static str`; any other payload type is kept opaque.
    pub(crate) fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "panic with non-string payload".to_string()
        };

        tracing::warn!(message = %message, "caught panic");

        Self { message }
    }

    /// The message extracted from the panic payload
    pub fn message(&self) -> &str {
        &self.message
    }
}
