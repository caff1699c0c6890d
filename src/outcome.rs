//! The [`Outcome`] container and its accessors
//!
//! An explicit two-variant tagged sum: the variant is chosen once at
//! construction and never consults the payload, so falsy-but-valid values
//! (`0`, `""`, `false`, empty collections) are ordinary `Ok` payloads.

use serde::{Deserialize, Serialize};
use std::future::Future;

use crate::error::EmptyError;

/// Success-or-failure value: either `Ok` holding a result or `Err` holding an error
///
/// Immutable after construction. Both variants are plain data, so an
/// `Outcome` can be cloned, compared, serialized and shared across threads
/// whenever its payloads can.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome<R, E> {
    /// The operation produced a value
    Ok(R),
    /// The operation failed with an error
    Err(E),
}

impl<R, E> Outcome<R, E> {
    /// Wrap a success value
    pub fn ok(result: R) -> Self {
        Outcome::Ok(result)
    }

    /// Wrap an error value
    pub fn err(error: E) -> Self {
        Outcome::Err(error)
    }

    /// The held value if `Ok`, otherwise `other`
    pub fn or_else(self, other: R) -> R {
        match self {
            Outcome::Ok(result) => result,
            Outcome::Err(_) => other,
        }
    }

    /// The held value if `Ok`, otherwise the supplier's value
    ///
    /// The supplier is not invoked on the `Ok` variant.
    pub fn or_else_get<F>(self, supplier: F) -> R
    where
        F: FnOnce() -> R,
    {
        match self {
            Outcome::Ok(result) => result,
            Outcome::Err(_) => supplier(),
        }
    }

    /// The held value if `Ok`, otherwise the awaited value of the supplier's future
    ///
    /// The supplier is not invoked on the `Ok` variant. A panic inside the
    /// supplied future propagates to the caller.
    pub async fn or_else_await<F, Fut>(self, supplier: F) -> R
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = R>,
    {
        match self {
            Outcome::Ok(result) => result,
            Outcome::Err(_) => supplier().await,
        }
    }

    /// The held value if `Ok`, otherwise panics with the supplier's error
    #[track_caller]
    pub fn or_else_throw<F>(self, supplier: F) -> R
    where
        F: FnOnce() -> E,
        E: std::fmt::Display,
    {
        match self {
            Outcome::Ok(result) => result,
            Outcome::Err(_) => panic!("{}", supplier()),
        }
    }

    /// The held value if `Ok`, otherwise panics with the held error
    ///
    /// For [`Outcome::empty`] the held error is [`EmptyError`].
    #[track_caller]
    pub fn or_throw(self) -> R
    where
        E: std::fmt::Display,
    {
        match self {
            Outcome::Ok(result) => result,
            Outcome::Err(error) => panic!("{}", error),
        }
    }

    /// The held value if `Ok`, otherwise `None`; never panics
    pub fn or_none(self) -> Option<R> {
        match self {
            Outcome::Ok(result) => Some(result),
            Outcome::Err(_) => None,
        }
    }

    /// True when holding an error
    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Err(_))
    }

    /// True when holding a value
    pub fn has_result(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Borrow the held value, if any
    pub fn result(&self) -> Option<&R> {
        match self {
            Outcome::Ok(result) => Some(result),
            Outcome::Err(_) => None,
        }
    }

    /// Borrow the held error, if any
    pub fn error(&self) -> Option<&E> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Err(error) => Some(error),
        }
    }

    /// Convert into the standard library result
    pub fn into_result(self) -> Result<R, E> {
        self.into()
    }
}

impl<R> Outcome<R, EmptyError> {
    /// Wrap a possibly-absent value: `Some` becomes `Ok`, `None` becomes
    /// `Err(EmptyError)`
    ///
    /// Absence means `None` only. `Some(0)`, `Some("")` and `Some(false)` are
    /// present values and produce `Ok`.
    pub fn of(value: Option<R>) -> Self {
        match value {
            Some(result) => Outcome::Ok(result),
            None => Outcome::Err(EmptyError),
        }
    }

    /// An outcome with no value and no specific error
    pub fn empty() -> Self {
        Outcome::Err(EmptyError)
    }
}

impl<R: std::fmt::Display, E: std::fmt::Display> std::fmt::Display for Outcome<R, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ok(result) => write!(f, "{}", result),
            Outcome::Err(error) => write!(f, "{}", error),
        }
    }
}

impl<R, E> From<Result<R, E>> for Outcome<R, E> {
    fn from(result: Result<R, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Err(error),
        }
    }
}

impl<R, E> From<Outcome<R, E>> for Result<R, E> {
    fn from(outcome: Outcome<R, E>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }
}
