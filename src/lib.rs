//! Tagged success-or-failure container
//!
//! [`Outcome`] is an explicit two-variant sum (`Ok`/`Err`) for code that wants
//! failure as a value instead of an unwinding panic, plus catch constructors
//! that translate panics at the boundary and an adapter for fallible futures.

pub mod catch;
pub mod error;
pub mod outcome;

// Re-exports
pub use catch::IntoOutcome;
pub use error::{CaughtPanic, EmptyError};
pub use outcome::Outcome;
