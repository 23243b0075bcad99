//! Validation error type.
//!
//! Every guard in this crate fails with the same error kind: an invalid
//! argument carrying a human-readable message. The failure indicates a
//! programming error, not a transient condition; callers propagate it with
//! `?` and report it at a process or request boundary rather than catching
//! it along the way.

use thiserror::Error;

/// Crate result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Error raised when an argument violates a precondition.
///
/// Carries the message naming the offending parameter and the violated
/// precondition (the equivalent of an INVALID_ARGUMENT status at an RPC
/// boundary).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("invalid argument: {message}")]
pub struct Error {
    message: String,
}

impl Error {
    /// Build an error from a preformatted message.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::trace!(target: "argcheck", %message, "argument check failed");
        Self { message }
    }

    /// The message describing the violated precondition.
    pub fn message(&self) -> &str {
        &self.message
    }
}
