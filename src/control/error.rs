//! Error types for the container sum types.
//!
//! This module provides the error values produced when code reads a payload
//! that was never there (`Nothing`, `Left`) and the carriers used by the
//! sanctioned bridges from panic-based code (`Either::catch`, `IO::try_run`).
//!
//! Emptiness and failure are ordinarily modeled as variant state and flow
//! through `map`/`chain`/`filter` without ever becoming an error; these types
//! only appear at the explicit extraction points.

/// Error returned when reading the value of a `Nothing`.
///
/// # Examples
///
/// ```rust
/// use monadic::control::{EmptyValueError, Maybe};
///
/// let nothing: Maybe<i32> = Maybe::nothing();
/// assert_eq!(nothing.try_get(), Err(EmptyValueError));
/// assert_eq!(
///     EmptyValueError.to_string(),
///     "cannot extract the value of a Nothing"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyValueError;

impl std::fmt::Display for EmptyValueError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "cannot extract the value of a Nothing")
    }
}

impl std::error::Error for EmptyValueError {}

/// Error returned when reading the success value of a `Left`.
///
/// # Examples
///
/// ```rust
/// use monadic::control::{Either, UnwrapLeftError};
///
/// let failure: Either<&str, i32> = Either::left("boom");
/// assert_eq!(failure.try_get(), Err(UnwrapLeftError));
/// assert_eq!(
///     UnwrapLeftError.to_string(),
///     "cannot extract the value of a Left"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnwrapLeftError;

impl std::fmt::Display for UnwrapLeftError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "cannot extract the value of a Left")
    }
}

impl std::error::Error for UnwrapLeftError {}

/// Error carrying a caller-supplied message, produced by
/// [`Either::get_or_else_throw`](crate::control::Either::get_or_else_throw).
///
/// # Examples
///
/// ```rust
/// use monadic::control::{Either, ExplicitThrowError};
///
/// let failure: Either<&str, i32> = Either::left("ignored");
/// let error = failure.get_or_else_throw("config value missing").unwrap_err();
/// assert_eq!(error.message(), "config value missing");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplicitThrowError {
    message: String,
}

impl ExplicitThrowError {
    /// Creates an error from the caller's message.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The caller-supplied message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExplicitThrowError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.message)
    }
}

impl std::error::Error for ExplicitThrowError {}

/// A panic captured by one of the sanctioned bridges from panic-based code:
/// [`Either::catch`](crate::control::Either::catch) or
/// [`IO::try_run`](crate::effect::IO::try_run).
///
/// The panic payload is downcast to a message where possible (`&str` or
/// `String` payloads); any other payload is reported as an unknown panic.
///
/// # Examples
///
/// ```rust
/// use monadic::control::Either;
///
/// let caught = Either::catch(|| -> i32 { panic!("boom") });
/// assert_eq!(caught.unwrap_err().message(), "boom");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaughtPanic {
    message: String,
}

impl CaughtPanic {
    /// Extracts a message from a panic payload as returned by
    /// `std::panic::catch_unwind`.
    #[must_use]
    pub fn from_payload(payload: Box<dyn std::any::Any + Send>) -> Self {
        let message = payload.downcast_ref::<&str>().map_or_else(
            || {
                payload
                    .downcast_ref::<String>()
                    .cloned()
                    .unwrap_or_else(|| "unknown panic".to_string())
            },
            |string| (*string).to_string(),
        );
        Self { message }
    }

    /// The captured panic message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for CaughtPanic {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "caught panic: {}", self.message)
    }
}

impl std::error::Error for CaughtPanic {}
