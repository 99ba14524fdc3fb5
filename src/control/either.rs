//! Either type - disjoint success or failure.
//!
//! This module provides the `Either<L, R>` type, which represents a value
//! that is either a `Left(L)` or a `Right(R)`. This is commonly used in
//! functional programming for:
//!
//! - Error handling (Left for failures, Right for success)
//! - Branching computations
//! - Capturing panics at the boundary of panic-based code
//!
//! Unlike [`Maybe`](crate::control::Maybe), both variants hold real
//! payloads: a `Left` still carries the failure value, readable through
//! [`merge`](Either::merge) or the `Left`-side accessors.
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Either;
//!
//! // Creating Either values
//! let failure: Either<i32, String> = Either::left(42);
//! let success: Either<i32, String> = Either::right("hello".to_string());
//!
//! // Pattern matching
//! match failure {
//!     Either::Left(n) => println!("Got left: {}", n),
//!     Either::Right(s) => println!("Got right: {}", s),
//! }
//!
//! // Using fold to handle both cases
//! let result = success.fold(
//!     |n| format!("Number: {}", n),
//!     |s| format!("String: {}", s),
//! );
//! assert_eq!(result, "String: hello");
//! ```

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

use super::error::{CaughtPanic, ExplicitThrowError, UnwrapLeftError};
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A value that is either a failure (`Left`) or a success (`Right`).
///
/// By convention:
/// - `Left` represents failure, or the first alternative
/// - `Right` represents success, or the second alternative
///
/// The success-channel operations (`map`, `chain`, `filter`, `get_or_else`)
/// pass a `Left` through untouched; failure is data, not an error, until an
/// explicit extraction point asks for a value that is not there.
///
/// # Type Parameters
///
/// * `L` - The type of the failure value
/// * `R` - The type of the success value
///
/// # Examples
///
/// ```rust
/// use monadic::control::Either;
///
/// let success: Either<String, i32> = Either::right(21);
/// let doubled = success.map(|x| x * 2);
/// assert_eq!(doubled, Either::right(42));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The failure variant, carrying the failure payload.
    Left(L),
    /// The success variant, carrying the success payload.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Creates a failure value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let failure: Either<&str, i32> = Either::left("missing");
    /// assert!(failure.is_left());
    /// ```
    #[inline]
    pub const fn left(value: L) -> Self {
        Self::Left(value)
    }

    /// Creates a success value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let success: Either<&str, i32> = Either::right(42);
    /// assert!(success.is_right());
    /// ```
    #[inline]
    pub const fn right(value: R) -> Self {
        Self::Right(value)
    }

    /// Wraps a value in the success variant; the unit of the `Either` family.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let success: Either<(), i32> = Either::of(42);
    /// assert_eq!(success, Either::right(42));
    /// ```
    #[inline]
    pub const fn of(value: R) -> Self {
        Self::Right(value)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let left: Either<i32, String> = Either::left(42);
    /// assert!(left.is_left());
    ///
    /// let right: Either<i32, String> = Either::right("hello".to_string());
    /// assert!(!right.is_left());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let right: Either<i32, String> = Either::right("hello".to_string());
    /// assert!(right.is_right());
    ///
    /// let left: Either<i32, String> = Either::left(42);
    /// assert!(!left.is_right());
    /// ```
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Variant Accessors
    // =========================================================================

    /// Converts the `Either` into an `Option<L>`, consuming the either.
    ///
    /// Returns `Some(l)` if this is `Left(l)`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let left: Either<i32, String> = Either::left(42);
    /// assert_eq!(left.left_value(), Some(42));
    ///
    /// let right: Either<i32, String> = Either::right("hello".to_string());
    /// assert_eq!(right.left_value(), None);
    /// ```
    #[inline]
    pub fn left_value(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts the `Either` into an `Option<R>`, consuming the either.
    ///
    /// Returns `Some(r)` if this is `Right(r)`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let right: Either<i32, String> = Either::right("hello".to_string());
    /// assert_eq!(right.right_value(), Some("hello".to_string()));
    ///
    /// let left: Either<i32, String> = Either::left(42);
    /// assert_eq!(left.right_value(), None);
    /// ```
    #[inline]
    pub fn right_value(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns a reference to the left value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let left: Either<i32, String> = Either::left(42);
    /// assert_eq!(left.left_ref(), Some(&42));
    /// ```
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let right: Either<i32, String> = Either::right("hello".to_string());
    /// assert_eq!(right.right_ref(), Some(&"hello".to_string()));
    /// ```
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success value.
    ///
    /// If this is `Right(r)`, returns `Right(function(r))`.
    /// If this is `Left(l)`, returns `Left(l)` unchanged; the function is
    /// never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let right: Either<i32, String> = Either::right("hello".to_string());
    /// assert_eq!(right.map(|s| s.len()), Either::right(5));
    ///
    /// let left: Either<i32, String> = Either::left(42);
    /// assert_eq!(left.map(|s: String| s.len()), Either::left(42));
    /// ```
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies a function to the failure value.
    ///
    /// If this is `Left(l)`, returns `Left(function(l))`.
    /// If this is `Right(r)`, returns `Right(r)` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let left: Either<i32, String> = Either::left(42);
    /// assert_eq!(left.map_left(|x| x * 2), Either::left(84));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies one of two functions depending on whether this is Left or Right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let left: Either<i32, String> = Either::left(42);
    /// let result = left.bimap(|x| x * 2, |s: String| s.len());
    /// assert_eq!(result, Either::left(84));
    ///
    /// let right: Either<i32, String> = Either::right("hello".to_string());
    /// let result = right.bimap(|x: i32| x * 2, |s| s.len());
    /// assert_eq!(result, Either::right(5));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Sequences a function returning another `Either`.
    ///
    /// `Right` returns exactly what `function` returns - no re-wrapping
    /// happens; `Left` passes through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let parse = |s: &str| s.parse::<i32>().map_err(|_| "not a number").into();
    /// let result: Either<&str, i32> = Either::right("42").chain(parse);
    /// assert_eq!(result, Either::right(42));
    /// ```
    #[inline]
    pub fn chain<U, F>(self, function: F) -> Either<L, U>
    where
        F: FnOnce(R) -> Either<L, U>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Recovers from a failure with a function of the failure payload.
    ///
    /// `Right` returns itself; `Left` returns exactly what `function`
    /// returns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let recovered: Either<&str, i32> = Either::left("nope").or_else(|_| Either::right(0));
    /// assert_eq!(recovered, Either::right(0));
    /// ```
    #[inline]
    pub fn or_else<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> Either<T, R>,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Keeps a success payload only if it satisfies the predicate.
    ///
    /// A `Right` failing the predicate becomes `Left(None)` - the empty
    /// marker. An existing `Left` passes through with its payload preserved
    /// as `Left(Some(l))`; the predicate is never invoked on it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let kept: Either<&str, i32> = Either::right(5);
    /// assert_eq!(kept.filter(|n| *n > 3), Either::right(5));
    ///
    /// let dropped: Either<&str, i32> = Either::right(5);
    /// assert_eq!(dropped.filter(|n| *n > 10), Either::left(None));
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Either<Option<L>, R>
    where
        P: FnOnce(&R) -> bool,
    {
        match self {
            Self::Left(value) => Either::Left(Some(value)),
            Self::Right(value) => {
                if predicate(&value) {
                    Either::Right(value)
                } else {
                    Either::Left(None)
                }
            }
        }
    }

    // =========================================================================
    // Fold and Swap
    // =========================================================================

    /// Eliminates the Either by applying one of two functions.
    ///
    /// This is also known as "case analysis" or "pattern matching" as a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let left: Either<i32, String> = Either::left(42);
    /// let result = left.fold(|x| x.to_string(), |s| s);
    /// assert_eq!(result, "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the Left and Right variants.
    ///
    /// `Left(l)` becomes `Right(l)`, and `Right(r)` becomes `Left(r)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let left: Either<i32, String> = Either::left(42);
    /// assert_eq!(left.swap(), Either::right(42));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the success value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Left` value. Reading a success value from a
    /// failure is a programmer error; use [`try_get`](Self::try_get) or
    /// [`get_or_else`](Self::get_or_else) on paths where failure is
    /// expected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let right: Either<i32, String> = Either::right("hello".to_string());
    /// assert_eq!(right.get(), "hello".to_string());
    /// ```
    #[inline]
    pub fn get(self) -> R {
        match self {
            Self::Left(_) => panic!("{}", UnwrapLeftError),
            Self::Right(value) => value,
        }
    }

    /// Returns the success value, or [`UnwrapLeftError`] for a `Left`.
    ///
    /// # Errors
    ///
    /// Returns `Err(UnwrapLeftError)` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{Either, UnwrapLeftError};
    ///
    /// let right: Either<&str, i32> = Either::right(42);
    /// assert_eq!(right.try_get(), Ok(42));
    ///
    /// let left: Either<&str, i32> = Either::left("boom");
    /// assert_eq!(left.try_get(), Err(UnwrapLeftError));
    /// ```
    #[inline]
    pub fn try_get(self) -> Result<R, UnwrapLeftError> {
        match self {
            Self::Left(_) => Err(UnwrapLeftError),
            Self::Right(value) => Ok(value),
        }
    }

    /// Returns the success value, or the default for a `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let right: Either<&str, i32> = Either::right(5);
    /// assert_eq!(right.get_or_else(0), 5);
    ///
    /// let left: Either<&str, i32> = Either::left("nope");
    /// assert_eq!(left.get_or_else(0), 0);
    /// ```
    #[inline]
    pub fn get_or_else(self, default: R) -> R {
        match self {
            Self::Left(_) => default,
            Self::Right(value) => value,
        }
    }

    /// Returns the success value, or an error built from the caller's
    /// message for a `Left`.
    ///
    /// # Errors
    ///
    /// Returns `Err(ExplicitThrowError)` carrying `message` if this is a
    /// `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let left: Either<&str, i32> = Either::left("ignored");
    /// let error = left.get_or_else_throw("value required").unwrap_err();
    /// assert_eq!(error.message(), "value required");
    /// ```
    #[inline]
    pub fn get_or_else_throw(self, message: impl Into<String>) -> Result<R, ExplicitThrowError> {
        match self {
            Self::Left(_) => Err(ExplicitThrowError::new(message)),
            Self::Right(value) => Ok(value),
        }
    }

    /// Returns the failure value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let failure = Either::catch(|| -> i32 { panic!("boom") });
    /// assert_eq!(failure.unwrap_err().message(), "boom");
    /// ```
    #[inline]
    pub fn unwrap_err(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => panic!("called `Either::unwrap_err()` on a `Right` value"),
        }
    }
}

impl<T> Either<T, T> {
    /// Returns the payload of either variant.
    ///
    /// This is the one operation that reads a `Left` payload without
    /// failing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let left: Either<i32, i32> = Either::left(1);
    /// let right: Either<i32, i32> = Either::right(2);
    /// assert_eq!(left.merge(), 1);
    /// assert_eq!(right.merge(), 2);
    /// ```
    #[inline]
    pub fn merge(self) -> T {
        match self {
            Self::Left(value) | Self::Right(value) => value,
        }
    }
}

impl<R> Either<(), R> {
    /// Builds an `Either` from a possibly-absent value.
    ///
    /// `None` is the absent marker and becomes `Left(())`; any `Some(v)`
    /// becomes `Right(v)` holding `v` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// assert_eq!(Either::from_nullable(Some(5)), Either::right(5));
    /// assert_eq!(Either::<(), i32>::from_nullable(None), Either::left(()));
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<R>) -> Self {
        match value {
            Some(inner) => Self::Right(inner),
            None => Self::Left(()),
        }
    }
}

impl<R> Either<CaughtPanic, R> {
    /// Runs a function that may panic, capturing the outcome.
    ///
    /// This is the sanctioned bridge from panic-based code: a normal return
    /// becomes `Right(result)`, a panic becomes `Left(CaughtPanic)` whose
    /// message preserves the panic payload. For value-style fallibility,
    /// `From<Result>` is the bridge instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let success = Either::catch(|| 21 * 2);
    /// assert_eq!(success, Either::right(42));
    ///
    /// let failure = Either::catch(|| -> i32 { panic!("boom") });
    /// assert_eq!(failure.unwrap_err().message(), "boom");
    /// ```
    pub fn catch<F>(function: F) -> Self
    where
        F: FnOnce() -> R,
    {
        match catch_unwind(AssertUnwindSafe(function)) {
            Ok(value) => Self::Right(value),
            Err(payload) => Self::Left(CaughtPanic::from_payload(payload)),
        }
    }

}

// =============================================================================
// Debug and Display Implementations
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// Converts a `Result` to an `Either`.
    ///
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let ok: Result<i32, String> = Ok(42);
    /// let either: Either<String, i32> = ok.into();
    /// assert_eq!(either, Either::right(42));
    /// ```
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// Converts an `Either` to a `Result`.
    ///
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let right: Either<String, i32> = Either::right(42);
    /// let result: Result<i32, String> = right.into();
    /// assert_eq!(result, Ok(42));
    /// ```
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }
}

impl<L, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    #[inline]
    fn apply<B, C>(self, value: Either<L, B>) -> Either<L, C>
    where
        R: FnOnce(B) -> C,
        B: 'static,
        C: 'static,
    {
        match (self, value) {
            (Self::Right(function), Either::Right(inner)) => Either::Right(function(inner)),
            (Self::Left(error), _) => Either::Left(error),
            (_, Either::Left(error)) => Either::Left(error),
        }
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        match (self, other) {
            (Self::Right(a), Either::Right(b)) => Either::Right(function(a, b)),
            (Self::Left(error), _) => Either::Left(error),
            (_, Either::Left(error)) => Either::Left(error),
        }
    }
}

impl<L, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B> + 'static,
        B: 'static,
    {
        self.chain(function)
    }
}
