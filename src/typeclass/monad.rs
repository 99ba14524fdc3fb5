//! Monad type class - sequencing computations within a context.
//!
//! This module provides the `Monad` trait, which extends `Applicative` with
//! the ability to sequence computations where each step can depend on the
//! result of the previous step.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! Lifting a pure value and binding a function is the same as applying the function:
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! Binding `pure` to a monad returns the original monad:
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! The order of binding operations can be reassociated:
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic::typeclass::Monad;
//!
//! // Using flat_map to chain Option computations
//! let x = Some(5);
//! let y = x.flat_map(|n| if n > 0 { Some(n * 2) } else { None });
//! assert_eq!(y, Some(10));
//! ```

use super::applicative::Applicative;

/// A type class for types that support sequencing of computations.
///
/// `Monad` extends `Applicative` with `flat_map`, which allows the result
/// of one computation to determine what computation to perform next.
///
/// # Examples
///
/// ```rust
/// use monadic::typeclass::Monad;
///
/// let result = Some("42")
///     .flat_map(|s| s.parse::<i32>().ok())
///     .flat_map(|n| Some(n * 2));
/// assert_eq!(result, Some(84));
/// ```
pub trait Monad: Applicative {
    /// Applies a function returning a monadic value and flattens the result.
    ///
    /// This is the fundamental operation of the Monad type class, `>>=` in
    /// Haskell, `and_then` in the Rust standard library.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::typeclass::Monad;
    ///
    /// let x = Some(5);
    /// assert_eq!(x.flat_map(|n| Some(n * 2)), Some(10));
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B> + 'static,
        B: 'static;

    /// Sequences two monadic values, discarding the result of the first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::typeclass::Monad;
    ///
    /// assert_eq!(Some(1).then(Some("next")), Some("next"));
    /// let missing: Option<i32> = None;
    /// assert_eq!(missing.then(Some("next")), None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        B: 'static,
        Self::WithType<B>: 'static,
    {
        self.flat_map(move |_| next)
    }
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B> + 'static,
        B: 'static,
    {
        self.and_then(function)
    }
}

impl<A, E> Monad for Result<A, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(A) -> Result<B, E> + 'static,
        B: 'static,
    {
        self.and_then(function)
    }
}
