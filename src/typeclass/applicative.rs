//! Applicative type class - applying functions within containers.
//!
//! This module provides the `Applicative` trait, which extends `Functor` with
//! the ability to lift pure values into the container and to combine two
//! independent containers.
//!
//! # Laws
//!
//! All `Applicative` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic::typeclass::Applicative;
//!
//! // Lifting a pure value
//! let x: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(x, Some(42));
//!
//! // Combining two Option values
//! let a = Some(1);
//! let b = Some(2);
//! let sum = a.map2(b, |x, y| x + y);
//! assert_eq!(sum, Some(3));
//! ```

use super::functor::Functor;

/// A type class for functors that support lifting values and combining
/// independent computations.
///
/// `Applicative` is the "parallel both" abstraction for pure containers: two
/// independent values in a context can be combined without either depending
/// on the other's result. If either side is empty/failed (in the sense
/// appropriate to the container), the combination is too.
///
/// # Examples
///
/// ```rust
/// use monadic::typeclass::Applicative;
///
/// let function: Option<fn(i32) -> i32> = Some(|x| x + 1);
/// assert_eq!(function.apply(Some(41)), Some(42));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::typeclass::Applicative;
    ///
    /// let x: Option<i32> = <Option<()>>::pure(42);
    /// assert_eq!(x, Some(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Applies a wrapped function to a wrapped value.
    ///
    /// `self` holds the function, `value` holds the argument. If either side
    /// is empty/failed, so is the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::typeclass::Applicative;
    ///
    /// let function: Option<fn(i32) -> String> = Some(|n| n.to_string());
    /// assert_eq!(function.apply(Some(5)), Some("5".to_string()));
    /// ```
    fn apply<B, C>(self, value: Self::WithType<B>) -> Self::WithType<C>
    where
        Self::Inner: FnOnce(B) -> C,
        B: 'static,
        C: 'static;

    /// Combines two applicative values using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::typeclass::Applicative;
    ///
    /// let a = Some(1);
    /// let b = Some(2);
    /// assert_eq!(a.map2(b, |x, y| x + y), Some(3));
    ///
    /// let missing: Option<i32> = None;
    /// assert_eq!(Some(1).map2(missing, |x, y| x + y), None);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C + 'static,
        B: 'static,
        C: 'static;

    /// Combines two applicative values into a tuple.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::typeclass::Applicative;
    ///
    /// let paired = Some(1).product(Some("a"));
    /// assert_eq!(paired, Some((1, "a")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
        Self::Inner: 'static,
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn apply<B, C>(self, value: Option<B>) -> Option<C>
    where
        A: FnOnce(B) -> C,
        B: 'static,
        C: 'static,
    {
        match (self, value) {
            (Some(function), Some(inner)) => Some(function(inner)),
            _ => None,
        }
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }
}

impl<A, E> Applicative for Result<A, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    #[inline]
    fn apply<B, C>(self, value: Result<B, E>) -> Result<C, E>
    where
        A: FnOnce(B) -> C,
        B: 'static,
        C: 'static,
    {
        match (self, value) {
            (Ok(function), Ok(inner)) => Ok(function(inner)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        match (self, other) {
            (Ok(a), Ok(b)) => Ok(function(a, b)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }
}
