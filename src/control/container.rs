//! Container - the base single-value wrapper.
//!
//! This module provides the `Container` type, the simplest member of the
//! container family. It wraps exactly one value and exposes the
//! `map`/`get`/`join` surface the other containers build on. It serves as:
//!
//! - The base case of the composition contract (a functor with no extra
//!   behavior)
//! - A simple model for testing type class laws

use std::fmt;

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// The base unary wrapper - a single value with a `map`/`get`/`join` surface.
///
/// `Container` wraps one value and adds no behavior of its own. Mapping
/// always produces a new `Container`; the held value is never mutated.
///
/// # Examples
///
/// ```rust
/// use monadic::control::Container;
///
/// let wrapped = Container::of(42);
/// assert_eq!(wrapped.get(), 42);
///
/// let doubled = Container::of(21).map(|n| n * 2);
/// assert_eq!(doubled.get(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Container<T>(T);

impl<T> Container<T> {
    /// Wraps a value in a new `Container`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Container;
    ///
    /// let wrapped = Container::new(42);
    /// assert_eq!(wrapped.get(), 42);
    /// ```
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Wraps a value in a new `Container`; the unit of the container family.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Container;
    ///
    /// let wrapped = Container::of("hello");
    /// assert_eq!(wrapped.get(), "hello");
    /// ```
    #[inline]
    pub const fn of(value: T) -> Self {
        Self(value)
    }

    /// Applies a function to the wrapped value, returning a new `Container`.
    ///
    /// Mapping never fails on its own; a panic raised by `function` itself
    /// propagates to the caller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Container;
    ///
    /// let shouted = Container::of("hey").map(str::to_uppercase);
    /// assert_eq!(shouted.get(), "HEY");
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Container<U>
    where
        F: FnOnce(T) -> U,
    {
        Container(function(self.0))
    }

    /// Consumes the `Container` and returns the wrapped value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Container;
    ///
    /// assert_eq!(Container::of(5).get(), 5);
    /// ```
    #[inline]
    pub fn get(self) -> T {
        self.0
    }

    /// Returns a reference to the wrapped value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Container;
    ///
    /// let wrapped = Container::of(String::from("hello"));
    /// assert_eq!(wrapped.value(), "hello");
    /// ```
    #[inline]
    pub const fn value(&self) -> &T {
        &self.0
    }

    /// Sequences a function returning another `Container`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Container;
    ///
    /// let result = Container::of(5).chain(|n| Container::of(n * 2));
    /// assert_eq!(result.get(), 10);
    /// ```
    #[inline]
    pub fn chain<U, F>(self, function: F) -> Container<U>
    where
        F: FnOnce(T) -> Container<U>,
    {
        function(self.0)
    }
}

impl<T> Container<Container<T>> {
    /// Removes one level of nesting.
    ///
    /// Repeated application flattens a tower of nested containers down to
    /// the innermost one; each call peels exactly one layer, in the manner
    /// of `Option::flatten`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Container;
    ///
    /// let nested = Container::of(Container::of(42));
    /// assert_eq!(nested.join(), Container::of(42));
    ///
    /// let deeper = Container::of(Container::of(Container::of(1)));
    /// assert_eq!(deeper.join().join(), Container::of(1));
    /// ```
    #[inline]
    pub fn join(self) -> Container<T> {
        self.0
    }
}

impl<T: fmt::Display> fmt::Display for Container<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Container({})", self.0)
    }
}

impl<T> From<T> for Container<T> {
    fn from(value: T) -> Self {
        Self::of(value)
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Container<T> {
    type Inner = T;
    type WithType<B> = Container<B>;
}

impl<T> Functor for Container<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Container<B>
    where
        F: FnOnce(T) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }
}

impl<T> Applicative for Container<T> {
    #[inline]
    fn pure<B>(value: B) -> Container<B> {
        Container::of(value)
    }

    #[inline]
    fn apply<B, C>(self, value: Container<B>) -> Container<C>
    where
        T: FnOnce(B) -> C,
        B: 'static,
        C: 'static,
    {
        Container((self.0)(value.0))
    }

    #[inline]
    fn map2<B, C, F>(self, other: Container<B>, function: F) -> Container<C>
    where
        F: FnOnce(T, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        Container(function(self.0, other.0))
    }
}

impl<T> Monad for Container<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Container<B>
    where
        F: FnOnce(T) -> Container<B> + 'static,
        B: 'static,
    {
        self.chain(function)
    }
}
