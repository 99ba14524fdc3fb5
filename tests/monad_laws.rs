#![cfg(feature = "effect")]
//! Property-based tests for Monad laws.
//!
//! This module verifies that the pure containers satisfy the monad laws
//! through their `chain` operation:
//!
//! - **Left Identity**: `of(a).chain(f) == f(a)`
//! - **Right Identity**: `m.chain(of) == m`
//! - **Associativity**: `m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))`
//!
//! `IO` is verified by observed `run` result through its deferred bind
//! `and_then`.

use monadic::control::{Container, Either, Maybe};
use monadic::effect::IO;
use proptest::prelude::*;

// =============================================================================
// Container<T> Monad Laws
// =============================================================================

proptest! {
    /// Left Identity for Container
    #[test]
    fn prop_container_left_identity(value in any::<i32>()) {
        let function = |n: i32| Container::of(n.wrapping_mul(2));
        prop_assert_eq!(Container::of(value).chain(function), function(value));
    }

    /// Right Identity for Container
    #[test]
    fn prop_container_right_identity(value in any::<i32>()) {
        prop_assert_eq!(Container::of(value).chain(Container::of), Container::of(value));
    }

    /// Associativity for Container
    #[test]
    fn prop_container_associativity(value in any::<i32>()) {
        let function1 = |n: i32| Container::of(n.wrapping_add(1));
        let function2 = |n: i32| Container::of(n.wrapping_mul(2));

        let left = Container::of(value).chain(function1).chain(function2);
        let right = Container::of(value).chain(|x| function1(x).chain(function2));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Maybe<T> Monad Laws
// =============================================================================

proptest! {
    /// Left Identity for Maybe
    #[test]
    fn prop_maybe_left_identity(value in any::<i32>()) {
        let function = |n: i32| Maybe::from_nullable((n % 2 == 0).then_some(n));
        prop_assert_eq!(Maybe::of(value).chain(function), function(value));
    }

    /// Right Identity for Maybe, over both variants
    #[test]
    fn prop_maybe_right_identity(value in any::<Option<i32>>()) {
        let maybe = Maybe::from_nullable(value);
        prop_assert_eq!(maybe.chain(Maybe::of), Maybe::from_nullable(value));
    }

    /// Associativity for Maybe, over both variants
    #[test]
    fn prop_maybe_associativity(value in any::<Option<i32>>()) {
        let function1 = |n: i32| Maybe::from_nullable((n % 2 == 0).then_some(n.wrapping_add(1)));
        let function2 = |n: i32| Maybe::of(n.wrapping_mul(2));

        let left = Maybe::from_nullable(value).chain(function1).chain(function2);
        let right = Maybe::from_nullable(value).chain(|x| function1(x).chain(function2));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Either<L, R> Monad Laws
// =============================================================================

proptest! {
    /// Left Identity for Either
    #[test]
    fn prop_either_left_identity(value in any::<i32>()) {
        let function = |n: i32| {
            if n % 2 == 0 {
                Either::<String, i32>::right(n.wrapping_mul(2))
            } else {
                Either::left("odd".to_string())
            }
        };
        prop_assert_eq!(Either::of(value).chain(function), function(value));
    }

    /// Right Identity for Either, over both variants
    #[test]
    fn prop_either_right_identity(value in prop::result::maybe_ok(any::<i32>(), any::<String>())) {
        let either: Either<String, i32> = value.clone().into();
        prop_assert_eq!(either.chain(Either::of), value.into());
    }

    /// Associativity for Either, over both variants
    #[test]
    fn prop_either_associativity(value in prop::result::maybe_ok(any::<i32>(), any::<String>())) {
        let function1 = |n: i32| {
            if n % 2 == 0 {
                Either::<String, i32>::right(n.wrapping_add(1))
            } else {
                Either::left("odd".to_string())
            }
        };
        let function2 = |n: i32| Either::<String, i32>::right(n.wrapping_mul(2));

        let either: Either<String, i32> = value.clone().into();
        let left = either.chain(function1).chain(function2);
        let other: Either<String, i32> = value.into();
        let right = other.chain(|x| function1(x).chain(function2));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// IO<A> Monad Laws (by observed run result)
// =============================================================================

proptest! {
    /// Left Identity for IO through the deferred bind
    #[test]
    fn prop_io_left_identity(value in any::<i32>()) {
        let function = |n: i32| IO::of(n.wrapping_mul(2));
        let left = IO::of(value).and_then(function).run();
        let right = function(value).run();
        prop_assert_eq!(left, right);
    }

    /// Right Identity for IO through the deferred bind
    #[test]
    fn prop_io_right_identity(value in any::<i32>()) {
        let result = IO::of(value).and_then(IO::of).run();
        prop_assert_eq!(result, value);
    }

    /// Associativity for IO through the deferred bind
    #[test]
    fn prop_io_associativity(value in any::<i32>()) {
        let function1 = |n: i32| IO::of(n.wrapping_add(1));
        let function2 = |n: i32| IO::of(n.wrapping_mul(2));

        let left = IO::of(value).and_then(function1).and_then(function2).run();
        let right = IO::of(value).and_then(move |x| function1(x).and_then(function2)).run();

        prop_assert_eq!(left, right);
    }
}
