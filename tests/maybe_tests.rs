#![cfg(feature = "control")]
//! Unit tests for the Maybe sum type.
//!
//! Tests cover the `from_nullable` boundary, short-circuiting on `Nothing`
//! (verified with call-count spies), filtering, extraction, and the
//! panicking escape hatch.

use monadic::control::{EmptyValueError, Maybe};
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_just_always_holds_its_payload() {
    // Falsy-looking payloads are still payloads.
    assert!(Maybe::just(0).is_just());
    assert!(Maybe::just(false).is_just());
    assert!(Maybe::just("").is_just());
    assert!(Maybe::just(Option::<i32>::None).is_just());
}

#[rstest]
fn test_from_nullable_absent_marker_is_nothing() {
    assert!(Maybe::<i32>::from_nullable(None).is_nothing());
}

#[rstest]
fn test_from_nullable_keeps_present_values_unchanged() {
    assert_eq!(Maybe::from_nullable(Some(0)), Maybe::just(0));
    assert_eq!(Maybe::from_nullable(Some(false)), Maybe::just(false));
    assert_eq!(Maybe::from_nullable(Some("")), Maybe::just(""));
    assert_eq!(Maybe::from_nullable(Some(42)), Maybe::just(42));
}

#[rstest]
fn test_variant_flags_are_exclusive() {
    let present = Maybe::just(1);
    assert!(present.is_just() && !present.is_nothing());

    let absent: Maybe<i32> = Maybe::nothing();
    assert!(absent.is_nothing() && !absent.is_just());
}

// =============================================================================
// Short-Circuiting
// =============================================================================

#[rstest]
fn test_nothing_map_never_invokes_function() {
    let calls = Cell::new(0);
    let result = Maybe::<i32>::nothing().map(|n| {
        calls.set(calls.get() + 1);
        n * 2
    });
    assert!(result.is_nothing());
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn test_just_map_invokes_even_on_empty_looking_payload() {
    let calls = Cell::new(0);
    let result = Maybe::just(Option::<i32>::None).map(|payload| {
        calls.set(calls.get() + 1);
        payload.is_none()
    });
    assert_eq!(result, Maybe::just(true));
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn test_nothing_chain_short_circuits() {
    let calls = Cell::new(0);
    let result = Maybe::<i32>::nothing().chain(|n| {
        calls.set(calls.get() + 1);
        Maybe::just(n * 2)
    });
    assert!(result.is_nothing());
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn test_map_pipeline_never_panics_on_absence() {
    let result = Maybe::<i32>::from_nullable(None)
        .map(|n| n + 1)
        .chain(|n| Maybe::just(n * 2))
        .filter(|n| *n > 0)
        .get_or_else(-1);
    assert_eq!(result, -1);
}

// =============================================================================
// Chaining
// =============================================================================

#[rstest]
fn test_chain_returns_raw_result_without_rewrapping() {
    let parse = |raw: &str| Maybe::from_nullable(raw.parse::<i32>().ok());
    assert_eq!(Maybe::just("42").chain(parse), Maybe::just(42));
    assert_eq!(Maybe::just("nope").chain(parse), Maybe::nothing());
}

// =============================================================================
// Filtering
// =============================================================================

#[rstest]
fn test_filter_keeps_passing_payload() {
    assert_eq!(Maybe::just(5).filter(|n| *n > 3), Maybe::just(5));
}

#[rstest]
fn test_filter_drops_failing_payload() {
    assert!(Maybe::just(5).filter(|n| *n > 10).is_nothing());
}

#[rstest]
fn test_filter_never_invokes_predicate_on_nothing() {
    let calls = Cell::new(0);
    let result = Maybe::<i32>::nothing().filter(|_| {
        calls.set(calls.get() + 1);
        true
    });
    assert!(result.is_nothing());
    assert_eq!(calls.get(), 0);
}

// =============================================================================
// Extraction
// =============================================================================

#[rstest]
fn test_just_get_returns_payload() {
    assert_eq!(Maybe::just(5).get(), 5);
}

#[rstest]
#[should_panic(expected = "cannot extract the value of a Nothing")]
fn test_nothing_get_panics() {
    let _ = Maybe::<i32>::nothing().get();
}

#[rstest]
fn test_try_get_reports_absence_as_error() {
    assert_eq!(Maybe::just(5).try_get(), Ok(5));
    assert_eq!(Maybe::<i32>::nothing().try_get(), Err(EmptyValueError));
}

#[rstest]
fn test_get_or_else_ignores_default_on_just() {
    assert_eq!(Maybe::just(5).get_or_else(99), 5);
}

#[rstest]
fn test_get_or_else_uses_default_on_nothing() {
    assert_eq!(Maybe::nothing().get_or_else(99), 99);
}

#[rstest]
fn test_or_else_keeps_just_and_recovers_nothing() {
    assert_eq!(Maybe::just(5).or_else(|| Maybe::just(1)), Maybe::just(5));
    assert_eq!(Maybe::nothing().or_else(|| Maybe::just(1)), Maybe::just(1));
}

// =============================================================================
// Conversions and Display
// =============================================================================

#[rstest]
fn test_option_roundtrip() {
    let through: Maybe<i32> = Some(3).into();
    assert_eq!(through.to_option(), Some(3));

    let absent: Maybe<i32> = None.into();
    assert_eq!(absent.to_option(), None);
}

#[rstest]
fn test_display_renders_variant() {
    assert_eq!(Maybe::just(5).to_string(), "Just(5)");
    assert_eq!(Maybe::<i32>::nothing().to_string(), "Nothing");
}
