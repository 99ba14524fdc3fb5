#![cfg(feature = "effect")]
//! Unit tests for the IO monad.
//!
//! Tests cover lazy construction, deferred `map`/`and_then` composition,
//! the intentionally eager `chain`, and panic capture via `try_run`.

use monadic::effect::IO;
use rstest::rstest;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

// =============================================================================
// Construction and Execution
// =============================================================================

#[rstest]
fn test_io_of_wraps_pure_value() {
    assert_eq!(IO::of(42).run(), 42);
}

#[rstest]
fn test_io_new_defers_effect() {
    let io = IO::new(|| 10 + 20);
    assert_eq!(io.run(), 30);
}

#[rstest]
fn test_io_from_is_new() {
    assert_eq!(IO::from(|| "effect").run(), "effect");
}

// =============================================================================
// Deferral
// =============================================================================

#[rstest]
fn test_effect_does_not_run_at_construction() {
    let counter = Arc::new(AtomicUsize::new(0));
    let counter_clone = counter.clone();

    let io = IO::new(move || {
        counter_clone.fetch_add(1, Ordering::SeqCst);
        42
    });

    assert_eq!(counter.load(Ordering::SeqCst), 0);
    assert_eq!(io.run(), 42);
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[rstest]
fn test_map_composition_does_not_run_effect() {
    let counter = Arc::new(AtomicUsize::new(0));
    let counter_clone = counter.clone();

    let composed = IO::new(move || {
        counter_clone.fetch_add(1, Ordering::SeqCst);
        21
    })
    .map(|n| n * 2)
    .map(|n| n.to_string());

    // Nothing has executed yet
    assert_eq!(counter.load(Ordering::SeqCst), 0);
    assert_eq!(composed.run(), "42");
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[rstest]
fn test_and_then_composition_does_not_run_effect() {
    let counter = Arc::new(AtomicUsize::new(0));
    let counter_clone = counter.clone();

    let composed = IO::new(move || {
        counter_clone.fetch_add(1, Ordering::SeqCst);
        10
    })
    .and_then(|n| IO::of(n + 5));

    assert_eq!(counter.load(Ordering::SeqCst), 0);
    assert_eq!(composed.run(), 15);
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[rstest]
fn test_chain_is_eager_by_design() {
    let counter = Arc::new(AtomicUsize::new(0));
    let counter_clone = counter.clone();

    let chained = IO::new(move || {
        counter_clone.fetch_add(1, Ordering::SeqCst);
        10
    })
    .chain(|n| IO::of(n * 2));

    // chain triggered the effect chain built so far
    assert_eq!(counter.load(Ordering::SeqCst), 1);
    assert_eq!(chained.run(), 20);
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[rstest]
fn test_effect_runs_once_per_trigger() {
    let counter = Arc::new(AtomicUsize::new(0));
    let counter_clone = counter.clone();

    let io = IO::new(move || counter_clone.fetch_add(1, Ordering::SeqCst));
    io.run();
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

// =============================================================================
// Combination
// =============================================================================

#[rstest]
fn test_then_discards_first_result() {
    assert_eq!(IO::of(10).then(IO::of(20)).run(), 20);
}

#[rstest]
fn test_map2_combines_results() {
    assert_eq!(IO::of(10).map2(IO::of(20), |a, b| a + b).run(), 30);
}

#[rstest]
fn test_product_pairs_results() {
    assert_eq!(IO::of(10).product(IO::of("x")).run(), (10, "x"));
}

// =============================================================================
// Panic Capture
// =============================================================================

#[rstest]
fn test_try_run_returns_right_on_success() {
    let outcome = IO::of(42).try_run();
    assert!(outcome.is_right());
    assert_eq!(outcome.try_get(), Ok(42));
}

#[rstest]
fn test_try_run_captures_panic_message() {
    let outcome = IO::new(|| -> i32 { panic!("effect exploded") }).try_run();
    assert!(outcome.is_left());
    assert_eq!(outcome.unwrap_err().message(), "effect exploded");
}

#[rstest]
fn test_try_run_captures_panic_from_mapped_stage() {
    let outcome = IO::of(1).map(|_| -> i32 { panic!("late stage") }).try_run();
    assert_eq!(outcome.unwrap_err().message(), "late stage");
}
