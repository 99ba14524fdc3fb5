#![cfg(feature = "control")]
//! Unit tests for the Container base wrapper.
//!
//! Tests cover construction, mapping, extraction, nested flattening via
//! repeated `join`, and stringification.

use monadic::control::Container;
use rstest::rstest;

// =============================================================================
// Construction and Extraction
// =============================================================================

#[rstest]
#[case(0)]
#[case(42)]
#[case(-7)]
#[case(i64::MAX)]
fn test_container_of_wraps_and_get_returns(#[case] value: i64) {
    let container = Container::of(value);
    assert_eq!(container.get(), value);
}

#[rstest]
fn test_container_new_equals_of() {
    assert_eq!(Container::new("hello"), Container::of("hello"));
}

#[rstest]
fn test_container_value_borrows_without_consuming() {
    let container = Container::of(String::from("hello"));
    assert_eq!(container.value(), "hello");
    // Still usable afterwards
    assert_eq!(container.get(), "hello");
}

// =============================================================================
// Mapping
// =============================================================================

#[rstest]
fn test_map_returns_new_container_with_result() {
    let deformed = Container::of(5).map(|n| format!("test{n}.test"));
    assert_eq!(deformed, Container::of("test5.test".to_string()));
}

#[rstest]
fn test_map_chains_left_to_right() {
    let result = Container::of(2).map(|n| n + 1).map(|n| n * 10);
    assert_eq!(result.get(), 30);
}

#[rstest]
fn test_chain_returns_raw_result() {
    let result = Container::of(2).chain(|n| Container::of(n * 2));
    assert_eq!(result, Container::of(4));
}

// =============================================================================
// Nested Flattening
// =============================================================================

#[rstest]
fn test_join_flattens_two_levels() {
    let nested = Container::of(Container::of(9));
    assert_eq!(nested.join(), Container::of(9));
}

#[rstest]
fn test_join_flattens_twenty_deep_nesting() {
    // Wrap twenty times: each map(Container::of) adds one level around the
    // innermost value.
    let nested = Container::of(7)
        .map(Container::of)
        .map(Container::of)
        .map(Container::of)
        .map(Container::of)
        .map(Container::of)
        .map(Container::of)
        .map(Container::of)
        .map(Container::of)
        .map(Container::of)
        .map(Container::of)
        .map(Container::of)
        .map(Container::of)
        .map(Container::of)
        .map(Container::of)
        .map(Container::of)
        .map(Container::of)
        .map(Container::of)
        .map(Container::of)
        .map(Container::of)
        .map(Container::of);

    // Intermediate depths are still containers of the same family; each
    // join peels exactly one layer.
    let partially_joined = nested.join();
    let flat = partially_joined
        .join()
        .join()
        .join()
        .join()
        .join()
        .join()
        .join()
        .join()
        .join()
        .join()
        .join()
        .join()
        .join()
        .join()
        .join()
        .join()
        .join()
        .join()
        .join();

    assert_eq!(flat, Container::of(7));
    assert_eq!(flat.get(), 7);
}

// =============================================================================
// Stringification
// =============================================================================

#[rstest]
fn test_display_renders_inner_value() {
    assert_eq!(Container::of(5).to_string(), "Container(5)");
    assert_eq!(
        Container::of("hello").to_string(),
        "Container(hello)"
    );
}

#[rstest]
fn test_debug_is_derived() {
    let rendered = format!("{:?}", Container::of(5));
    assert!(rendered.contains("Container"));
    assert!(rendered.contains('5'));
}
