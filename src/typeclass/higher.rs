//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! This module provides the foundation for emulating Higher-Kinded Types (HKT)
//! in Rust using Generic Associated Types (GAT). This is essential for defining
//! type class traits like Functor, Applicative, and Monad.
//!
//! # Background
//!
//! Rust does not natively support Higher-Kinded Types. For example, we cannot
//! write a trait that abstracts over `Option<_>` and `Maybe<_>` as type
//! constructors. This module uses GAT to work around this limitation.
//!
//! # Example
//!
//! ```rust
//! use monadic::typeclass::TypeConstructor;
//!
//! // Option implements TypeConstructor
//! fn transform_type<T: TypeConstructor>(value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let some_int: Option<i32> = Some(42);
//! let none_string: Option<String> = transform_type(some_int);
//! assert_eq!(none_string, None);
//! ```

/// A trait representing a type constructor.
///
/// This trait emulates Higher-Kinded Types (HKT) using Generic Associated Types.
/// It allows abstracting over type constructors like `Option<_>`,
/// `Result<_, E>`, `Maybe<_>`, `Either<L, _>`, etc.
///
/// # Type Parameters
///
/// The implementing type should be a type constructor applied to some type `A`,
/// for example `Option<A>` or `Maybe<A>`.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// For any `F: TypeConstructor`:
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` should be
///    equivalent to `F` (up to type equality).
///
/// # Example
///
/// ```rust
/// use monadic::typeclass::TypeConstructor;
///
/// // Option<i32> implements TypeConstructor
/// fn example<T: TypeConstructor<Inner = i32>>() {
///     // T::WithType<String> would be the same constructor with String
/// }
///
/// example::<Option<i32>>();
/// ```
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Option<i32>`, this would be `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For example, for `Option<i32>`, `WithType<String>` would be `Option<String>`.
    ///
    /// The constraint `TypeConstructor<Inner = B>` ensures that the resulting
    /// type is also a valid type constructor, maintaining the ability to
    /// chain transformations.
    type WithType<B>: TypeConstructor<Inner = B>;
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Type-level tests (compile-time verification)
    // =========================================================================

    /// Verifies that Option<i32> has the correct Inner type.
    #[test]
    fn option_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Option<i32>>();
    }

    /// Verifies that Option's WithType produces the correct type.
    #[test]
    fn option_with_type_produces_correct_type() {
        fn transform<T: TypeConstructor>(_value: T) -> T::WithType<String>
        where
            T::WithType<String>: Default,
        {
            Default::default()
        }

        let result: Option<String> = transform(Some(42));
        assert_eq!(result, None);
    }

    /// Verifies that Result's WithType preserves the error type.
    #[test]
    fn result_with_type_preserves_error_type() {
        fn assert_result_with_type<T, E, B>()
        where
            Result<T, E>: TypeConstructor<Inner = T, WithType<B> = Result<B, E>>,
        {
        }

        assert_result_with_type::<i32, String, bool>();
        assert_result_with_type::<String, (), i32>();
    }

    /// Tests chaining WithType transformations.
    #[test]
    fn chained_with_type_transformations() {
        type Step1 = <Option<i32> as TypeConstructor>::WithType<String>;
        type Step2 = <Step1 as TypeConstructor>::WithType<bool>;

        fn assert_is_option_bool<T: TypeConstructor<Inner = bool>>() {}
        assert_is_option_bool::<Step2>();
    }
}
