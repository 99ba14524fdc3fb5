//! # monadic
//!
//! Composable monadic containers for Rust: a single-value wrapper, optional
//! presence, disjoint success/failure, and deferred synchronous and
//! asynchronous effects, all sharing one `map`/`chain` composition surface.
//!
//! ## Overview
//!
//! This library lets calling code compose fallible or effectful operations
//! through a uniform interface instead of branching on missing values,
//! panics, or callback nesting. It includes:
//!
//! - **Type Classes**: Functor, Applicative, Monad, Semigroup, Monoid
//! - **Containers**: [`Container`], [`Maybe`], [`Either`]
//! - **Deferred Effects**: [`IO`] for synchronous side effects
//! - **Async Tasks**: [`Task`] with explicit settlement semantics for the
//!   parallel (`ap`) and race (`concat`) combinations
//!
//! [`Container`]: control::Container
//! [`Maybe`]: control::Maybe
//! [`Either`]: control::Either
//! [`IO`]: effect::IO
//! [`Task`]: effect::Task
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `control`: Container sum types (Container, Maybe, Either)
//! - `effect`: The IO monad
//! - `async`: The Task type (pulls in tokio and futures)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use monadic::control::Maybe;
//!
//! let shouted = Maybe::from_nullable(Some("hello"))
//!     .map(str::to_uppercase)
//!     .get_or_else(String::new());
//! assert_eq!(shouted, "HELLO");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use monadic::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;
