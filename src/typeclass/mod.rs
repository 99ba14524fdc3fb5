//! Type class traits for functional programming abstractions.
//!
//! This module provides the fundamental type classes (traits) that form
//! the shared contract every container in this crate satisfies:
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Applying functions within containers
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This library uses Generic Associated Types (GAT) to emulate HKT
//! behavior, allowing us to define traits like Functor and Monad
//! in a generic way; see [`TypeConstructor`].
//!
//! The by-value GAT traits are implemented by the pure containers
//! ([`Container`](crate::control::Container), [`Maybe`](crate::control::Maybe),
//! [`Either`](crate::control::Either)) plus `Option`/`Result` for interop.
//! The deferred effect types (`IO`, `Task`) consume `FnOnce` state and carry
//! the same operations as inherent methods instead; their laws are stated in
//! their docs and verified behaviorally in tests.
//!
//! # Examples
//!
//! ```rust
//! use monadic::typeclass::{Functor, Monad};
//!
//! let result = Some(5)
//!     .fmap(|n| n + 1)
//!     .flat_map(|n| if n > 3 { Some(n) } else { None });
//! assert_eq!(result, Some(6));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
