//! Container sum types and their extraction errors.
//!
//! This module provides the pure container family:
//!
//! - [`Container`]: the base single-value wrapper
//! - [`Maybe`]: optional presence (`Just`/`Nothing`)
//! - [`Either`]: disjoint success/failure (`Right`/`Left`)
//!
//! All three satisfy the type class contract in
//! [`typeclass`](crate::typeclass): the functor and monad laws hold by held
//! value, and the empty/failure variants short-circuit composition without
//! ever raising an error. The extraction errors ([`EmptyValueError`],
//! [`UnwrapLeftError`], [`ExplicitThrowError`], [`CaughtPanic`]) appear only
//! at the explicit escape hatches.
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::{Either, Maybe};
//!
//! let config: Maybe<&str> = Maybe::from_nullable(Some("8080"));
//! let port: Either<String, u16> = config
//!     .map(|raw| raw.parse::<u16>().map_err(|error| error.to_string()))
//!     .get_or_else(Err("port missing".to_string()))
//!     .into();
//! assert_eq!(port, Either::right(8080));
//! ```

mod container;
mod either;
mod error;
mod maybe;

pub use container::Container;
pub use either::Either;
pub use error::{CaughtPanic, EmptyValueError, ExplicitThrowError, UnwrapLeftError};
pub use maybe::Maybe;
