//! Deferred effect types.
//!
//! This module provides the two lazy members of the container family:
//!
//! - [`IO`]: a deferred synchronous side effect, executed by `run`/`try_run`
//! - [`Task`]: a deferred asynchronous computation with explicit success and
//!   failure channels, executed by `run`/`fork` (requires the `async`
//!   feature)
//!
//! Both "describe" effects without executing them: composition via
//! `map`/`and_then`/`chain` builds a new deferred computation, and nothing
//! runs until the explicit trigger at the program's edge.
//!
//! # Examples
//!
//! ```rust
//! use monadic::effect::IO;
//!
//! let io = IO::of(10)
//!     .map(|x| x * 2)
//!     .and_then(|x| IO::of(x + 1));
//!
//! // Side effects don't occur until run is called
//! assert_eq!(io.run(), 21);
//! ```

mod io;

pub use io::IO;

#[cfg(feature = "async")]
mod task;

#[cfg(feature = "async")]
pub use task::Task;
