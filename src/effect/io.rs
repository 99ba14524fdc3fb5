//! IO - deferred synchronous side effects.
//!
//! The `IO` type wraps a zero-argument effect that may perform side effects.
//! Composition builds a new deferred effect without executing anything;
//! execution happens only via [`run`](IO::run) or [`try_run`](IO::try_run),
//! which should be called at the program's "edge" (e.g., in the `main`
//! function).
//!
//! # Examples
//!
//! ```rust
//! use monadic::effect::IO;
//!
//! // Create a pure IO action
//! let io = IO::of(42);
//! assert_eq!(io.run(), 42);
//!
//! // Compose deferred effects
//! let io = IO::of(10).map(|x| x * 2).and_then(|x| IO::of(x + 1));
//! assert_eq!(io.run(), 21);
//! ```
//!
//! # Side Effect Deferral
//!
//! ```rust
//! use monadic::effect::IO;
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//!
//! let executed = Arc::new(AtomicBool::new(false));
//! let executed_clone = executed.clone();
//!
//! let io = IO::new(move || {
//!     executed_clone.store(true, Ordering::SeqCst);
//!     42
//! });
//!
//! // Not executed yet
//! assert!(!executed.load(Ordering::SeqCst));
//!
//! // Execute the IO action
//! let result = io.run();
//! assert!(executed.load(Ordering::SeqCst));
//! assert_eq!(result, 42);
//! ```

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

use crate::control::{CaughtPanic, Either};

/// A monad representing a deferred synchronous side effect.
///
/// `IO<A>` wraps a computation that produces a value of type `A` and may
/// perform side effects. The computation is not executed until [`run`](IO::run)
/// or [`try_run`](IO::try_run) is called; each composed effect then runs
/// exactly once per trigger.
///
/// # Type Parameters
///
/// - `A`: The type of the value produced by the IO action.
///
/// # Monad Laws
///
/// `IO` satisfies the monad laws through its deferred bind
/// [`and_then`](IO::and_then):
///
/// 1. **Left Identity**: `IO::of(a).and_then(f) == f(a)`
/// 2. **Right Identity**: `m.and_then(IO::of) == m`
/// 3. **Associativity**: `m.and_then(f).and_then(g) == m.and_then(|x| f(x).and_then(g))`
///
/// (Equality by observed `run` result; `IO` consumes `FnOnce` state and
/// cannot implement the by-value type class traits.)
pub struct IO<A> {
    /// The wrapped effect producing a value of type `A`.
    effect: Box<dyn FnOnce() -> A>,
}

impl<A: 'static> IO<A> {
    /// Creates a new IO action from a closure.
    ///
    /// The closure will not be executed until `run` or `try_run` is called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::IO;
    ///
    /// let io = IO::new(|| {
    ///     println!("Side effect!");
    ///     42
    /// });
    /// // Nothing is printed yet
    /// let result = io.run();
    /// // Now "Side effect!" is printed
    /// assert_eq!(result, 42);
    /// ```
    pub fn new<F>(effect: F) -> Self
    where
        F: FnOnce() -> A + 'static,
    {
        Self {
            effect: Box::new(effect),
        }
    }

    /// Wraps a pure value in an IO action.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::IO;
    ///
    /// let io = IO::of(42);
    /// assert_eq!(io.run(), 42);
    /// ```
    pub fn of(value: A) -> Self {
        Self::new(move || value)
    }

    /// Creates a new IO action from a closure; alias of [`new`](Self::new).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::IO;
    ///
    /// let io = IO::from(|| 10 + 20);
    /// assert_eq!(io.run(), 30);
    /// ```
    pub fn from<F>(effect: F) -> Self
    where
        F: FnOnce() -> A + 'static,
    {
        Self::new(effect)
    }

    /// Executes the composed effect chain and returns the result.
    ///
    /// A panic raised by the underlying effect propagates uncaught; use
    /// [`try_run`](Self::try_run) to capture it instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::IO;
    ///
    /// let io = IO::of(42);
    /// assert_eq!(io.run(), 42);
    /// ```
    pub fn run(self) -> A {
        (self.effect)()
    }

    /// Executes the composed effect chain, capturing a panic as a `Left`.
    ///
    /// Returns `Right(result)` on success or `Left(CaughtPanic)` if the
    /// effect panicked; a panic never escapes this method.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::IO;
    ///
    /// let success = IO::of(42).try_run();
    /// assert_eq!(success.try_get(), Ok(42));
    ///
    /// let failure = IO::new(|| -> i32 { panic!("boom") }).try_run();
    /// assert_eq!(failure.unwrap_err().message(), "boom");
    /// ```
    pub fn try_run(self) -> Either<CaughtPanic, A> {
        match catch_unwind(AssertUnwindSafe(self.effect)) {
            Ok(value) => Either::Right(value),
            Err(payload) => Either::Left(CaughtPanic::from_payload(payload)),
        }
    }

    /// Transforms the result of an IO action using a function.
    ///
    /// The returned IO runs self's effect, then applies `function`; building
    /// it executes nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::IO;
    ///
    /// let io = IO::of(21).map(|x| x * 2);
    /// assert_eq!(io.run(), 42);
    /// ```
    pub fn map<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        IO::new(move || {
            let a = self.run();
            function(a)
        })
    }

    /// Executes the current effect immediately and applies `function` to the
    /// result.
    ///
    /// Unlike every other composition method, `chain` is EAGER: calling it
    /// triggers execution of the effect chain built so far, and the returned
    /// IO is whatever `function` produced. This asymmetry with [`map`](Self::map)
    /// is intentional; use [`and_then`](Self::and_then) for the deferred,
    /// lawful bind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::IO;
    ///
    /// let io = IO::of(10).chain(|x| IO::of(x * 2));
    /// assert_eq!(io.run(), 20);
    /// ```
    pub fn chain<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> IO<B> + 'static,
        B: 'static,
    {
        function(self.run())
    }

    /// Chains IO actions, passing the result of the first to a function
    /// that produces the second. Deferred, unlike [`chain`](Self::chain).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::IO;
    ///
    /// let io = IO::of(10).and_then(|x| IO::of(x + 5));
    /// assert_eq!(io.run(), 15);
    /// ```
    pub fn and_then<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> IO<B> + 'static,
        B: 'static,
    {
        IO::new(move || {
            let a = self.run();
            let io_b = function(a);
            io_b.run()
        })
    }

    /// Sequences two IO actions, discarding the result of the first.
    ///
    /// The first action is still executed for its side effects.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::IO;
    ///
    /// let io = IO::of(10).then(IO::of(20));
    /// assert_eq!(io.run(), 20);
    /// ```
    pub fn then<B>(self, next: IO<B>) -> IO<B>
    where
        B: 'static,
    {
        self.and_then(move |_| next)
    }

    /// Combines two IO actions using a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::IO;
    ///
    /// let io = IO::of(10).map2(IO::of(20), |a, b| a + b);
    /// assert_eq!(io.run(), 30);
    /// ```
    pub fn map2<B, C, F>(self, other: IO<B>, function: F) -> IO<C>
    where
        F: FnOnce(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        self.and_then(move |a| other.map(move |b| function(a, b)))
    }

    /// Combines two IO actions into a tuple.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::IO;
    ///
    /// let io = IO::of(10).product(IO::of("hello"));
    /// assert_eq!(io.run(), (10, "hello"));
    /// ```
    pub fn product<B>(self, other: IO<B>) -> IO<(A, B)>
    where
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }
}

// =============================================================================
// Convenience Constructors
// =============================================================================

impl IO<()> {
    /// Creates an IO action that prints a line to standard output.
    ///
    /// The output is not printed until `run` is called.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use monadic::effect::IO;
    ///
    /// let io = IO::print_line("Hello, World!");
    /// io.run(); // Prints "Hello, World!"
    /// ```
    pub fn print_line<S: std::fmt::Display + 'static>(message: S) -> Self {
        IO::new(move || {
            println!("{message}");
        })
    }

    /// Creates an IO action that waits for a specified duration.
    ///
    /// The delay does not occur until `run` is called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::IO;
    /// use std::time::Duration;
    ///
    /// let io = IO::delay(Duration::from_millis(10));
    /// io.run(); // Waits for 10ms
    /// ```
    pub fn delay(duration: Duration) -> Self {
        IO::new(move || {
            std::thread::sleep(duration);
        })
    }
}
