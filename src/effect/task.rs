//! Task - deferred asynchronous computations with explicit settlement.
//!
//! The `Task` type wraps a lazy asynchronous computation with disjoint
//! success and failure channels. Composition (`map`, `chain`, `bimap`,
//! `fold`, `swap`, `or_else`) builds new deferred computations without
//! executing anything; execution happens only when a consumer triggers the
//! final composed Task, either by awaiting [`run`](Task::run) or by
//! [`fork`](Task::fork)ing it with a pair of continuations.
//!
//! # Settlement model
//!
//! A Task settles when its underlying computation finally produces an
//! outcome on one of the two channels. The two-Task combinators make
//! settlement explicit:
//!
//! - [`ap`](Task::ap) runs both Tasks concurrently and requires both to
//!   succeed; the first rejection wins and is delivered exactly once.
//! - [`concat`](Task::concat) races both Tasks; the first settlement wins,
//!   success or failure, and the loser's outcome is discarded.
//!
//! Exactly-once delivery is enforced by an exclusive settlement guard (a
//! one-shot sender taken under a lock), not by assumptions about a
//! single-threaded executor. Both branches are issued in a fixed order
//! (`self`, then the argument), but settlement order is a consumer-visible
//! race decided by the branches' own asynchronous work.
//!
//! # Cancellation and cleanup
//!
//! There is no integrated cancellation API. `fork` and the two-Task
//! combinators return or capture [`AbortHandle`] tokens; cancellation is
//! caller-managed by aborting a token, or by never triggering the Task at
//! all (a Task that is never forked never executes). A cleanup callback
//! registered with [`on_cleanup`](Task::on_cleanup) accompanies the fork: it
//! receives the fork's token after settlement, posted to the executor as a
//! separate turn rather than run inside the settling callback. Tasks
//! executed inline by `chain`/`or_else` contribute no separate fork and thus
//! no separate token.
//!
//! # Examples
//!
//! ```rust,ignore
//! use monadic::effect::Task;
//!
//! #[tokio::main]
//! async fn main() {
//!     let task: Task<String, i32> = Task::of(21).map(|n| n * 2);
//!     let outcome = task.run().await;
//!     assert_eq!(outcome.try_get(), Ok(42));
//! }
//! ```

use std::convert::Infallible;
use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::sync::Arc;

use parking_lot::Mutex;
use static_assertions::assert_impl_all;
use tokio::sync::oneshot;
use tokio::task::{AbortHandle, JoinHandle};

use crate::control::Either;
use crate::typeclass::{Monoid, Semigroup};

/// A boxed future, the executable form of a forked Task.
type BoxFuture<A> = Pin<Box<dyn Future<Output = A> + Send>>;

/// The deferred fork: a thunk producing the settlement future.
type Fork<E, A> = Box<dyn FnOnce() -> BoxFuture<Either<E, A>> + Send>;

/// The cleanup callback, invoked with the fork's cancellation token after
/// settlement.
type Cleanup = Box<dyn FnOnce(AbortHandle) + Send>;

/// A deferred asynchronous computation with explicit success and failure
/// channels.
///
/// `Task<E, A>` either rejects with an `E` or resolves with an `A`, exactly
/// once per execution. Construction and composition never execute anything;
/// only [`run`](Task::run) / [`fork`](Task::fork) (or awaiting the Task
/// directly) trigger the composed computation. Each Task represents exactly
/// one eventual outcome, not a stream of values.
///
/// # Type Parameters
///
/// - `E`: The type carried by the rejected channel.
/// - `A`: The type carried by the resolved channel.
///
/// # Examples
///
/// ```rust,ignore
/// use monadic::effect::Task;
/// use std::time::Duration;
///
/// let eventually: Task<String, i32> = Task::new(|| async {
///     tokio::time::sleep(Duration::from_millis(10)).await;
///     Ok(42).into()
/// });
/// assert_eq!(eventually.run().await.try_get(), Ok(42));
/// ```
pub struct Task<E, A> {
    fork: Fork<E, A>,
    cleanup: Option<Cleanup>,
}

assert_impl_all!(Task<String, i32>: Send);

impl<E, A> Task<E, A>
where
    E: Send + 'static,
    A: Send + 'static,
{
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Creates a Task from an async closure producing the settlement.
    ///
    /// The closure will not be invoked, and the future not polled, until the
    /// Task is triggered.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use monadic::control::Either;
    /// use monadic::effect::Task;
    ///
    /// let task: Task<String, i32> = Task::new(|| async { Either::Right(42) });
    /// ```
    pub fn new<F, Fut>(fork: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Either<E, A>> + Send + 'static,
    {
        Self {
            fork: Box::new(move || Box::pin(fork())),
            cleanup: None,
        }
    }

    /// Creates a Task from an existing future of a settlement.
    ///
    /// The future should not have been polled yet.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use monadic::control::Either;
    /// use monadic::effect::Task;
    ///
    /// let task: Task<String, i32> = Task::from_future(async { Either::Right(1) });
    /// ```
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Either<E, A>> + Send + 'static,
    {
        Self::new(move || future)
    }

    /// Creates a Task that resolves immediately with the given value.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let task: Task<String, i32> = Task::of(42);
    /// assert_eq!(task.run().await.try_get(), Ok(42));
    /// ```
    pub fn of(value: A) -> Self {
        Self::new(move || async move { Either::Right(value) })
    }

    /// Creates a Task that rejects immediately with the given error.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let task: Task<String, i32> = Task::rejected("nope".to_string());
    /// assert!(task.run().await.is_left());
    /// ```
    pub fn rejected(error: E) -> Self {
        Self::new(move || async move { Either::Left(error) })
    }

    /// Returns an inert Task whose fork never settles.
    ///
    /// This is a placeholder, not a lawful identity for
    /// [`concat`](Self::concat): a true race identity would lose to any
    /// settling Task, whereas `empty` simply never delivers an outcome. The
    /// behavior is preserved deliberately.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use monadic::effect::Task;
    /// use std::time::Duration;
    ///
    /// let stuck: Task<String, i32> = Task::empty();
    /// let timed_out = tokio::time::timeout(Duration::from_millis(10), stuck.run()).await;
    /// assert!(timed_out.is_err());
    /// ```
    #[must_use]
    pub fn empty() -> Self {
        Self::new(|| futures::future::pending())
    }

    /// Registers a cleanup callback to accompany this Task's fork.
    ///
    /// The callback receives the fork's cancellation token after the Task
    /// settles, posted to the executor as a separate turn. A Task that is
    /// never forked never runs its cleanup.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let task: Task<String, i32> = Task::of(1).on_cleanup(|token| drop(token));
    /// ```
    #[must_use]
    pub fn on_cleanup<F>(self, cleanup: F) -> Self
    where
        F: FnOnce(AbortHandle) + Send + 'static,
    {
        Self {
            fork: self.fork,
            cleanup: Some(Box::new(cleanup)),
        }
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Transforms the resolved value; rejections pass through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let task: Task<String, i32> = Task::of(21).map(|n| n * 2);
    /// assert_eq!(task.run().await.try_get(), Ok(42));
    /// ```
    pub fn map<B, F>(self, function: F) -> Task<E, B>
    where
        F: FnOnce(A) -> B + Send + 'static,
        B: Send + 'static,
    {
        let Self { fork, cleanup } = self;
        Task {
            fork: Box::new(move || Box::pin(async move { fork().await.map(function) })),
            cleanup,
        }
    }

    /// Sequences a Task-returning function on the resolved channel.
    ///
    /// On resolution, `function` produces the continuation Task, which is
    /// executed inline into the consumer's outcome; rejections pass through
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let task: Task<String, i32> = Task::of(20).chain(|n| Task::of(n + 1));
    /// assert_eq!(task.run().await.try_get(), Ok(21));
    /// ```
    pub fn chain<B, F>(self, function: F) -> Task<E, B>
    where
        F: FnOnce(A) -> Task<E, B> + Send + 'static,
        B: Send + 'static,
    {
        let Self { fork, cleanup } = self;
        Task {
            fork: Box::new(move || {
                Box::pin(async move {
                    match fork().await {
                        Either::Left(error) => Either::Left(error),
                        Either::Right(value) => function(value).run().await,
                    }
                })
            }),
            cleanup,
        }
    }

    /// Transforms both channels at once.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let task: Task<usize, i32> = Task::rejected("boom".to_string())
    ///     .bimap(|e: String| e.len(), |n: i32| n * 2);
    /// assert_eq!(task.run().await, Either::Left(4));
    /// ```
    pub fn bimap<E2, B, F, G>(self, rejected_function: F, resolved_function: G) -> Task<E2, B>
    where
        F: FnOnce(E) -> E2 + Send + 'static,
        G: FnOnce(A) -> B + Send + 'static,
        E2: Send + 'static,
        B: Send + 'static,
    {
        let Self { fork, cleanup } = self;
        Task {
            fork: Box::new(move || {
                Box::pin(async move { fork().await.bimap(rejected_function, resolved_function) })
            }),
            cleanup,
        }
    }

    /// Transforms only the rejected value, leaving the success path
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let task: Task<usize, i32> =
    ///     Task::rejected("boom".to_string()).map_rejected(|e| e.len());
    /// ```
    pub fn map_rejected<E2, F>(self, function: F) -> Task<E2, A>
    where
        F: FnOnce(E) -> E2 + Send + 'static,
        E2: Send + 'static,
    {
        let Self { fork, cleanup } = self;
        Task {
            fork: Box::new(move || Box::pin(async move { fork().await.map_left(function) })),
            cleanup,
        }
    }

    /// Eliminates the failure channel: both outcomes converge to resolution.
    ///
    /// `rejected_function` turns a rejection into a resolved value;
    /// `resolved_function` transforms a success. The resulting Task can no
    /// longer reject, which the `Infallible` channel records in the type.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let task = Task::<String, i32>::rejected("boom".to_string())
    ///     .fold(|e| e.len(), |n| n as usize);
    /// assert_eq!(task.run().await.try_get(), Ok(4));
    /// ```
    pub fn fold<B, F, G>(self, rejected_function: F, resolved_function: G) -> Task<Infallible, B>
    where
        F: FnOnce(E) -> B + Send + 'static,
        G: FnOnce(A) -> B + Send + 'static,
        B: Send + 'static,
    {
        let Self { fork, cleanup } = self;
        Task {
            fork: Box::new(move || {
                Box::pin(async move {
                    Either::Right(fork().await.fold(rejected_function, resolved_function))
                })
            }),
            cleanup,
        }
    }

    /// Exchanges the two channels: a success becomes a rejection and vice
    /// versa, values unchanged.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let task: Task<i32, String> = Task::<String, i32>::of(42).swap();
    /// assert!(task.run().await.is_left());
    /// ```
    pub fn swap(self) -> Task<A, E> {
        let Self { fork, cleanup } = self;
        Task {
            fork: Box::new(move || Box::pin(async move { fork().await.swap() })),
            cleanup,
        }
    }

    /// Recovers from a rejection with a Task-returning function.
    ///
    /// On rejection, `function` produces the recovery Task, which is
    /// executed inline into the consumer's outcome; resolutions pass
    /// through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let task: Task<String, i32> =
    ///     Task::rejected("boom".to_string()).or_else(|_| Task::of(0));
    /// assert_eq!(task.run().await.try_get(), Ok(0));
    /// ```
    pub fn or_else<E2, F>(self, function: F) -> Task<E2, A>
    where
        F: FnOnce(E) -> Task<E2, A> + Send + 'static,
        E2: Send + 'static,
    {
        let Self { fork, cleanup } = self;
        Task {
            fork: Box::new(move || {
                Box::pin(async move {
                    match fork().await {
                        Either::Left(error) => function(error).run().await,
                        Either::Right(value) => Either::Right(value),
                    }
                })
            }),
            cleanup,
        }
    }

    // =========================================================================
    // Execution
    // =========================================================================

    /// Executes the composed Task and awaits its settlement.
    ///
    /// This is the direct trigger: the whole composed chain runs and the
    /// outcome arrives as an [`Either`]. Awaiting the Task itself (via
    /// `IntoFuture`) is equivalent.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let outcome = Task::<String, i32>::of(42).run().await;
    /// assert_eq!(outcome.try_get(), Ok(42));
    /// ```
    pub async fn run(self) -> Either<E, A> {
        (self.fork)().await
    }

    /// Executes the Task on the current executor, delivering the outcome to
    /// exactly one of the two continuations.
    ///
    /// Returns the spawned fork's [`JoinHandle`]; its abort handle is the
    /// cancellation token for this fork. Any cleanup registered with
    /// [`on_cleanup`](Self::on_cleanup) is posted to the executor with that
    /// token after settlement.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let task: Task<String, i32> = Task::of(42);
    /// task.fork(
    ///     |error| eprintln!("rejected: {error}"),
    ///     |value| println!("resolved: {value}"),
    /// );
    /// ```
    pub fn fork<R, S>(self, on_rejected: R, on_resolved: S) -> JoinHandle<()>
    where
        R: FnOnce(E) + Send + 'static,
        S: FnOnce(A) + Send + 'static,
    {
        let Self { fork, cleanup } = self;
        let (token_sender, token_receiver) = oneshot::channel();
        let handle = tokio::spawn(async move {
            match fork().await {
                Either::Left(error) => on_rejected(error),
                Either::Right(value) => on_resolved(value),
            }
            if let Some(cleanup) = cleanup {
                // Settled; post the cleanup with this fork's token instead
                // of running it in the settling turn.
                if let Ok(token) = token_receiver.await {
                    tokio::spawn(async move { cleanup(token) });
                }
            }
        });
        let _ = token_sender.send(handle.abort_handle());
        handle
    }

    // =========================================================================
    // Two-Task Combination
    // =========================================================================

    /// Combines two Tasks in parallel: both must resolve.
    ///
    /// `self` is expected to resolve a function, `that` a value; both are
    /// issued concurrently (in the fixed order `self`, then `that`) and the
    /// combined Task resolves `function(value)` once both have resolved.
    /// The first rejection wins: it is delivered immediately and exactly
    /// once, and the other branch's eventual settlement is silently
    /// discarded. After settlement, cleanup of both branch tokens is posted
    /// to the executor as a pair.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let function: Task<String, _> = Task::of(|n: i32| n + 1);
    /// let value: Task<String, i32> = Task::of(41);
    /// assert_eq!(function.ap(value).run().await.try_get(), Ok(42));
    /// ```
    pub fn ap<B, C>(self, that: Task<E, B>) -> Task<E, C>
    where
        A: FnOnce(B) -> C,
        B: Send + 'static,
        C: Send + 'static,
    {
        let Self {
            fork: this_fork,
            cleanup: this_cleanup,
        } = self;
        let Task {
            fork: that_fork,
            cleanup: that_cleanup,
        } = that;

        Task::new(move || async move {
            let (delivery, delivered) = oneshot::channel::<Either<E, C>>();
            let settlement = Arc::new(Mutex::new(ApSettlement {
                function: None,
                value: None,
                delivery: Some(delivery),
            }));

            // Issuance order is fixed: this, then that. Settlement order is
            // whatever the branches' own work decides.
            let function_settlement = Arc::clone(&settlement);
            let function_future = this_fork();
            let function_handle = tokio::spawn(async move {
                match function_future.await {
                    Either::Left(error) => ApSettlement::reject(&function_settlement, error),
                    Either::Right(function) => {
                        ApSettlement::load_function(&function_settlement, function);
                    }
                }
            });

            let value_settlement = Arc::clone(&settlement);
            let value_future = that_fork();
            let value_handle = tokio::spawn(async move {
                match value_future.await {
                    Either::Left(error) => ApSettlement::reject(&value_settlement, error),
                    Either::Right(value) => ApSettlement::load_value(&value_settlement, value),
                }
            });

            let tokens = (function_handle.abort_handle(), value_handle.abort_handle());
            let outcome = match delivered.await {
                Ok(outcome) => outcome,
                // Both branches died without delivering; stay pending, the
                // settlement was never produced.
                Err(_) => futures::future::pending().await,
            };

            // Settled; post cleanup of both branches with their tokens as a
            // pair, decoupled from this settling turn.
            tokio::spawn(async move {
                let (function_token, value_token) = tokens;
                if let Some(cleanup) = this_cleanup {
                    cleanup(function_token);
                }
                if let Some(cleanup) = that_cleanup {
                    cleanup(value_token);
                }
            });

            outcome
        })
    }

    /// Races two Tasks: the first settlement wins.
    ///
    /// Both Tasks are issued concurrently (in the fixed order `self`, then
    /// `that`); whichever settles first - success or failure - is delivered
    /// to the consumer, exactly once. The losing branch's eventual
    /// settlement is discarded. After settlement, cleanup of both branch
    /// tokens is posted to the executor as a pair.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use std::time::Duration;
    ///
    /// let slow: Task<String, i32> = Task::new(|| async {
    ///     tokio::time::sleep(Duration::from_millis(50)).await;
    ///     Either::Right(1)
    /// });
    /// let fast: Task<String, i32> = Task::of(2);
    /// assert_eq!(slow.concat(fast).run().await.try_get(), Ok(2));
    /// ```
    #[must_use]
    pub fn concat(self, that: Self) -> Self {
        let Self {
            fork: this_fork,
            cleanup: this_cleanup,
        } = self;
        let Self {
            fork: that_fork,
            cleanup: that_cleanup,
        } = that;

        Self::new(move || async move {
            let (delivery, delivered) = oneshot::channel::<Either<E, A>>();
            // The exclusive settlement guard: the first branch to take the
            // sender delivers; the loser finds it gone.
            let winner = Arc::new(Mutex::new(Some(delivery)));

            let first_winner = Arc::clone(&winner);
            let first_future = this_fork();
            let first_handle = tokio::spawn(async move {
                let outcome = first_future.await;
                let delivery = first_winner.lock().take();
                if let Some(delivery) = delivery {
                    let _ = delivery.send(outcome);
                }
            });

            let second_winner = Arc::clone(&winner);
            let second_future = that_fork();
            let second_handle = tokio::spawn(async move {
                let outcome = second_future.await;
                let delivery = second_winner.lock().take();
                if let Some(delivery) = delivery {
                    let _ = delivery.send(outcome);
                }
            });

            let tokens = (first_handle.abort_handle(), second_handle.abort_handle());
            let outcome = match delivered.await {
                Ok(outcome) => outcome,
                Err(_) => futures::future::pending().await,
            };

            tokio::spawn(async move {
                let (first_token, second_token) = tokens;
                if let Some(cleanup) = this_cleanup {
                    cleanup(first_token);
                }
                if let Some(cleanup) = that_cleanup {
                    cleanup(second_token);
                }
            });

            outcome
        })
    }
}

// =============================================================================
// Settlement state for `ap`
// =============================================================================

/// Private settlement cell shared by the two branches of an [`Task::ap`]
/// combination.
///
/// The `delivery` sender doubles as the settlement flag: taking it under the
/// lock is the exclusive right to deliver the combined outcome. Once it is
/// gone, every later rejection or resolution from either branch is silently
/// discarded.
struct ApSettlement<E, F, B, C> {
    function: Option<F>,
    value: Option<B>,
    delivery: Option<oneshot::Sender<Either<E, C>>>,
}

impl<E, F, B, C> ApSettlement<E, F, B, C>
where
    F: FnOnce(B) -> C,
{
    /// First rejection wins: deliver it and drop the settlement right.
    fn reject(cell: &Mutex<Self>, error: E) {
        let delivery = cell.lock().delivery.take();
        if let Some(delivery) = delivery {
            let _ = delivery.send(Either::Left(error));
        }
    }

    /// Records the function branch's resolution and delivers if both slots
    /// are loaded.
    fn load_function(cell: &Mutex<Self>, function: F) {
        let mut guard = cell.lock();
        guard.function = Some(function);
        Self::deliver_if_loaded(&mut guard);
    }

    /// Records the value branch's resolution and delivers if both slots are
    /// loaded.
    fn load_value(cell: &Mutex<Self>, value: B) {
        let mut guard = cell.lock();
        guard.value = Some(value);
        Self::deliver_if_loaded(&mut guard);
    }

    fn deliver_if_loaded(guard: &mut parking_lot::MutexGuard<'_, Self>) {
        if guard.function.is_some() && guard.value.is_some() {
            if let Some(delivery) = guard.delivery.take() {
                let function = guard
                    .function
                    .take()
                    .expect("ap settlement: function slot was already consumed");
                let value = guard
                    .value
                    .take()
                    .expect("ap settlement: value slot was already consumed");
                let _ = delivery.send(Either::Right(function(value)));
            }
        }
    }
}

// =============================================================================
// IntoFuture Implementation
// =============================================================================

impl<E, A> IntoFuture for Task<E, A>
where
    E: Send + 'static,
    A: Send + 'static,
{
    type Output = Either<E, A>;
    type IntoFuture = BoxFuture<Either<E, A>>;

    /// Awaiting a Task directly is the same trigger as [`Task::run`].
    fn into_future(self) -> Self::IntoFuture {
        (self.fork)()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<E, A> Semigroup for Task<E, A>
where
    E: Send + 'static,
    A: Send + 'static,
{
    /// The race combination: first settlement wins.
    #[inline]
    fn combine(self, other: Self) -> Self {
        self.concat(other)
    }
}

impl<E, A> Monoid for Task<E, A>
where
    E: Send + 'static,
    A: Send + 'static,
{
    /// The never-settling Task.
    ///
    /// NOT a lawful identity for [`combine`](Semigroup::combine): a true
    /// race identity would lose to any settling Task, whereas this one never
    /// delivers an outcome at all. `empty().combine(t)` still settles with
    /// `t`'s outcome, but `empty().combine(empty())` never settles. The
    /// deviation is deliberate and covered by tests as a quirk, not a law.
    #[inline]
    fn empty() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_construction_executes_nothing() {
        let touched = Arc::new(AtomicUsize::new(0));
        let touched_clone = Arc::clone(&touched);

        let task: Task<String, i32> = Task::new(move || async move {
            touched_clone.fetch_add(1, Ordering::SeqCst);
            Either::Right(42)
        });

        assert_eq!(touched.load(Ordering::SeqCst), 0);
        drop(task);
        assert_eq!(touched.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_composition_executes_nothing() {
        let touched = Arc::new(AtomicUsize::new(0));
        let touched_clone = Arc::clone(&touched);

        let composed = Task::<String, i32>::of(1)
            .map(move |n| {
                touched_clone.fetch_add(1, Ordering::SeqCst);
                n + 1
            })
            .chain(|n| Task::of(n * 2))
            .map_rejected(|error| format!("wrapped: {error}"));

        assert_eq!(touched.load(Ordering::SeqCst), 0);
        drop(composed);
        assert_eq!(touched.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_run_delivers_resolution() {
        let task: Task<String, i32> = Task::of(21).map(|n| n * 2);
        assert_eq!(task.run().await.try_get(), Ok(42));
    }

    #[tokio::test]
    async fn test_run_delivers_rejection() {
        let task: Task<String, i32> = Task::rejected("boom".to_string());
        let outcome = task.run().await;
        assert_eq!(outcome.left_value(), Some("boom".to_string()));
    }

    #[tokio::test]
    async fn test_await_is_equivalent_to_run() {
        let task: Task<String, i32> = Task::of(7);
        assert_eq!(task.await.try_get(), Ok(7));
    }

    #[tokio::test]
    async fn test_fold_eliminates_failure_channel() {
        let task = Task::<String, i32>::rejected("boom".to_string())
            .fold(|error| error.len(), |value| value as usize);
        assert_eq!(task.run().await.try_get(), Ok(4));
    }

    #[tokio::test]
    async fn test_swap_exchanges_channels() {
        let task: Task<String, i32> = Task::of(42);
        let swapped = task.swap();
        assert_eq!(swapped.run().await.left_value(), Some(42));
    }
}
