use core::fmt::Display;

use crate::types::alloc_type::{BoxError, Vec};
use crate::types::{ErrorKind, TransformError};

/// Decides whether a failed attempt may be retried.
pub trait RetryPolicy<E> {
    /// Returns `true` if `error` is worth another attempt.
    fn should_retry(&mut self, error: &E) -> bool;
}

/// Retries every failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnyFailure;

impl<E> RetryPolicy<E> for AnyFailure {
    #[inline]
    fn should_retry(&mut self, _error: &E) -> bool {
        true
    }
}

/// Retries only the failures a predicate accepts.
#[derive(Debug, Clone, Copy)]
pub struct Matching<P>(P);

impl<E, P> RetryPolicy<E> for Matching<P>
where
    P: FnMut(&E) -> bool,
{
    #[inline]
    fn should_retry(&mut self, error: &E) -> bool {
        (self.0)(error)
    }
}

/// Retries only failures matching one of a set of [`ErrorKind`]s.
///
/// An empty set retries every failure, the same way an empty allow-list
/// accepts every kind in
/// [`ResultChain::unwrap_or_allowed`](crate::ResultChain::unwrap_or_allowed).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OfKinds(Vec<ErrorKind>);

impl RetryPolicy<TransformError> for OfKinds {
    #[inline]
    fn should_retry(&mut self, error: &TransformError) -> bool {
        self.0.is_empty() || error.is_any_of(&self.0)
    }
}

/// Runs an operation up to a fixed number of attempts.
///
/// An attempt count of zero is treated as one: the operation always runs at
/// least once. A failure the policy rejects is returned immediately; once the
/// attempts are used up the last failure is returned.
///
/// # Examples
///
/// ```
/// use chain_rail::wrappers::Retry;
///
/// let mut calls = 0;
/// let result = Retry::new(3).run(|| {
///     calls += 1;
///     if calls < 3 { Err("not yet") } else { Ok(calls) }
/// });
/// assert_eq!(result, Ok(3));
///
/// let mut calls = 0;
/// let result: Result<(), &str> = Retry::new(5).when(|e: &&str| *e != "fatal").run(|| {
///     calls += 1;
///     Err("fatal")
/// });
/// assert_eq!(result, Err("fatal"));
/// assert_eq!(calls, 1);
/// ```
#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct Retry<P = AnyFailure> {
    attempts: u32,
    policy: P,
}

impl Retry {
    /// Creates a policy that retries any failure, running at most `attempts`
    /// times in total.
    #[inline]
    pub fn new(attempts: u32) -> Self {
        Self { attempts: attempts.max(1), policy: AnyFailure }
    }
}

impl<P> Retry<P> {
    /// Restricts retries to failures for which `should_retry` holds.
    #[inline]
    pub fn when<Q>(self, should_retry: Q) -> Retry<Matching<Q>> {
        Retry { attempts: self.attempts, policy: Matching(should_retry) }
    }

    /// Restricts retries to [`TransformError`]s matching one of `kinds`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_rail::wrappers::Retry;
    /// use chain_rail::{EmptyReductionError, ErrorKind, TransformError};
    /// use core::num::ParseIntError;
    ///
    /// let mut calls = 0;
    /// let result: Result<(), TransformError> = Retry::new(4)
    ///     .for_kinds(&[ErrorKind::of::<ParseIntError>()])
    ///     .run(|| {
    ///         calls += 1;
    ///         Err(TransformError::new(EmptyReductionError))
    ///     });
    /// assert!(result.unwrap_err().is::<EmptyReductionError>());
    /// assert_eq!(calls, 1);
    /// ```
    #[inline]
    pub fn for_kinds(self, kinds: &[ErrorKind]) -> Retry<OfKinds> {
        Retry { attempts: self.attempts, policy: OfKinds(kinds.to_vec()) }
    }

    /// Maximum number of attempts, never less than one.
    #[inline]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Runs `operation` until it succeeds, fails with a non-retryable error or
    /// runs out of attempts.
    ///
    /// # Errors
    ///
    /// Returns the last failure of `operation`.
    pub fn run<U, E, Op>(&mut self, mut operation: Op) -> Result<U, E>
    where
        P: RetryPolicy<E>,
        Op: FnMut() -> Result<U, E>,
        E: Display,
    {
        let mut attempt = 1u32;

        loop {
            match operation() {
                Ok(value) => return Ok(value),
                Err(error) if !self.policy.should_retry(&error) => {
                    tracing::debug!(attempt, error = %error, "failure is not retryable");
                    return Err(error);
                },
                Err(error) if attempt >= self.attempts => {
                    tracing::warn!(attempts = attempt, error = %error, "exhausted retry attempts");
                    return Err(error);
                },
                Err(error) => {
                    tracing::debug!(attempt, error = %error, "attempt failed, retrying");
                    attempt += 1;
                },
            }
        }
    }
}

/// Wraps `transform` so each call is retried up to `attempts` times on any
/// failure, with a fresh clone of the argument per attempt.
///
/// # Examples
///
/// ```
/// use chain_rail::wrappers::retry;
/// use chain_rail::ResultChain;
///
/// let mut failures_left = 2;
/// let flaky = |x: i32| {
///     if failures_left > 0 {
///         failures_left -= 1;
///         Err("connection reset")
///     } else {
///         Ok(x * 2)
///     }
/// };
///
/// let chain = ResultChain::new(21).apply(retry(3, flaky));
/// assert_eq!(chain.unwrap().unwrap(), 42);
/// ```
pub fn retry<A, U, E, F>(attempts: u32, transform: F) -> impl FnMut(A) -> Result<U, E>
where
    A: Clone,
    E: Display,
    F: FnMut(A) -> Result<U, E>,
{
    retry_if(attempts, |_: &E| true, transform)
}

/// Like [`retry`], but only failures for which `should_retry` holds are
/// retried; any other failure is returned right away.
pub fn retry_if<A, U, E, P, F>(
    attempts: u32,
    should_retry: P,
    mut transform: F,
) -> impl FnMut(A) -> Result<U, E>
where
    A: Clone,
    E: Display,
    P: FnMut(&E) -> bool,
    F: FnMut(A) -> Result<U, E>,
{
    let mut policy = Retry::new(attempts).when(should_retry);
    move |arg: A| policy.run(|| transform(arg.clone()))
}

/// Like [`retry`], but failures are reified into [`TransformError`]s and only
/// those matching one of `kinds` are retried. An empty `kinds` retries every
/// failure.
///
/// # Examples
///
/// ```
/// use chain_rail::wrappers::retry_for;
/// use chain_rail::{ErrorKind, ResultChain};
/// use std::io;
///
/// let mut timeouts = 1;
/// let fetch = |id: u32| {
///     if timeouts > 0 {
///         timeouts -= 1;
///         Err(io::Error::new(io::ErrorKind::TimedOut, "timed out"))
///     } else {
///         Ok(id)
///     }
/// };
///
/// let chain = ResultChain::new(7_u32).apply(retry_for(2, &[ErrorKind::of::<io::Error>()], fetch));
/// assert_eq!(chain.unwrap().unwrap(), 7);
/// ```
pub fn retry_for<A, U, E, F>(
    attempts: u32,
    kinds: &[ErrorKind],
    mut transform: F,
) -> impl FnMut(A) -> Result<U, TransformError>
where
    A: Clone,
    E: Into<BoxError> + 'static,
    F: FnMut(A) -> Result<U, E>,
{
    let mut policy = Retry::new(attempts).for_kinds(kinds);
    move |arg: A| policy.run(|| transform(arg.clone()).map_err(TransformError::new))
}
