use core::convert::Infallible;
use core::fmt::Display;

use crate::traits::{Chain, Variant};
use crate::types::alloc_type::{BoxError, Cow};
use crate::types::transform_error::capture;
use crate::types::{Arguments, Call, ErrorKind, TransformError};

/// A container that captures transform failures instead of propagating them.
///
/// `ResultChain` is always in exactly one of two states:
///
/// - `Ok(value)` - the last transform succeeded,
/// - `Err { error, checkpoint }` - a transform failed; `checkpoint` is the
///   last value known to be good, i.e. the input of the failed transform.
///
/// Transforms applied in the `Err` state are never invoked. [`recover`]
/// re-runs from the checkpoint; a failed recovery keeps the same checkpoint,
/// so repeated attempts always start from the last known-good value. The
/// captured error only surfaces when the chain is resolved with one of the
/// `unwrap` methods.
///
/// Transforms keep the held type (`T -> T`) so the checkpoint always has the
/// type of the chain. Holding the checkpoint requires `T: Clone`.
///
/// With the `std` feature, a panic inside a transform is captured as a
/// [`Panicked`](crate::Panicked) failure as well.
///
/// [`recover`]: ResultChain::recover
///
/// # Examples
///
/// ```
/// use chain_rail::ResultChain;
///
/// fn checked_div(divisor: i32) -> impl FnOnce(i32) -> Result<i32, &'static str> {
///     move |x| x.checked_div(divisor).ok_or("division by zero")
/// }
///
/// let failed = ResultChain::new(3).apply(checked_div(0)).apply(|x| Ok::<_, &str>(x + 3));
/// assert_eq!(failed.to_string(), "ResultChain(division by zero)");
/// assert_eq!(failed.checkpoint(), Some(&3));
/// assert_eq!(failed.unwrap_or(4), 4);
///
/// let recovered = ResultChain::new(3).apply(checked_div(0)).recover(|x| Ok::<_, &str>(x - 1));
/// assert_eq!(recovered, ResultChain::new(2));
/// ```
#[must_use]
#[derive(Debug, PartialEq)]
pub enum ResultChain<T> {
    /// The last transform succeeded with this value.
    Ok(T),
    /// A transform failed.
    Err {
        /// The captured failure.
        error: TransformError,
        /// The last value known to be good.
        checkpoint: T,
    },
}

impl<T> ResultChain<T> {
    /// Creates a chain in the `Ok` state.
    #[inline]
    pub fn new(value: T) -> Self {
        Self::Ok(value)
    }

    /// Returns `true` if a failure has been captured.
    #[inline]
    pub fn in_error_state(&self) -> bool {
        matches!(self, Self::Err { .. })
    }

    /// Returns `true` if no failure has been captured.
    #[inline]
    pub fn is_ok(&self) -> bool {
        !self.in_error_state()
    }

    /// Borrows the value in the `Ok` state.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err { .. } => None,
        }
    }

    /// Borrows the captured failure in the `Err` state.
    #[inline]
    pub fn error(&self) -> Option<&TransformError> {
        match self {
            Self::Ok(_) => None,
            Self::Err { error, .. } => Some(error),
        }
    }

    /// Borrows the recovery checkpoint in the `Err` state.
    #[inline]
    pub fn checkpoint(&self) -> Option<&T> {
        match self {
            Self::Ok(_) => None,
            Self::Err { checkpoint, .. } => Some(checkpoint),
        }
    }

    /// Attaches a context message to the captured failure.
    ///
    /// A no-op in the `Ok` state.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_rail::ResultChain;
    ///
    /// let chain = ResultChain::new("x")
    ///     .apply(|s| s.parse::<i32>().map(|_| s))
    ///     .with_context("parsing the retry count");
    ///
    /// let err = chain.unwrap().unwrap_err();
    /// assert!(err.error_chain().starts_with("parsing the retry count -> "));
    /// ```
    #[inline]
    pub fn with_context<C>(self, context: C) -> Self
    where
        C: Into<Cow<'static, str>>,
    {
        match self {
            Self::Ok(value) => Self::Ok(value),
            Self::Err { error, checkpoint } => {
                Self::Err { error: error.with_context(context), checkpoint }
            },
        }
    }

    /// Resolves the chain, surfacing a captured failure as `Err`.
    ///
    /// # Errors
    ///
    /// Returns the captured [`TransformError`] in the `Err` state.
    #[inline]
    pub fn unwrap(self) -> Result<T, TransformError> {
        self.unwrap_with(None, &[])
    }

    /// Resolves the chain, replacing any captured failure with `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err { .. } => default,
        }
    }

    /// Resolves the chain, replacing a captured failure with `default` only
    /// when its kind is in `allowed`. An empty `allowed` list accepts every
    /// kind.
    ///
    /// # Errors
    ///
    /// Returns the captured [`TransformError`] when its kind is not allowed.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_rail::{ErrorKind, ResultChain};
    /// use core::num::ParseIntError;
    ///
    /// let parse = |s: String| s.parse::<u8>().map(|_| s);
    ///
    /// let allowed = ResultChain::new(String::from("300")).apply(parse);
    /// let value = allowed.unwrap_or_allowed(String::from("0"), &[ErrorKind::of::<ParseIntError>()]);
    /// assert_eq!(value.unwrap(), "0");
    ///
    /// let other = ResultChain::new(String::from("300")).apply(parse);
    /// assert!(other.unwrap_or_allowed(String::from("0"), &[ErrorKind::of::<core::fmt::Error>()]).is_err());
    /// ```
    #[inline]
    pub fn unwrap_or_allowed(self, default: T, allowed: &[ErrorKind]) -> Result<T, TransformError> {
        self.unwrap_with(Some(default), allowed)
    }

    /// Resolves the chain with the full default/allow-list contract.
    ///
    /// - `Ok` returns the value, ignoring `default` and `allowed`.
    /// - `Err` without a `default` returns the captured failure.
    /// - `Err` with a `default` returns it when `allowed` is empty or one of
    ///   its kinds [matches](ErrorKind::matches) the failure, and the captured
    ///   failure otherwise. A kind matches a boxed error by its concrete type.
    ///
    /// # Errors
    ///
    /// Returns the captured [`TransformError`] as described above.
    pub fn unwrap_with(self, default: Option<T>, allowed: &[ErrorKind]) -> Result<T, TransformError> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err { error, .. } => match default {
                Some(default) if allowed.is_empty() || error.is_any_of(allowed) => Ok(default),
                _ => Err(error),
            },
        }
    }
}

impl<T: Clone> ResultChain<T> {
    /// Applies a fallible `transform` in the `Ok` state.
    ///
    /// On failure the chain moves to `Err` with the transform's input as the
    /// checkpoint. In the `Err` state `transform` is not invoked.
    ///
    /// The transform keeps the held type, since the checkpoint must have the
    /// same type before and after each step. For a step that changes the
    /// type, resolve the chain with [`unwrap`](Self::unwrap) and start a new
    /// `ResultChain` from the result, or use [`Chainable`](crate::Chainable),
    /// whose `apply` maps `T -> U`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_rail::ResultChain;
    ///
    /// let trimmed = ResultChain::new(String::from(" 42 ")).apply(|s| Ok::<_, &str>(s.trim().to_owned()));
    /// let parsed = trimmed.unwrap().map(|s| ResultChain::new(s.len())).unwrap();
    /// assert_eq!(parsed.unwrap().unwrap(), 2);
    /// ```
    #[inline]
    pub fn apply<E, F>(self, transform: F) -> Self
    where
        F: FnOnce(T) -> Result<T, E>,
        E: Into<BoxError> + 'static,
    {
        self.advance(transform)
    }

    /// Applies a fallible `transform` to the arguments of `call` in the `Ok`
    /// state, with the same capture rules as [`apply`](Self::apply).
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_rail::{Call, ResultChain};
    ///
    /// let chain = ResultChain::new(10_i64).apply_with(Call::new().arg(0_i64), |args| {
    ///     args[0].checked_div(args[1]).ok_or("division by zero")
    /// });
    /// assert_eq!(chain.checkpoint(), Some(&10));
    /// ```
    #[inline]
    pub fn apply_with<A, E, F>(self, call: Call<A>, transform: F) -> Self
    where
        T: Into<A>,
        F: FnOnce(Arguments<A>) -> Result<T, E>,
        E: Into<BoxError> + 'static,
    {
        self.advance(move |value: T| transform(call.into_arguments(value.into())))
    }

    /// Applies an infallible `transform` in the `Ok` state.
    ///
    /// Only a panic (with the `std` feature) moves the chain to `Err`.
    #[inline]
    pub fn map<F>(self, transform: F) -> Self
    where
        F: FnOnce(T) -> T,
    {
        self.advance(move |value: T| Ok::<T, Infallible>(transform(value)))
    }

    /// Re-runs from the checkpoint in the `Err` state.
    ///
    /// Success moves the chain back to `Ok`. Failure keeps the same checkpoint
    /// and records the new failure, carrying over the previous failure's
    /// contexts. In the `Ok` state this is a no-op.
    #[inline]
    pub fn recover<E, F>(self, transform: F) -> Self
    where
        F: FnOnce(T) -> Result<T, E>,
        E: Into<BoxError> + 'static,
    {
        self.retry_from_checkpoint(transform)
    }

    /// Like [`recover`](Self::recover), with the checkpoint injected into
    /// `call`'s arguments.
    #[inline]
    pub fn recover_with<A, E, F>(self, call: Call<A>, transform: F) -> Self
    where
        T: Into<A>,
        F: FnOnce(Arguments<A>) -> Result<T, E>,
        E: Into<BoxError> + 'static,
    {
        self.retry_from_checkpoint(move |value: T| transform(call.into_arguments(value.into())))
    }

    fn advance<E, F>(self, transform: F) -> Self
    where
        F: FnOnce(T) -> Result<T, E>,
        E: Into<BoxError> + 'static,
    {
        match self {
            Self::Ok(value) => {
                let checkpoint = value.clone();
                match capture(move || transform(value)) {
                    Ok(next) => Self::Ok(next),
                    Err(error) => {
                        tracing::debug!(kind = %error.kind(), error = %error, "transform failed, holding checkpoint");
                        Self::Err { error, checkpoint }
                    },
                }
            },
            Self::Err { error, checkpoint } => {
                tracing::trace!(kind = %error.kind(), "skipping transform in error state");
                Self::Err { error, checkpoint }
            },
        }
    }

    fn retry_from_checkpoint<E, F>(self, transform: F) -> Self
    where
        F: FnOnce(T) -> Result<T, E>,
        E: Into<BoxError> + 'static,
    {
        match self {
            Self::Ok(value) => Self::Ok(value),
            Self::Err { error, checkpoint } => {
                let input = checkpoint.clone();
                match capture(move || transform(input)) {
                    Ok(next) => {
                        tracing::debug!(kind = %error.kind(), "recovered from checkpoint");
                        Self::Ok(next)
                    },
                    Err(failure) => {
                        tracing::debug!(kind = %failure.kind(), error = %failure, "recovery failed, keeping checkpoint");
                        Self::Err { error: failure.inherit_context(error), checkpoint }
                    },
                }
            },
        }
    }
}

impl<T: Display> Display for ResultChain<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Ok(value) => write!(f, "{}({})", Variant::ResultChain, value),
            Self::Err { error, .. } => write!(f, "{}({})", Variant::ResultChain, error),
        }
    }
}

impl<T: Clone> Chain for ResultChain<T> {
    type Item = T;

    const VARIANT: Variant = Variant::ResultChain;

    #[inline]
    fn then<F>(self, transform: F) -> Self
    where
        F: FnMut(T) -> T,
    {
        self.map(transform)
    }

    #[inline]
    fn then_with<A, F>(self, call: Call<A>, mut transform: F) -> Self
    where
        A: Clone,
        T: Into<A>,
        F: FnMut(Arguments<A>) -> T,
    {
        self.apply_with(call, move |args| Ok::<T, Infallible>(transform(args)))
    }
}
