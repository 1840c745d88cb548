use core::fmt::Display;

use crate::traits::{Chain, Variant};
use crate::types::{Arguments, Call};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A container whose value may be absent.
///
/// Transforms are written as if the value were always present; once it is
/// absent every further `apply` is skipped and the container stays absent.
///
/// # Examples
///
/// ```
/// use chain_rail::OptionalChain;
///
/// let nope = OptionalChain::<i32>::none().apply(|x| x + 3);
/// assert!(nope.is_absent());
/// assert_eq!(nope.unwrap_or(9), 9);
///
/// let found = OptionalChain::some(3).apply(|x| x + 2);
/// assert_eq!(found.unwrap(None), Some(5));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OptionalChain<T>(Option<T>);

impl<T> OptionalChain<T> {
    /// Wraps a possibly absent value.
    #[inline]
    pub fn new(value: Option<T>) -> Self {
        Self(value)
    }

    /// Wraps a present value.
    #[inline]
    pub fn some(value: T) -> Self {
        Self(Some(value))
    }

    /// Creates an absent container.
    #[inline]
    pub fn none() -> Self {
        Self(None)
    }

    /// Returns `true` if a value is held.
    #[inline]
    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    /// Returns `true` if no value is held.
    #[inline]
    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    /// Applies `transform` to the held value, or skips it when absent.
    #[inline]
    pub fn apply<U, F>(self, transform: F) -> OptionalChain<U>
    where
        F: FnOnce(T) -> U,
    {
        OptionalChain(self.0.map(transform))
    }

    /// Applies `transform` to the arguments of `call`, or skips it (dropping
    /// the call) when absent.
    #[inline]
    pub fn apply_with<A, U, F>(self, call: Call<A>, transform: F) -> OptionalChain<U>
    where
        T: Into<A>,
        F: FnOnce(Arguments<A>) -> U,
    {
        OptionalChain(self.0.map(|value| transform(call.into_arguments(value.into()))))
    }

    /// Returns the held value, or `default` when absent.
    ///
    /// `default` may itself be `None`, meaning "no default".
    #[inline]
    pub fn unwrap(self, default: Option<T>) -> Option<T> {
        self.0.or(default)
    }

    /// Returns the held value, or `default` when absent.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        self.0.unwrap_or(default)
    }

    /// Borrows the held value, if any.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        self.0.as_ref()
    }
}

impl<T> Default for OptionalChain<T> {
    #[inline]
    fn default() -> Self {
        Self(None)
    }
}

impl<T> From<Option<T>> for OptionalChain<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<T: Display> Display for OptionalChain<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.0 {
            Some(value) => write!(f, "{}({})", Variant::OptionalChain, value),
            None => write!(f, "{}(None)", Variant::OptionalChain),
        }
    }
}

impl<T> Chain for OptionalChain<T> {
    type Item = T;

    const VARIANT: Variant = Variant::OptionalChain;

    #[inline]
    fn then<F>(self, transform: F) -> Self
    where
        F: FnMut(T) -> T,
    {
        self.apply(transform)
    }

    #[inline]
    fn then_with<A, F>(self, call: Call<A>, transform: F) -> Self
    where
        A: Clone,
        T: Into<A>,
        F: FnMut(Arguments<A>) -> T,
    {
        self.apply_with(call, transform)
    }
}

impl_shr_apply!(OptionalChain, FnOnce);
