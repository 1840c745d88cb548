use core::fmt::{Debug, Display};

use crate::traits::{Chain, Variant};
use crate::types::{Arguments, Call};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The base container: holds one value and applies transforms to it
/// unconditionally.
///
/// # Examples
///
/// ```
/// use chain_rail::Chainable;
///
/// fn make_loud(text: &str) -> String {
///     text.to_uppercase() + "!!!"
/// }
///
/// let loud = Chainable::new("hello world").apply(make_loud);
/// assert_eq!(loud.to_string(), "Chainable(HELLO WORLD!!!)");
/// assert_eq!((Chainable::new(2) >> (|x: i32| x + 1)).unwrap(), 3);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Chainable<T>(T);

impl<T> Chainable<T> {
    /// Wraps `value`.
    #[inline]
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Applies `transform` to the held value, returning a new container with
    /// the result.
    ///
    /// # Arguments
    ///
    /// * `transform` - Receives the held value as its only argument
    #[inline]
    pub fn apply<U, F>(self, transform: F) -> Chainable<U>
    where
        F: FnOnce(T) -> U,
    {
        Chainable(transform(self.0))
    }

    /// Applies `transform` to the arguments of `call` with the held value
    /// injected at the call's locus.
    ///
    /// # Arguments
    ///
    /// * `call` - Extra positional/named arguments and the injection locus
    /// * `transform` - Receives the resolved [`Arguments`]
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_rail::{Call, Chainable};
    ///
    /// // second positional argument wins
    /// let picked = Chainable::new(2_i32).apply_with(Call::new().arg(45_i32).inject_at(1), |args| args[1]);
    /// assert_eq!(picked, Chainable::new(2));
    /// ```
    #[inline]
    pub fn apply_with<A, U, F>(self, call: Call<A>, transform: F) -> Chainable<U>
    where
        T: Into<A>,
        F: FnOnce(Arguments<A>) -> U,
    {
        Chainable(transform(call.into_arguments(self.0.into())))
    }

    /// Returns the held value.
    #[inline]
    pub fn unwrap(self) -> T {
        self.0
    }

    /// Borrows the held value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.0
    }
}

impl<T> From<T> for Chainable<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T: Display> Display for Chainable<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}({})", Variant::Chainable, self.0)
    }
}

impl<T> Chain for Chainable<T> {
    type Item = T;

    const VARIANT: Variant = Variant::Chainable;

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

impl_shr_apply!(Chainable, FnOnce);
