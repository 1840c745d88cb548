use core::fmt::Display;

use crate::traits::{Chain, Variant};
use crate::types::alloc_type::Vec;
use crate::types::{Arguments, Call, Chainable, EmptyReductionError};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A container over an ordered sequence whose transforms act per element.
///
/// Elements are always processed left to right, so side effects of a
/// transform happen in sequence order. Lazy sources are materialized eagerly
/// when the container is built.
///
/// # Examples
///
/// ```
/// use chain_rail::SequenceChain;
///
/// let halves = SequenceChain::new(vec![1, 3, 7])
///     .apply(|x| x + 1)
///     .apply(|x| x / 2);
/// assert_eq!(halves.to_string(), "SequenceChain(1, 2, 4)");
///
/// let squares: SequenceChain<u32> = (1..=3).map(|x| x * x).collect();
/// assert_eq!(squares.unwrap(), vec![1, 4, 9]);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SequenceChain<T>(Vec<T>);

impl<T> SequenceChain<T> {
    /// Wraps an explicit list of values.
    #[inline]
    pub fn new(values: Vec<T>) -> Self {
        Self(values)
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the elements in order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Maps `transform` over every element, preserving length and order.
    #[inline]
    pub fn apply<U, F>(self, transform: F) -> SequenceChain<U>
    where
        F: FnMut(T) -> U,
    {
        SequenceChain(self.0.into_iter().map(transform).collect())
    }

    /// Maps `transform` over every element, injecting each element into a
    /// fresh copy of `call`'s arguments.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_rail::{Call, SequenceChain};
    ///
    /// let scaled = SequenceChain::new(vec![1_i32, 2, 3])
    ///     .apply_with(Call::new().kwarg("factor", 10_i32), |args| args[0] * args.named("factor").unwrap());
    /// assert_eq!(scaled.unwrap(), vec![10, 20, 30]);
    /// ```
    pub fn apply_with<A, U, F>(self, call: Call<A>, mut transform: F) -> SequenceChain<U>
    where
        A: Clone,
        T: Into<A>,
        F: FnMut(Arguments<A>) -> U,
    {
        SequenceChain(self.0.into_iter().map(|item| transform(call.bind(item.into()))).collect())
    }

    /// Keeps the elements for which `predicate` holds, preserving order.
    #[inline]
    pub fn filter<P>(self, mut predicate: P) -> SequenceChain<T>
    where
        P: FnMut(&T) -> bool,
    {
        SequenceChain(self.0.into_iter().filter(|item| predicate(item)).collect())
    }

    /// Keeps the elements for which `predicate`, invoked with the element
    /// injected into `call`'s arguments, holds.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_rail::{Call, SequenceChain};
    ///
    /// fn no_remainder(args: chain_rail::Arguments<i32>) -> bool {
    ///     args.named("value").unwrap() % args.named("divide_by").unwrap() == 0
    /// }
    ///
    /// let evens = SequenceChain::new(vec![1_i32, 2, 3, 4])
    ///     .filter_with(Call::new().kwarg("divide_by", 2).inject_as("value"), no_remainder);
    /// assert_eq!(evens, SequenceChain::new(vec![2, 4]));
    /// ```
    pub fn filter_with<A, P>(self, call: Call<A>, mut predicate: P) -> SequenceChain<T>
    where
        A: Clone,
        T: Clone + Into<A>,
        P: FnMut(Arguments<A>) -> bool,
    {
        SequenceChain(
            self.0
                .into_iter()
                .filter(|item| predicate(call.bind(item.clone().into())))
                .collect(),
        )
    }

    /// Left-folds the sequence into a [`Chainable`].
    ///
    /// With an `initial` value the fold starts there and `combiner` runs once
    /// per element. Without one, the first element seeds the accumulator and
    /// `combiner` runs once per remaining element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyReductionError`] when the sequence is empty and no
    /// `initial` value is given.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_rail::SequenceChain;
    ///
    /// let add = |a: i32, b: i32| a + b;
    /// assert_eq!(SequenceChain::new(vec![1, 2]).reduce(add, None).unwrap().unwrap(), 3);
    /// assert_eq!(SequenceChain::new(vec![1, 2]).reduce(add, Some(1)).unwrap().unwrap(), 4);
    /// assert!(SequenceChain::<i32>::new(vec![]).reduce(add, None).is_err());
    /// ```
    pub fn reduce<F>(self, combiner: F, initial: Option<T>) -> Result<Chainable<T>, EmptyReductionError>
    where
        F: FnMut(T, T) -> T,
    {
        let mut items = self.0.into_iter();
        let seed = match initial {
            Some(seed) => seed,
            None => match items.next() {
                Some(first) => first,
                None => {
                    tracing::debug!("reduce called on an empty sequence without an initial value");
                    return Err(EmptyReductionError);
                },
            },
        };
        Ok(Chainable::new(items.fold(seed, combiner)))
    }

    /// Left-folds the sequence from `initial`, allowing the accumulator to
    /// have a different type than the elements.
    #[inline]
    pub fn fold<U, F>(self, initial: U, combiner: F) -> Chainable<U>
    where
        F: FnMut(U, T) -> U,
    {
        Chainable::new(self.0.into_iter().fold(initial, combiner))
    }

    /// Returns the elements.
    #[inline]
    pub fn unwrap(self) -> Vec<T> {
        self.0
    }
}

impl<T> Default for SequenceChain<T> {
    #[inline]
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> From<Vec<T>> for SequenceChain<T> {
    #[inline]
    fn from(values: Vec<T>) -> Self {
        Self(values)
    }
}

impl<T> FromIterator<T> for SequenceChain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for SequenceChain<T> {
    type Item = T;
    type IntoIter = <Vec<T> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SequenceChain<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: Display> Display for SequenceChain<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}(", Variant::SequenceChain)?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", item)?;
        }
        f.write_str(")")
    }
}

impl<T> Chain for SequenceChain<T> {
    type Item = T;

    const VARIANT: Variant = Variant::SequenceChain;

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

impl_shr_apply!(SequenceChain, FnMut);
