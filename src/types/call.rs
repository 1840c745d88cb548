//! Argument injection for transforms.
//!
//! A [`Call`] describes the extra arguments a transform is invoked with and
//! the [`InjectionLocus`] at which the container's held value joins them.
//! Resolving a call produces [`Arguments`], the list the transform receives.

use core::ops::Index;

use crate::types::alloc_type::{BTreeMap, Cow};
use crate::types::ArgVec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where the held value is placed among a transform's arguments.
///
/// # Examples
///
/// ```
/// use chain_rail::{Call, InjectionLocus};
///
/// let args = Call::new().arg(1).arg(2).at(InjectionLocus::PositionalAt(1)).into_arguments(9);
/// assert_eq!(args.positional(), &[1, 9, 2]);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum InjectionLocus {
    /// First positional argument.
    #[default]
    LeadingPositional,
    /// Inserted at the given positional index, shifting later arguments right.
    ///
    /// An index past the end appends the value.
    PositionalAt(usize),
    /// Passed as a named argument, replacing any caller-supplied value under
    /// the same name.
    NamedSlot(Cow<'static, str>),
}

/// Extra arguments plus an injection locus, resolved against a held value
/// right before a transform is invoked.
///
/// # Type Parameters
///
/// * `A` - The argument type. Containers convert their held value with
///   `Into<A>`, so heterogeneous arguments can be modelled with a caller
///   defined enum.
///
/// # Examples
///
/// ```
/// use chain_rail::Call;
///
/// let call = Call::new().kwarg("name", "Rye").inject_as("greeting");
/// let args = call.into_arguments("Hi");
///
/// assert_eq!(args.named("greeting"), Some(&"Hi"));
/// assert_eq!(args.named("name"), Some(&"Rye"));
/// assert!(args.positional().is_empty());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Call<A> {
    args: ArgVec<A>,
    kwargs: BTreeMap<Cow<'static, str>, A>,
    locus: InjectionLocus,
}

impl<A> Default for Call<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Call<A> {
    /// Creates a call with no extra arguments and the value in leading position.
    #[inline]
    pub fn new() -> Self {
        Self { args: ArgVec::new(), kwargs: BTreeMap::new(), locus: InjectionLocus::default() }
    }

    /// Appends an extra positional argument.
    #[inline]
    pub fn arg(mut self, arg: A) -> Self {
        self.args.push(arg);
        self
    }

    /// Appends several extra positional arguments in order.
    #[inline]
    pub fn args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        self.args.extend(args);
        self
    }

    /// Adds (or replaces) an extra named argument.
    #[inline]
    pub fn kwarg<N>(mut self, name: N, arg: A) -> Self
    where
        N: Into<Cow<'static, str>>,
    {
        self.kwargs.insert(name.into(), arg);
        self
    }

    /// Sets the injection locus.
    #[inline]
    pub fn at(mut self, locus: InjectionLocus) -> Self {
        self.locus = locus;
        self
    }

    /// Injects the held value at positional `index`.
    #[inline]
    pub fn inject_at(self, index: usize) -> Self {
        self.at(InjectionLocus::PositionalAt(index))
    }

    /// Injects the held value as the named argument `name`.
    #[inline]
    pub fn inject_as<N>(self, name: N) -> Self
    where
        N: Into<Cow<'static, str>>,
    {
        self.at(InjectionLocus::NamedSlot(name.into()))
    }

    /// Returns the configured injection locus.
    #[inline]
    pub fn locus(&self) -> &InjectionLocus {
        &self.locus
    }

    /// Resolves the call against `value`, consuming the extra arguments.
    pub fn into_arguments(self, value: A) -> Arguments<A> {
        let Self { mut args, mut kwargs, locus } = self;
        match locus {
            InjectionLocus::LeadingPositional => args.insert(0, value),
            InjectionLocus::PositionalAt(index) => args.insert(index.min(args.len()), value),
            InjectionLocus::NamedSlot(name) => {
                kwargs.insert(name, value);
            },
        }
        Arguments { positional: args, named: kwargs }
    }

    /// Resolves the call against `value`, cloning the extra arguments so the
    /// call can be reused (once per sequence element, for instance).
    #[inline]
    pub fn bind(&self, value: A) -> Arguments<A>
    where
        A: Clone,
    {
        self.clone().into_arguments(value)
    }
}

/// Fully resolved argument list handed to a transform.
///
/// Positional arguments are indexable with `args[i]`; named arguments are
/// looked up with [`Arguments::named`].
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Arguments<A> {
    positional: ArgVec<A>,
    named: BTreeMap<Cow<'static, str>, A>,
}

impl<A> Arguments<A> {
    /// Positional arguments in call order.
    #[inline]
    pub fn positional(&self) -> &[A] {
        &self.positional
    }

    /// Positional argument at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&A> {
        self.positional.get(index)
    }

    /// First positional argument, if any.
    #[inline]
    pub fn first(&self) -> Option<&A> {
        self.positional.first()
    }

    /// Named argument `name`, if any.
    #[inline]
    pub fn named(&self, name: &str) -> Option<&A> {
        self.named.get(name)
    }

    /// Removes and returns the named argument `name`.
    #[inline]
    pub fn take_named(&mut self, name: &str) -> Option<A> {
        self.named.remove(name)
    }

    /// Number of positional arguments.
    #[inline]
    pub fn len(&self) -> usize {
        self.positional.len()
    }

    /// Returns `true` when there are no positional arguments.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty()
    }

    /// Number of named arguments.
    #[inline]
    pub fn named_len(&self) -> usize {
        self.named.len()
    }

    /// Splits into owned positional and named arguments.
    #[inline]
    pub fn into_parts(self) -> (ArgVec<A>, BTreeMap<Cow<'static, str>, A>) {
        (self.positional, self.named)
    }
}

impl<A> Index<usize> for Arguments<A> {
    type Output = A;

    #[inline]
    fn index(&self, index: usize) -> &A {
        &self.positional[index]
    }
}
