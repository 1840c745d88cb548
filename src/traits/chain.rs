use core::fmt::Display;

use crate::types::{Arguments, Call};

/// The closed set of container variants.
///
/// `Display` renders the variant name used by every container's own
/// `Display` output, e.g. `SequenceChain(1, 2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Chainable,
    OptionalChain,
    SequenceChain,
    ResultChain,
}

impl Variant {
    /// Returns the variant name.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chainable => "Chainable",
            Self::OptionalChain => "OptionalChain",
            Self::SequenceChain => "SequenceChain",
            Self::ResultChain => "ResultChain",
        }
    }
}

impl Display for Variant {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Capability shared by every container: feed the held value through a
/// transform and get a container of the same variant back.
///
/// Each implementor keeps its own semantics. [`Chainable`](crate::Chainable)
/// always runs the transform, [`OptionalChain`](crate::OptionalChain) skips it
/// when the value is absent, [`SequenceChain`](crate::SequenceChain) runs it
/// once per element and [`ResultChain`](crate::ResultChain) captures panics
/// and skips it in the error state.
///
/// The trait keeps the held type fixed; the inherent `apply` methods of the
/// containers are the type-changing (and, for `ResultChain`, fallible) entry
/// points.
///
/// # Examples
///
/// ```
/// use chain_rail::{Chain, Chainable, OptionalChain, SequenceChain};
///
/// fn normalize<C: Chain<Item = i64>>(chain: C) -> C {
///     chain.then(|x| x.abs()).then(|x| x.min(100))
/// }
///
/// assert_eq!(normalize(Chainable::new(-250)), Chainable::new(100));
/// assert_eq!(normalize(OptionalChain::none()), OptionalChain::none());
/// assert_eq!(
///     normalize(SequenceChain::new(vec![-3, 7, 400])),
///     SequenceChain::new(vec![3, 7, 100])
/// );
/// ```
pub trait Chain: Sized {
    /// The value a transform receives.
    type Item;

    /// Which container this is.
    const VARIANT: Variant;

    /// Returns [`Self::VARIANT`].
    #[inline]
    fn variant(&self) -> Variant {
        Self::VARIANT
    }

    /// Applies `transform` with the held value as its only argument.
    fn then<F>(self, transform: F) -> Self
    where
        F: FnMut(Self::Item) -> Self::Item;

    /// Applies `transform` to the arguments resolved from `call`.
    fn then_with<A, F>(self, call: Call<A>, transform: F) -> Self
    where
        A: Clone,
        Self::Item: Into<A>,
        F: FnMut(Arguments<A>) -> Self::Item;
}
