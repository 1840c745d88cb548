//! Containers, call descriptions and error types.
//!
//! # Examples
//!
//! ```
//! use chain_rail::{Call, Chainable, OptionalChain, SequenceChain};
//!
//! let greeting = Chainable::new("Rye")
//!     .apply_with(Call::new().arg("Hi"), |args| format!("{} {}", args[1], args[0]))
//!     .unwrap();
//! assert_eq!(greeting, "Hi Rye");
//!
//! assert_eq!(OptionalChain::<i32>::none().apply(|x| x + 3).unwrap_or(9), 9);
//! assert_eq!(SequenceChain::from_iter(0..3).apply(|x| x * 10).unwrap(), vec![0, 10, 20]);
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod call;
pub mod chainable;
pub mod optional_chain;
pub mod result_chain;
pub mod sequence_chain;
pub mod transform_error;

pub use call::*;
pub use chainable::*;
pub use optional_chain::*;
pub use result_chain::*;
pub use sequence_chain::*;
pub use transform_error::*;

/// SmallVec-backed collection used for positional arguments and error contexts.
///
/// Uses inline storage for up to 4 elements so short argument lists never
/// touch the heap.
pub type ArgVec<A> = SmallVec<[A; 4]>;

/// SmallVec-backed stack of context messages attached to a [`TransformError`].
pub type ErrorVec<E> = SmallVec<[E; 1]>;

impl_variant_inequality! {
    Chainable => [OptionalChain, SequenceChain, ResultChain];
    OptionalChain => [Chainable, SequenceChain, ResultChain];
    SequenceChain => [Chainable, OptionalChain, ResultChain];
    ResultChain => [Chainable, OptionalChain, SequenceChain];
}
