//! Chaining containers that turn plain functions into value pipelines.
//!
//! Every container holds a value and hands it to the next transform, each
//! step returning a fresh container:
//!
//! - [`Chainable`] applies transforms unconditionally,
//! - [`OptionalChain`] skips transforms once the value is absent,
//! - [`SequenceChain`] maps, filters and reduces element by element,
//! - [`ResultChain`] captures transform failures together with the last good
//!   value, so a pipeline can run to the end and be resolved (or recovered)
//!   at a single point.
//!
//! Transforms either take the held value directly ([`Chainable::apply`]) or
//! receive a resolved argument list built from a [`Call`] description
//! ([`Chainable::apply_with`]), with the held value injected at a chosen
//! [`InjectionLocus`].
//!
//! # Examples
//!
//! ## Plain chaining
//!
//! ```
//! use chain_rail::Chainable;
//!
//! let halved = Chainable::new(3_i32)
//!     .apply(|x| x + 1)
//!     .apply(|x| f64::from(x) / 2.0)
//!     .unwrap();
//!
//! assert_eq!(halved, 2.0);
//! ```
//!
//! ## Deferred error handling
//!
//! ```
//! use chain_rail::ResultChain;
//!
//! fn halve(x: i32) -> Result<i32, &'static str> {
//!     if x % 2 == 0 { Ok(x / 2) } else { Err("odd input") }
//! }
//!
//! let chain = ResultChain::new(3).apply(halve).apply(halve);
//! assert!(chain.in_error_state());
//! assert_eq!(chain.to_string(), "ResultChain(odd input)");
//!
//! let recovered = chain.recover(|x| Ok::<_, &str>(x - 1)).unwrap().unwrap();
//! assert_eq!(recovered, 2);
//! ```
//!
//! ## Sequences
//!
//! ```
//! use chain_rail::SequenceChain;
//!
//! let evens = SequenceChain::new(vec![1, 2, 3, 4])
//!     .filter(|x| x % 2 == 0)
//!     .unwrap();
//! assert_eq!(evens, vec![2, 4]);
//!
//! let sum = SequenceChain::new(vec![1, 2]).reduce(|a, b| a + b, None).unwrap();
//! assert_eq!(sum.unwrap(), 3);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Internal helper macros
#[macro_use]
mod macros;

/// Convenience re-exports for quick starts
pub mod prelude;
/// The capability interface shared by every container
pub mod traits;
/// Containers, call descriptions and error types
pub mod types;
/// Function adapters for retrying, coercing, cloning and deprecating transforms
pub mod wrappers;

pub use traits::*;
pub use types::{
    Arguments, Call, Chainable, EmptyReductionError, ErrorKind, InjectionLocus, OptionalChain,
    Panicked, ResultChain, SequenceChain, TransformError,
};
