//! Function adapters that add behaviour around a plain transform.
//!
//! Each adapter takes a unary function and returns a new closure, ready to be
//! handed to a container's `apply`:
//!
//! - [`retry`] / [`retry_if`] / [`retry_for`] and the [`Retry`] builder re-run failing calls,
//! - [`coerce_into`] / [`coerce_if`] / [`coerce_for`] turn failures into a fallback value,
//! - [`mutation_free`] hands the transform a clone of its argument,
//! - [`deprecated`] logs a warning on every call.
//!
//! # Examples
//!
//! ```
//! use chain_rail::wrappers::{coerce_into, retry};
//! use chain_rail::ResultChain;
//!
//! let parse = |s: String| s.trim().parse::<i64>().map(|_| s);
//! let chain = ResultChain::new(String::from(" 12 ")).apply(retry(2, parse));
//! assert!(chain.is_ok());
//!
//! let lenient = coerce_into(-1, |s: &str| s.parse::<i64>());
//! assert_eq!(chain_rail::Chainable::new("n/a").apply(lenient).unwrap(), -1);
//! ```

mod coerce;
mod guard;
mod retry;

pub use coerce::{coerce_for, coerce_if, coerce_into};
pub use guard::{deprecated, mutation_free};
pub use retry::{retry, retry_for, retry_if, AnyFailure, Matching, OfKinds, Retry, RetryPolicy};
