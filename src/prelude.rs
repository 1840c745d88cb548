//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use chain_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Containers**: [`Chainable`], [`OptionalChain`], [`SequenceChain`], [`ResultChain`]
//! - **Calls**: [`Call`], [`Arguments`], [`InjectionLocus`]
//! - **Errors**: [`TransformError`], [`ErrorKind`]
//! - **Traits**: [`Chain`]
//! - **Wrappers**: [`retry`], [`coerce_into`], [`mutation_free`], [`deprecated`]
//!
//! # Examples
//!
//! ```
//! use chain_rail::prelude::*;
//!
//! fn parse_port(raw: &str) -> ChainResult<u16> {
//!     ResultChain::new(raw.to_owned())
//!         .apply(|s| s.trim().parse::<u16>().map(|port| port.to_string()))
//!         .with_context("parsing port")
//!         .unwrap()?
//!         .parse::<u16>()
//!         .map_err(TransformError::new)
//! }
//!
//! assert_eq!(parse_port(" 8080 ").unwrap(), 8080);
//! assert_eq!(parse_port("eighty").unwrap_err().error_chain(), "parsing port -> invalid digit found in string");
//! ```

pub use crate::traits::Chain;
pub use crate::types::{
    Arguments, Call, Chainable, ErrorKind, InjectionLocus, OptionalChain, ResultChain,
    SequenceChain, TransformError,
};
pub use crate::wrappers::{
    coerce_for, coerce_if, coerce_into, deprecated, mutation_free, retry, retry_for, retry_if,
};

/// Result type produced when a [`ResultChain`] is resolved.
pub type ChainResult<T> = Result<T, TransformError>;
