//! Traits shared across the container family.
//!
//! - [`Chain`]: the common `then`/`then_with` capability every container
//!   implements, so pipelines can be written once and run on any variant
//! - [`Variant`]: the closed set of container variants, used for rendering
//!   and variant-sensitive comparisons

pub mod chain;

pub use chain::{Chain, Variant};
