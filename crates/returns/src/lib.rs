//! # Returns
//!
//! Containers for computations that may come up empty or fail, and pipelines
//! that stop at the first failure without raising to the caller.
//!
//! This crate provides:
//! - [`Maybe`] - `Some(value)` or `Nothing`
//! - [`Outcome`] - `Success(value)` or `Failure(error)`
//! - [`pipeline`] - boundary that turns a halted `unwrap` into the function's return value
//! - [`fault_to_outcome`] and [`absence_to_presence`] - adapters for `Result` and `Option` returning functions
//! - [`ReturnsError`] - errors from checked extraction
//!
//! ```
//! use returns::prelude::*;
//!
//! let checkout = pipeline(|(stock, wallet): (Maybe<u32>, Maybe<u32>)| {
//!     let units = stock.unwrap();
//!     let cents = wallet.unwrap();
//!     Maybe::from_value(cents.checked_div(units))
//! });
//!
//! assert_eq!(checkout((Maybe::Some(4), Maybe::Some(100))), Maybe::Some(25));
//! assert_eq!(checkout((Maybe::Nothing, Maybe::Some(100))), Maybe::Nothing);
//! ```

pub mod container;
pub mod error;
pub mod functions;
pub mod maybe;
pub mod outcome;
pub mod pipeline;
mod signal;

// Re-exports for convenience
pub use container::{Container, Unwrappable};
pub use error::{Result, ReturnsError};
pub use functions::{absence_to_presence, fault_to_outcome, is_successful};
pub use maybe::Maybe;
pub use outcome::Outcome;
pub use pipeline::{pipeline, PipelineReturn};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::container::{Container, Unwrappable};
    pub use crate::error::ReturnsError;
    pub use crate::functions::{absence_to_presence, fault_to_outcome, is_successful};
    pub use crate::maybe::Maybe;
    pub use crate::outcome::Outcome;
    pub use crate::pipeline::pipeline;
}
