//! Pred Fmt - text renderings of predicate trees.
//!
//! Two renderings are provided:
//! - [`to_source`]: an arrow-function expression equivalent to evaluating
//!   the tree, with one parameter per consumed argument
//! - [`dump`]: a kind-tagged structural rendering for logs and debugging
//!
//! Both panic on an unset node.

mod dump;
mod error;
mod params;
pub mod rules;
mod source;

pub use dump::dump;
pub use error::FormatError;
pub use params::ParamNames;
pub use source::{to_source, Source};
