//! Rendering rules that are independent of the tree walk.
//!
//! - [`parentheses`]: when a child expression needs parens
//! - [`header`]: stripping a generated `x => x` header when inlining
//! - [`regex_literal`]: escaping pattern text between `/` delimiters

pub mod header;
pub mod parentheses;
pub mod regex_literal;

pub use header::strip_param_header;
pub use parentheses::{needs_parens, ParenPosition};
pub use regex_literal::escape_regex_source;
