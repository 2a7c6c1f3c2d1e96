#![allow(
    clippy::result_large_err,
    reason = "EvalError is shared with the evaluator; boxing would add indirection"
)]
//! Pred IR - predicate tree representation.
//!
//! This crate provides:
//! - `Predicate`: the closed node enum (27 kinds) with typed constructors
//! - `Operand`: the three-way operand slot (unset / nested / literal)
//! - Operator tables and precedence classes
//! - Lazy caches for charset decoding and regex compilation
//! - Introspection (`keys`, `values`, argument counts, `compile_regex`)
//!
//! Trees are built through constructors; there is no textual grammar.

mod charset;
mod introspect;
mod operand;
mod operators;
mod predicate;
mod regex;

pub use charset::Charset;
pub use introspect::OperandKey;
pub use operand::Operand;
pub use operators::{BinaryOp, BooleanOp, CompareOp, Precedence, PredicateKind, UnaryOp};
pub use predicate::{unset_node, Predicate};
pub use regex::{FlagParseError, RegexFlags, RegexPredicate};

// Re-exported so downstream crates agree on the regex engine types.
pub use regex_automata;

#[cfg(test)]
mod tests;
