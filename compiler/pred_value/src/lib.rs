#![allow(
    clippy::result_large_err,
    reason = "EvalError is fundamental; boxing would add indirection on every fallible call"
)]
//! Pred Value - runtime values and errors for the predicate engine.
//!
//! This crate provides:
//! - The host value model (`Value`, `Heap`, `FunctionValue`, `Object`, `Array`)
//! - Type classification (`TypeFlags`)
//! - Evaluation error types (`EvalError`, `EvalErrorKind`, `EvalResult`)
//!
//! # Value Types
//!
//! All heap allocations go through `Value::` factory methods; `Heap<T>`
//! enforces this with a private constructor. Reference counting is
//! thread-safe (`Arc`), and shared containers lock internally.

mod errors;
mod value;

pub use errors::{ErrorCategory, EvalError, EvalErrorKind, EvalResult};
pub use value::{
    format_number, quote_string, Array, ArrayRef, FunctionValue, Heap, NativeFn, Object,
    ObjectRef, TypeFlags, Value,
};

// Error constructors for use by other crates
pub use errors::{
    argument_underflow, not_callable, not_object, regex_compile_failed, thrown, type_mismatch,
};
