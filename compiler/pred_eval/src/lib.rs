#![allow(
    clippy::result_large_err,
    reason = "EvalError carries the thrown host value; boxing would add indirection on every ?"
)]
//! Pred Eval - evaluator for predicate trees.
//!
//! This crate provides:
//! - `Interpreter`: `call`, `value` and `eval` over a shared argument cursor
//! - `Cursor`: the position-advancing argument view threaded through a call
//! - Operator kernels for unary and binary nodes
//! - `Captures`: regex match spans and their export to host values
//! - `EvalConfig`: underflow policy and capture limits

mod captures;
mod config;
mod cursor;
mod interpreter;
mod operators;
mod unary_operators;

pub use captures::Captures;
pub use config::{EvalConfig, UnderflowPolicy, DEFAULT_MAX_REGEX_CAPTURES};
pub use cursor::{ArgBuffer, Cursor};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use operators::evaluate_binary;
pub use unary_operators::evaluate_unary;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `RUST_LOG`-filtered subscriber for evaluator spans.
///
/// Safe to call more than once. Does nothing when `RUST_LOG` is unset or a
/// global subscriber already exists. Try `RUST_LOG=pred_eval=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
