//! Tree-walking evaluator for predicate trees.
//!
//! # Argument Threading
//!
//! One [`Cursor`] is created per call boundary and passed by `&mut` through
//! the whole walk. Every node that takes an argument shifts it from that
//! cursor, so sibling operands consume arguments left to right. Only
//! [`Interpreter::call`] starts a new cursor; [`Interpreter::value`]
//! continues the caller's.
//!
//! # Operand Resolution
//!
//! | Slot | Result |
//! |------|--------|
//! | unset | next cursor argument |
//! | nested predicate | evaluated on the same cursor |
//! | literal callable | called with the remaining arguments, consuming none |
//! | other literal | returned unchanged |

mod builder;

pub use builder::InterpreterBuilder;

use pred_ir::{
    unset_node, BooleanOp, CompareOp, Operand, Predicate, RegexFlags, RegexPredicate,
};
use pred_value::{not_object, EvalResult, Heap, Value};

use crate::captures::Captures;
use crate::config::EvalConfig;
use crate::cursor::Cursor;
use crate::operators::evaluate_binary;
use crate::unary_operators::evaluate_unary;

/// Evaluates predicate trees against argument lists.
///
/// Holds only configuration; trees carry their own caches, so one
/// interpreter can evaluate any number of trees.
#[derive(Clone, Debug, Default)]
pub struct Interpreter {
    config: EvalConfig,
}

impl Interpreter {
    /// Interpreter with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// A fresh cursor over `args` using this interpreter's underflow policy.
    pub fn cursor<'a>(&self, args: &'a [Value]) -> Cursor<'a> {
        Cursor::new(args, self.config.underflow)
    }

    /// Entry point: evaluate a predicate or call a callable with `args`.
    ///
    /// Anything else yields `undefined`.
    #[tracing::instrument(level = "debug", skip_all, fields(argc = args.len()))]
    pub fn call(&self, target: &Operand, args: &[Value]) -> EvalResult {
        match target {
            Operand::Predicate(predicate) => self.call_predicate(predicate, args),
            Operand::Value(Value::Function(func)) => func.call(&Value::Undefined, args),
            Operand::Unset | Operand::Value(_) => Ok(Value::Undefined),
        }
    }

    /// Evaluate `predicate` on a fresh cursor over `args`.
    pub fn call_predicate(&self, predicate: &Predicate, args: &[Value]) -> EvalResult {
        let mut cursor = self.cursor(args);
        self.eval(predicate, &mut cursor)
    }

    /// Resolve an operand slot against an in-progress cursor.
    pub fn value(&self, operand: &Operand, cursor: &mut Cursor<'_>) -> EvalResult {
        match operand {
            Operand::Unset => cursor.shift(),
            Operand::Predicate(predicate) => self.eval(predicate, cursor),
            Operand::Value(Value::Function(func)) => func.call(&Value::Undefined, cursor.rest()),
            Operand::Value(value) => Ok(value.clone()),
        }
    }

    /// Evaluate one node, consuming arguments from `cursor`.
    ///
    /// # Panics
    ///
    /// Panics if `predicate` is unset.
    #[tracing::instrument(level = "trace", skip_all, fields(pos = cursor.position()))]
    pub fn eval(&self, predicate: &Predicate, cursor: &mut Cursor<'_>) -> EvalResult {
        match predicate {
            Predicate::Unset => unset_node("eval"),
            Predicate::Type(flags) => {
                let arg = cursor.shift()?;
                Ok(Value::Bool(arg.type_flags().intersects(*flags)))
            }
            Predicate::Charset(set) => {
                let arg = cursor.shift()?;
                Ok(Value::Bool(set.contains_all(&arg.input_chars())))
            }
            Predicate::String(prefix) => {
                let arg = cursor.shift()?;
                Ok(Value::Bool(arg.input_bytes().starts_with(prefix)))
            }
            Predicate::Unary { op, operand } => {
                let value = self.value(operand, cursor)?;
                Ok(evaluate_unary(*op, &value))
            }
            Predicate::Binary { op, left, right } => {
                let l = self.value(left, cursor)?;
                let r = self.value(right, cursor)?;
                Ok(evaluate_binary(*op, &l, &r))
            }
            Predicate::Boolean { op, operands } => self.eval_boolean(*op, operands, cursor),
            Predicate::Regex(regex) => self.eval_regex(regex, cursor),
            Predicate::Compare { op, value } => {
                let arg = cursor.shift()?;
                let result = match op {
                    CompareOp::InstanceOf => arg.instance_of(value)?,
                    CompareOp::PrototypeIs => same_reference(&arg.prototype_of(), value),
                    CompareOp::Equal => arg == *value,
                };
                Ok(Value::Bool(result))
            }
            Predicate::Property { name, filter } => {
                let object = cursor.shift()?;
                if !object.is_object() {
                    return Err(not_object(object.type_name()));
                }
                let value = match name {
                    Some(name) => object.get_property(name)?,
                    None => {
                        let key = cursor.shift()?.to_text();
                        object.get_property(&key)?
                    }
                };
                match filter {
                    Some(filter) if is_applicable(filter) => self.call(filter, &[value]),
                    _ => Ok(value),
                }
            }
            Predicate::Member { object } => {
                let key = cursor.shift()?.to_text();
                if object.has_property(&key) {
                    object.get_property(&key)
                } else {
                    Ok(Value::Undefined)
                }
            }
            Predicate::Shift { count, operand } => {
                cursor.shift_n(*count)?;
                self.value(operand, cursor)
            }
            Predicate::Function { func, this, arity } => {
                let args = cursor.take(*arity)?;
                func.call(this, &args)
            }
        }
    }

    fn eval_boolean(
        &self,
        op: BooleanOp,
        operands: &[Operand],
        cursor: &mut Cursor<'_>,
    ) -> EvalResult {
        match op {
            BooleanOp::Or | BooleanOp::And => {
                let stop_on = op == BooleanOp::Or;
                let mut last = Value::Undefined;
                for operand in operands {
                    last = self.value(operand, cursor)?;
                    if last.is_truthy() == stop_on {
                        break;
                    }
                }
                Ok(last)
            }
            BooleanOp::Xor => {
                let mut acc = 0i64;
                for operand in operands {
                    acc ^= self.value(operand, cursor)?.to_int64();
                }
                Ok(Value::Int(acc))
            }
        }
    }

    /// Match the next argument; on success export captures into a trailing
    /// callback or array sink, if one is next on the cursor.
    fn eval_regex(&self, regex: &RegexPredicate, cursor: &mut Cursor<'_>) -> EvalResult {
        let compiled = regex.compiled()?;
        let input = cursor.shift()?;
        let sticky = regex.flags().contains(RegexFlags::STICKY);
        let Some(captures) = Captures::search(compiled, &input.input_bytes(), sticky) else {
            return Ok(Value::Bool(false));
        };

        let limit = self.config.max_regex_captures;
        match cursor.peek() {
            Some(Value::Function(callback)) => {
                cursor.shift()?;
                callback.call(&Value::Null, &[captures.to_value(limit), input])?;
            }
            Some(Value::Array(sink)) => {
                cursor.shift()?;
                captures.fill(sink, limit);
            }
            _ => {}
        }
        Ok(Value::Bool(true))
    }
}

/// A property filter runs only when it can be called.
fn is_applicable(filter: &Operand) -> bool {
    matches!(
        filter,
        Operand::Predicate(_) | Operand::Value(Value::Function(_))
    )
}

/// Reference identity for prototype comparison.
fn same_reference(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Object(a), Value::Object(b)) => Heap::ptr_eq(a, b),
        (Value::Null, Value::Null) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests;
