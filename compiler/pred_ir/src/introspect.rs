//! Read-only queries over a node's operand slots.

use std::fmt;

use pred_value::{EvalError, Value};

use crate::operand::Operand;
use crate::predicate::{unset_node, Predicate};

/// Label of one operand slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OperandKey {
    Name(&'static str),
    Index(usize),
}

impl fmt::Display for OperandKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandKey::Name(name) => f.write_str(name),
            OperandKey::Index(i) => write!(f, "{i}"),
        }
    }
}

impl Predicate {
    /// Labels for the slots returned by [`Predicate::values`], in the same
    /// order.
    #[track_caller]
    pub fn keys(&self) -> Vec<OperandKey> {
        use OperandKey::Name;
        match self {
            Predicate::Unset => unset_node("keys()"),
            Predicate::Type(_) | Predicate::Regex(_) => Vec::new(),
            Predicate::Charset(_) => vec![Name("set")],
            Predicate::String(_) => vec![Name("string")],
            Predicate::Unary { .. } | Predicate::Compare { .. } | Predicate::Shift { .. } => {
                vec![Name("predicate")]
            }
            Predicate::Binary { .. } => vec![Name("left"), Name("right")],
            Predicate::Boolean { operands, .. } => {
                (0..operands.len()).map(OperandKey::Index).collect()
            }
            Predicate::Property { .. } => vec![Name("atom"), Name("predicate")],
            Predicate::Member { .. } => vec![Name("object")],
            Predicate::Function { .. } => vec![Name("func")],
        }
    }

    /// The node's immediate operands.
    ///
    /// Literal text (charset, string prefix, property name) is returned as a
    /// string value; an absent property name or filter as `undefined`.
    #[track_caller]
    pub fn values(&self) -> Vec<Operand> {
        match self {
            Predicate::Unset => unset_node("values()"),
            Predicate::Type(_) | Predicate::Regex(_) => Vec::new(),
            Predicate::Charset(cs) => vec![Operand::Value(Value::string(cs.set()))],
            Predicate::String(bytes) => {
                vec![Operand::Value(Value::string(String::from_utf8_lossy(bytes)))]
            }
            Predicate::Unary { operand, .. } | Predicate::Shift { operand, .. } => {
                vec![operand.clone()]
            }
            Predicate::Compare { value, .. } => vec![Operand::Value(value.clone())],
            Predicate::Binary { left, right, .. } => vec![left.clone(), right.clone()],
            Predicate::Boolean { operands, .. } => operands.to_vec(),
            Predicate::Property { name, filter } => vec![
                Operand::Value(name.as_deref().map_or(Value::Undefined, Value::string)),
                filter
                    .clone()
                    .unwrap_or(Operand::Value(Value::Undefined)),
            ],
            Predicate::Member { object } => vec![Operand::Value(object.clone())],
            Predicate::Function { func, .. } => vec![Operand::Value(Value::function(func.clone()))],
        }
    }

    /// Total arguments the tree consumes from one cursor, assuming no
    /// short-circuit and no regex sink.
    ///
    /// This sizes the parameter list for generated source. The count
    /// saturates at `usize::MAX`.
    #[track_caller]
    pub fn recursive_arg_count(&self) -> usize {
        match self {
            Predicate::Unset => unset_node("recursive_arg_count()"),
            Predicate::Type(_)
            | Predicate::Charset(_)
            | Predicate::String(_)
            | Predicate::Compare { .. }
            | Predicate::Regex(_)
            | Predicate::Member { .. } => 1,
            Predicate::Unary { operand, .. } => operand.arg_count(),
            Predicate::Binary { left, right, .. } => {
                left.arg_count().saturating_add(right.arg_count())
            }
            Predicate::Boolean { operands, .. } => operands
                .iter()
                .fold(0, |total, operand| total.saturating_add(operand.arg_count())),
            // The filter runs on its own cursor.
            Predicate::Property { name, .. } => 1 + usize::from(name.is_none()),
            Predicate::Shift { count, operand } => count.saturating_add(operand.arg_count()),
            Predicate::Function { arity, .. } => *arity,
        }
    }

    /// Arguments consumed by this node itself, ignoring nested predicates.
    #[track_caller]
    pub fn direct_arg_count(&self) -> usize {
        match self {
            Predicate::Unset => unset_node("direct_arg_count()"),
            Predicate::Type(_)
            | Predicate::Charset(_)
            | Predicate::String(_)
            | Predicate::Compare { .. }
            | Predicate::Regex(_)
            | Predicate::Member { .. } => 1,
            Predicate::Unary { operand, .. } => usize::from(operand.is_unset()),
            Predicate::Binary { left, right, .. } => {
                usize::from(left.is_unset()) + usize::from(right.is_unset())
            }
            Predicate::Boolean { operands, .. } => {
                operands.iter().filter(|o| o.is_unset()).count()
            }
            Predicate::Property { name, .. } => 1 + usize::from(name.is_none()),
            Predicate::Shift { count, .. } => *count,
            Predicate::Function { arity, .. } => *arity,
        }
    }

    /// Force regex compilation and return the capture-group count
    /// (including the whole-match group). Idempotent.
    ///
    /// # Panics
    ///
    /// If the node is not a regex node.
    #[track_caller]
    pub fn compile_regex(&self) -> Result<usize, EvalError> {
        match self {
            Predicate::Regex(re) => re.capture_count(),
            Predicate::Unset => unset_node("compile_regex()"),
            other => panic!("compile_regex() called on a `{}` predicate", other.kind().name()),
        }
    }
}
