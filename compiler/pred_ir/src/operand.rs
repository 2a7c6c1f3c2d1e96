//! Operand slots.

use std::sync::Arc;

use pred_value::Value;

use crate::operators::Precedence;
use crate::Predicate;

/// What a node stores in an operand slot.
///
/// Evaluation resolves the three shapes differently: a nested predicate
/// keeps consuming the shared cursor, a literal passes through unchanged,
/// and an unset slot takes the next cursor argument.
#[derive(Clone, Debug, Default)]
pub enum Operand {
    /// Consume the next argument at evaluation time.
    #[default]
    Unset,
    /// A nested predicate, shared by reference count.
    Predicate(Arc<Predicate>),
    /// A literal value (possibly a callable).
    Value(Value),
}

impl Operand {
    #[inline]
    pub fn is_unset(&self) -> bool {
        matches!(self, Operand::Unset)
    }

    pub fn as_predicate(&self) -> Option<&Predicate> {
        match self {
            Operand::Predicate(p) => Some(p),
            _ => None,
        }
    }

    /// Arguments this slot consumes: one when unset, the nested count for a
    /// predicate, none for a literal.
    pub fn arg_count(&self) -> usize {
        match self {
            Operand::Unset => 1,
            Operand::Predicate(p) => p.recursive_arg_count(),
            Operand::Value(_) => 0,
        }
    }

    /// Precedence of the slot's rendering. Names and literals are atoms.
    pub fn precedence(&self) -> Precedence {
        match self {
            Operand::Predicate(p) => p.precedence(),
            Operand::Unset | Operand::Value(_) => Precedence::MemberAccess,
        }
    }
}

impl From<Predicate> for Operand {
    fn from(p: Predicate) -> Self {
        Operand::Predicate(Arc::new(p))
    }
}

impl From<Arc<Predicate>> for Operand {
    fn from(p: Arc<Predicate>) -> Self {
        Operand::Predicate(p)
    }
}

impl From<Value> for Operand {
    fn from(v: Value) -> Self {
        Operand::Value(v)
    }
}
