//! Parenthesization of child expressions.
//!
//! A child is wrapped when it binds looser than its parent, or as tight
//! but on the side where the parent's associativity would regroup it.
//! Exponentiation adds one rule of its own: a unary expression or a
//! negative literal cannot stand as its left operand.

use pred_ir::{Operand, Precedence};
use pred_value::Value;

/// Where a child sits relative to its parent operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParenPosition {
    /// Left operand of an infix operator.
    Left,
    /// Right operand of an infix operator.
    Right,
    /// Operand of a prefix operator: `!x`, `~x`.
    Prefix,
    /// Member of an `||`/`&&`/`^` chain; chains are flat.
    Chain,
}

/// Whether `child` must be parenthesized under a `parent` operator.
pub fn needs_parens(parent: Precedence, child: &Operand, position: ParenPosition) -> bool {
    let child_prec = child.precedence();
    if child_prec < parent {
        return true;
    }

    match position {
        ParenPosition::Left => {
            if parent == Precedence::Exponentiation
                && (child_prec == Precedence::Unary || is_negative_literal(child))
            {
                return true;
            }
            child_prec == parent && parent.is_right_associative()
        }
        ParenPosition::Right => child_prec == parent && !parent.is_right_associative(),
        ParenPosition::Prefix | ParenPosition::Chain => false,
    }
}

fn is_negative_literal(operand: &Operand) -> bool {
    match operand {
        Operand::Value(Value::Int(n)) => *n < 0,
        Operand::Value(Value::Float(f)) => *f < 0.0,
        _ => false,
    }
}
