//! Unary operator kernels.

use pred_ir::UnaryOp;
use pred_value::Value;

/// Apply a unary operator.
///
/// `!!` and `!` coerce to boolean, `~` complements the 64-bit integer
/// conversion, `sqrt` works on the double conversion.
pub fn evaluate_unary(op: UnaryOp, value: &Value) -> Value {
    match op {
        UnaryOp::NotNot => Value::Bool(value.is_truthy()),
        UnaryOp::Not => Value::Bool(!value.is_truthy()),
        UnaryOp::BitNot => Value::Int(!value.to_int64()),
        UnaryOp::Sqrt => Value::Float(value.to_number().sqrt()),
    }
}
