//! Binary operator kernels.
//!
//! Both operands are converted to doubles. Bitwise operators convert each
//! side to a 64-bit integer first and return the combined integer as a
//! double.

use pred_ir::BinaryOp;
use pred_value::Value;

/// Apply an arithmetic binary operator.
pub fn evaluate_binary(op: BinaryOp, left: &Value, right: &Value) -> Value {
    let result = match op {
        BinaryOp::BitOr => int_as_float(left.to_int64() | right.to_int64()),
        BinaryOp::BitAnd => int_as_float(left.to_int64() & right.to_int64()),
        _ => eval_float_binary(op, left.to_number(), right.to_number()),
    };
    Value::Float(result)
}

fn eval_float_binary(op: BinaryOp, a: f64, b: f64) -> f64 {
    match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => a / b,
        // Truncated remainder, sign follows the dividend.
        BinaryOp::Mod => a % b,
        BinaryOp::Pow => a.powf(b),
        BinaryOp::Atan2 => a.atan2(b),
        BinaryOp::BitOr | BinaryOp::BitAnd => f64::NAN,
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "bitwise results are reported as doubles"
)]
fn int_as_float(n: i64) -> f64 {
    n as f64
}
