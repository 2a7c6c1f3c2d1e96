//! Structural dump: `Predicate.<kind>(<detail>)`.
//!
//! Meant for logs. Nested predicates dump recursively, unset slots print as
//! `undefined`, literals print as source literals.

use std::fmt::Write;

use pred_ir::{unset_node, CompareOp, Operand, Predicate, UnaryOp};
use pred_value::Value;

/// Dump `predicate`.
///
/// # Panics
///
/// Panics if the tree contains an unset node.
pub fn dump(predicate: &Predicate) -> String {
    let mut out = String::new();
    write_predicate(&mut out, predicate);
    out
}

fn write_operand(out: &mut String, operand: &Operand) {
    match operand {
        Operand::Unset => out.push_str("undefined"),
        Operand::Predicate(predicate) => write_predicate(out, predicate),
        Operand::Value(value) => push_display(out, value),
    }
}

fn push_display(out: &mut String, value: &impl std::fmt::Display) {
    // Writing to a String cannot fail.
    let _ = write!(out, "{value}");
}

fn write_predicate(out: &mut String, predicate: &Predicate) {
    let detail = &mut String::new();
    match predicate {
        Predicate::Unset => unset_node("dump"),
        Predicate::Type(flags) => {
            detail.push_str("type == ");
            push_display(detail, flags);
        }
        Predicate::Charset(set) => {
            detail.push_str("[ ");
            let chars = set.chars();
            for (i, &c) in chars.iter().enumerate() {
                if i > 0 {
                    detail.push_str(", ");
                }
                push_char(detail, c);
            }
            let _ = write!(detail, " (len = {}) ]", chars.len());
        }
        Predicate::String(bytes) => {
            detail.push('\'');
            push_escaped(detail, bytes);
            detail.push('\'');
        }
        Predicate::Unary { op, operand } => {
            detail.push_str(match op {
                UnaryOp::NotNot => "!!( ",
                UnaryOp::Not => "!( ",
                UnaryOp::BitNot => "~( ",
                UnaryOp::Sqrt => "sqrt( ",
            });
            write_operand(detail, operand);
            detail.push_str(" )");
        }
        Predicate::Binary { op, left, right } => {
            detail.push('(');
            write_operand(detail, left);
            let _ = write!(detail, " {} ", op.as_symbol());
            write_operand(detail, right);
            detail.push(')');
        }
        Predicate::Boolean { operands, .. } => {
            for (i, operand) in operands.iter().enumerate() {
                if i > 0 {
                    detail.push_str(", ");
                }
                write_operand(detail, operand);
            }
        }
        Predicate::Regex(regex) => {
            let _ = write!(detail, "/{}/{}", regex.source(), regex.flags());
        }
        Predicate::Compare {
            op: CompareOp::InstanceOf,
            value: Value::Function(ctor),
        } => detail.push_str(ctor.name()),
        Predicate::Compare { value, .. } => push_display(detail, value),
        Predicate::Property { name, filter } => {
            match name {
                Some(name) => {
                    let _ = write!(detail, "'{name}'");
                }
                None => detail.push_str("[key]"),
            }
            if let Some(filter) = filter {
                detail.push_str(", ");
                write_operand(detail, filter);
            }
        }
        Predicate::Member { object } => push_display(detail, object),
        Predicate::Shift { count, operand } => {
            let _ = write!(detail, ">> {count} ");
            write_operand(detail, operand);
        }
        Predicate::Function { arity, .. } => {
            let _ = write!(detail, "func({arity})");
        }
    }
    out.push_str("Predicate.");
    out.push_str(predicate.kind().name());
    out.push('(');
    out.push_str(detail);
    out.push(')');
}

fn push_char(out: &mut String, c: char) {
    let code = u32::from(c);
    let _ = match code {
        0..=0x7f => write!(out, "'{}'", c.escape_default()),
        0x80..=0xffff => write!(out, "'\\u{code:04x}'"),
        _ => write!(out, "'\\u{code:06x}'"),
    };
}

fn push_escaped(out: &mut String, bytes: &[u8]) {
    for &b in bytes {
        match b {
            b'\'' => out.push_str("\\'"),
            b'\\' => out.push_str("\\\\"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            0x20..=0x7e => out.push(char::from(b)),
            _ => {
                let _ = write!(out, "\\x{b:02x}");
            }
        }
    }
}
