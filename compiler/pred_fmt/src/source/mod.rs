//! Source regeneration.
//!
//! Renders a tree as an arrow function whose parameters are the arguments
//! the tree consumes, in consumption order:
//!
//! ```text
//! add(unset, unset)              (a, b) => (a + b)
//! and(string("ab"), int)         (a, b) => (a.startsWith("ab") && typeof b == "int")
//! property("x", property("n"))   (a) => a.x.n
//! ```
//!
//! Nested predicates render inline on the same [`ParamNames`]; only the
//! outermost call produces a header.
//!
//! The output reads as code but is not guaranteed to evaluate the same way.
//! Equality renders as `==` against the literal, while matching compares
//! arrays and objects by structure, so `a == [1, 2]` describes a structural
//! test.

use std::fmt;

use pred_ir::{
    unset_node, BinaryOp, BooleanOp, CompareOp, Operand, Precedence, Predicate, UnaryOp,
};
use pred_value::{quote_string, FunctionValue, Value};

use crate::rules::{escape_regex_source, needs_parens, strip_param_header, ParenPosition};
use crate::{FormatError, ParamNames};

/// A rendered arrow function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Source {
    params: Vec<String>,
    body: String,
    precedence: Precedence,
}

impl Source {
    /// Parameters in consumption order.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// The expression after `=>`, without grouping parens.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Precedence of the body's outermost operator.
    pub fn precedence(&self) -> Precedence {
        self.precedence
    }
}

/// `(a, b) => body`. Infix bodies are parenthesized.
impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) => ", self.params.join(", "))?;
        if self.precedence < Precedence::Unary {
            write!(f, "({})", self.body)
        } else {
            f.write_str(&self.body)
        }
    }
}

/// Regenerate source for `predicate`.
///
/// With `params`, names are drawn from (and appended to) the caller's list
/// starting at its current position. Without, the list is seeded with one
/// generated name per argument the tree consumes.
///
/// # Panics
///
/// Panics if the tree contains an unset node.
pub fn to_source(
    predicate: &Predicate,
    params: Option<&mut ParamNames>,
) -> Result<Source, FormatError> {
    let mut owned;
    let names = match params {
        Some(names) => names,
        None => {
            owned = ParamNames::seeded(predicate.recursive_arg_count())?;
            &mut owned
        }
    };
    let start = names.position();
    let body = SourceWriter { names: &mut *names }.predicate(predicate)?;
    let params = names.names()[start..names.position()].to_vec();
    Ok(Source {
        params,
        body,
        precedence: predicate.precedence(),
    })
}

struct SourceWriter<'n> {
    names: &'n mut ParamNames,
}

impl SourceWriter<'_> {
    fn arg(&mut self, hint: &str) -> Result<String, FormatError> {
        self.names.next(hint)
    }

    /// Render an operand slot; `hint` names it if it consumes an argument.
    fn operand(&mut self, operand: &Operand, hint: &str) -> Result<String, FormatError> {
        match operand {
            Operand::Unset => self.arg(hint),
            Operand::Predicate(predicate) => self.predicate(predicate),
            Operand::Value(Value::Function(func)) => Ok(format!("{}()", callee(func))),
            Operand::Value(value) => Ok(value.to_string()),
        }
    }

    fn wrapped(
        &mut self,
        parent: Precedence,
        operand: &Operand,
        position: ParenPosition,
    ) -> Result<String, FormatError> {
        let text = self.operand(operand, "value")?;
        if needs_parens(parent, operand, position) {
            Ok(format!("({text})"))
        } else {
            Ok(text)
        }
    }

    fn predicate(&mut self, predicate: &Predicate) -> Result<String, FormatError> {
        match predicate {
            Predicate::Unset => unset_node("to_source"),
            Predicate::Type(flags) => {
                let arg = self.arg("value")?;
                let tests: Vec<String> = flags
                    .type_names()
                    .into_iter()
                    .map(|name| format!("typeof {arg} == {}", quote_string(name)))
                    .collect();
                Ok(if tests.is_empty() {
                    "false".to_string()
                } else {
                    tests.join(" || ")
                })
            }
            Predicate::Charset(set) => {
                let arg = self.arg("chars")?;
                Ok(format!(
                    "[...{arg}].every((ch) => {}.includes(ch))",
                    quote_string(set.set())
                ))
            }
            Predicate::String(prefix) => {
                let arg = self.arg("string")?;
                Ok(format!(
                    "{arg}.startsWith({})",
                    quote_string(&String::from_utf8_lossy(prefix))
                ))
            }
            Predicate::Unary {
                op: UnaryOp::Sqrt,
                operand,
            } => Ok(format!("Math.sqrt({})", self.operand(operand, "value")?)),
            Predicate::Unary { op, operand } => {
                let inner = self.wrapped(Precedence::Unary, operand, ParenPosition::Prefix)?;
                Ok(format!("{}{inner}", op.as_symbol()))
            }
            Predicate::Binary {
                op: BinaryOp::Atan2,
                left,
                right,
            } => {
                let l = self.operand(left, "value")?;
                let r = self.operand(right, "value")?;
                Ok(format!("Math.atan2({l}, {r})"))
            }
            Predicate::Binary { op, left, right } => {
                let prec = op.precedence();
                let l = self.wrapped(prec, left, ParenPosition::Left)?;
                let r = self.wrapped(prec, right, ParenPosition::Right)?;
                Ok(format!("{l} {} {r}", op.as_symbol()))
            }
            Predicate::Boolean { op, operands } => self.boolean(*op, operands),
            Predicate::Regex(regex) => {
                let arg = self.arg("input")?;
                Ok(format!(
                    "/{}/{}.test({arg})",
                    escape_regex_source(regex.source()),
                    regex.flags()
                ))
            }
            Predicate::Compare { op, value } => {
                let arg = self.arg(if *op == CompareOp::Equal { "value" } else { "object" })?;
                Ok(match op {
                    CompareOp::Equal => format!("{arg} == {value}"),
                    CompareOp::InstanceOf => {
                        let ctor = match value {
                            Value::Function(func) => callee(func),
                            other => other.to_string(),
                        };
                        format!("{arg} instanceof {ctor}")
                    }
                    CompareOp::PrototypeIs => format!("Object.getPrototypeOf({arg}) == {value}"),
                })
            }
            Predicate::Property { name, filter } => {
                let object = self.arg("object")?;
                let access = match name {
                    Some(name) => member_access(&object, name),
                    None => format!("{object}[{}]", self.arg("key")?),
                };
                match filter {
                    Some(filter) => apply_filter(filter, access),
                    None => Ok(access),
                }
            }
            Predicate::Member { object } => {
                let key = self.arg("key")?;
                Ok(match object {
                    Value::Object(_) => format!("({object})[{key}]"),
                    _ => format!("{object}[{key}]"),
                })
            }
            Predicate::Shift { count, operand } => {
                self.names.reserve_ahead(*count)?;
                for _ in 0..*count {
                    self.arg("skip")?;
                }
                self.operand(operand, "value")
            }
            Predicate::Function { func, this, arity } => {
                self.names.reserve_ahead(*arity)?;
                let args = (0..*arity)
                    .map(|_| self.arg("arg"))
                    .collect::<Result<Vec<_>, _>>()?;
                let callee = callee(func);
                Ok(if this.is_undefined() {
                    format!("{callee}({})", args.join(", "))
                } else {
                    let mut call_args = vec![this.to_string()];
                    call_args.extend(args);
                    format!("{callee}.call({})", call_args.join(", "))
                })
            }
        }
    }

    fn boolean(&mut self, op: BooleanOp, operands: &[Operand]) -> Result<String, FormatError> {
        if operands.is_empty() {
            return Ok(match op {
                BooleanOp::Xor => "0".to_string(),
                BooleanOp::Or | BooleanOp::And => "undefined".to_string(),
            });
        }
        let prec = op.precedence();
        let parts = operands
            .iter()
            .map(|operand| self.wrapped(prec, operand, ParenPosition::Chain))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(parts.join(&format!(" {} ", op.as_symbol())))
    }
}

/// `f` for a named native, `(source)` when source text is known.
fn callee(func: &FunctionValue) -> String {
    match func.source() {
        Some(source) => format!("({source})"),
        None if func.name().is_empty() => "anonymous".to_string(),
        None => func.name().to_string(),
    }
}

/// `obj.name`, or `obj["name"]` when the name is not an identifier.
fn member_access(object: &str, name: &str) -> String {
    let is_ident = name
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if is_ident {
        format!("{object}.{name}")
    } else {
        format!("{object}[{}]", quote_string(name))
    }
}

/// Pipe `access` through a property filter.
///
/// A single-parameter filter whose body only extends its parameter is
/// spliced on; anything else becomes an explicit call. Literal filters are
/// never applied at evaluation, so they render nothing.
fn apply_filter(filter: &Operand, access: String) -> Result<String, FormatError> {
    let source = match filter {
        Operand::Predicate(predicate) => to_source(predicate, None)?.to_string(),
        Operand::Value(Value::Function(func)) => match func.source() {
            Some(source) => source.to_string(),
            None => return Ok(format!("{}({access})", callee(func))),
        },
        Operand::Unset | Operand::Value(_) => return Ok(access),
    };
    Ok(match strip_param_header(&source) {
        Some(tail) => format!("{access}{tail}"),
        None => format!("({source})({access})"),
    })
}
