//! Error types for predicate evaluation.
//!
//! `EvalErrorKind` carries the structured data for each failure. Factory
//! functions (e.g., `type_mismatch()`) are the public construction API and
//! populate both `kind` and `message`.
//!
//! Conditions that indicate a broken invariant inside the engine itself
//! (for example, asking an unset node for its kind) are not errors: they
//! panic at the offending call site.

use crate::value::Value;
use std::fmt;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Coarse classification of an evaluation failure.
///
/// Lets callers separate "the input was wrong" from "the predicate tree was
/// built wrong" without matching on every kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The arguments supplied at evaluation time were unsuitable.
    BadInput,
    /// The predicate tree itself cannot be evaluated (bad pattern, bad constructor).
    MalformedPredicate,
    /// A host callable failed; the failure is passed through unchanged.
    Host,
}

/// Typed error category for structured diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// An operand had the wrong type for the requested operation.
    TypeMismatch { expected: String, got: String },
    /// Property access on something that is not an object.
    NotObject { got: String },
    /// A value was invoked but is not a function.
    NotCallable { type_name: String },
    /// More arguments were requested than remain in the cursor.
    ArgumentUnderflow { requested: usize, remaining: usize },
    /// A regular expression pattern failed to compile.
    RegexCompile { pattern: String, reason: String },
    /// A host callable threw.
    Thrown { message: String },
    /// Catch-all for errors without a structured kind.
    Custom { message: String },
}

impl EvalErrorKind {
    /// Classify this kind.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TypeMismatch { .. }
            | Self::NotObject { .. }
            | Self::ArgumentUnderflow { .. } => ErrorCategory::BadInput,
            Self::NotCallable { .. } | Self::RegexCompile { .. } => {
                ErrorCategory::MalformedPredicate
            }
            Self::Thrown { .. } | Self::Custom { .. } => ErrorCategory::Host,
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch { expected, got } => {
                write!(f, "type mismatch: expected {expected}, got {got}")
            }
            Self::NotObject { got } => write!(f, "cannot read properties of {got}"),
            Self::NotCallable { type_name } => write!(f, "{type_name} is not callable"),
            Self::ArgumentUnderflow {
                requested,
                remaining,
            } => {
                let arg_word = if *requested == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                write!(
                    f,
                    "requested {requested} {arg_word}, only {remaining} remaining"
                )
            }
            Self::RegexCompile { pattern, reason } => {
                write!(f, "invalid regular expression /{pattern}/: {reason}")
            }
            Self::Thrown { message } => write!(f, "uncaught: {message}"),
            Self::Custom { message } => write!(f, "{message}"),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable error message. Equals `kind.to_string()` for
    /// factory-created errors.
    pub message: String,
    /// The value a host callable threw, if any.
    pub thrown: Option<Value>,
}

impl EvalError {
    /// Create an error with just a message.
    ///
    /// Uses `Custom` kind. Prefer the factory functions when a structured
    /// kind applies.
    pub fn new(message: impl Into<String>) -> Self {
        let msg = message.into();
        Self {
            kind: EvalErrorKind::Custom {
                message: msg.clone(),
            },
            message: msg,
            thrown: None,
        }
    }

    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            thrown: None,
        }
    }

    /// Shorthand for `self.kind.category()`.
    #[inline]
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

// Type errors

/// Operand type did not match what the operation needs.
#[cold]
pub fn type_mismatch(expected: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        expected: expected.to_string(),
        got: got.to_string(),
    })
}

/// Property access on a non-object.
#[cold]
pub fn not_object(got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotObject {
        got: got.to_string(),
    })
}

/// Invocation of a value that is not a function.
#[cold]
pub fn not_callable(type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        type_name: type_name.to_string(),
    })
}

// Argument errors

/// Cursor ran out of arguments.
#[cold]
pub fn argument_underflow(requested: usize, remaining: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArgumentUnderflow {
        requested,
        remaining,
    })
}

// Pattern errors

/// Regular expression failed to compile.
#[cold]
pub fn regex_compile_failed(pattern: &str, reason: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RegexCompile {
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    })
}

// Host errors

/// A host callable threw `value`.
#[cold]
pub fn thrown(value: Value) -> EvalError {
    let mut err = EvalError::from_kind(EvalErrorKind::Thrown {
        message: value.to_text(),
    });
    err.thrown = Some(value);
    err
}
