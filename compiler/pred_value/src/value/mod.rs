//! Runtime values observed and produced by predicates.
//!
//! # Heap Enforcement
//!
//! Every heap allocation goes through a `Value::` factory method. `Heap<T>`
//! has a private constructor, so external code cannot build heap variants
//! directly:
//!
//! ```text
//! let s = Value::string("hello");              // OK
//! let a = Value::array(vec![Value::int(1)]);   // OK
//! let s = Value::Str(Heap::new(...));          // ERROR: Heap::new is pub(super)
//! ```
//!
//! # Sharing
//!
//! Arrays and objects are shared and interior-mutable: cloning a `Value`
//! clones the handle, not the contents. Equality on them is structural;
//! symbols and functions compare by identity.
//!
//! Cyclic object graphs are not supported by `Display` or equality.

mod display;
mod function;
mod heap;
mod object;
mod type_flags;

use std::borrow::Cow;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::errors::{not_object, type_mismatch, EvalError};

pub use display::{format_number, quote_string};
pub use function::{FunctionValue, NativeFn};
pub use heap::Heap;
pub use object::{Array, ArrayRef, Object, ObjectRef};
pub use type_flags::TypeFlags;

/// 2^64 as an `f64`, for modular integer conversion.
const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

/// Runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    // Primitives
    Undefined,
    Null,
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Double-precision number.
    Float(f64),

    // Heap types (enforced through `Heap<T>`)
    /// Immutable string.
    Str(Heap<str>),
    /// Unique symbol; the payload is its description.
    Symbol(Heap<str>),
    /// Raw byte buffer.
    Bytes(Heap<[u8]>),
    /// Shared mutable array.
    Array(ArrayRef),
    /// Shared mutable object.
    Object(ObjectRef),
    /// Host callable.
    Function(FunctionValue),
}

// Factory methods

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    #[inline]
    pub fn float(f: f64) -> Self {
        Value::Float(f)
    }

    #[inline]
    pub fn bool(b: bool) -> Self {
        Value::Bool(b)
    }

    pub fn string(s: impl AsRef<str>) -> Self {
        Value::Str(Heap::from_arc(Arc::from(s.as_ref())))
    }

    /// A fresh symbol. Two calls with the same description yield unequal
    /// symbols.
    pub fn symbol(description: &str) -> Self {
        Value::Symbol(Heap::from_arc(Arc::from(description)))
    }

    pub fn bytes(data: impl Into<Vec<u8>>) -> Self {
        let data: Vec<u8> = data.into();
        Value::Bytes(Heap::from_arc(Arc::from(data)))
    }

    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Heap::new(Array::new(items)))
    }

    /// Plain object with no prototype.
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(Heap::new(Object::new(collect_props(entries), None)))
    }

    /// Object inheriting from `prototype`.
    pub fn object_with_prototype<K, I>(prototype: &ObjectRef, entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(Heap::new(Object::new(
            collect_props(entries),
            Some(prototype.clone()),
        )))
    }

    /// Allocate a bare object handle, for use as a constructor prototype.
    pub fn new_object_ref<K, I>(entries: I) -> ObjectRef
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Heap::new(Object::new(collect_props(entries), None))
    }

    #[inline]
    pub fn function(func: FunctionValue) -> Self {
        Value::Function(func)
    }
}

fn collect_props<K, I>(entries: I) -> IndexMap<String, Value>
where
    K: Into<String>,
    I: IntoIterator<Item = (K, Value)>,
{
    entries.into_iter().map(|(k, v)| (k.into(), v)).collect()
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<FunctionValue> for Value {
    fn from(func: FunctionValue) -> Self {
        Value::Function(func)
    }
}

// Classification

impl Value {
    /// Type category bits for this value.
    pub fn type_flags(&self) -> TypeFlags {
        match self {
            Value::Undefined => TypeFlags::UNDEFINED,
            Value::Null => TypeFlags::NULL,
            Value::Bool(_) => TypeFlags::BOOL,
            Value::Int(_) => TypeFlags::INT,
            Value::Float(_) => TypeFlags::FLOAT64,
            Value::Str(_) => TypeFlags::STRING,
            Value::Symbol(_) => TypeFlags::SYMBOL,
            Value::Bytes(_) | Value::Object(_) => TypeFlags::OBJECT,
            Value::Array(_) => TypeFlags::OBJECT | TypeFlags::ARRAY,
            Value::Function(_) => TypeFlags::OBJECT | TypeFlags::FUNCTION,
        }
    }

    /// Short type name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Int(_) | Value::Float(_) => "number",
            Value::Str(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Bytes(_) => "arraybuffer",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Function(_) => "function",
        }
    }

    /// Whether the value can carry properties.
    pub fn is_object(&self) -> bool {
        matches!(
            self,
            Value::Object(_) | Value::Array(_) | Value::Function(_) | Value::Bytes(_)
        )
    }

    #[inline]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    #[inline]
    pub fn as_function(&self) -> Option<&FunctionValue> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    #[inline]
    pub fn as_array(&self) -> Option<&ArrayRef> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }
}

// Conversions

impl Value {
    /// Truthiness: `undefined`, `null`, `false`, zero, NaN and the empty
    /// string are false; everything else is true.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Float(f) => *f != 0.0 && !f.is_nan(),
            Value::Str(s) => !s.is_empty(),
            Value::Symbol(_)
            | Value::Bytes(_)
            | Value::Array(_)
            | Value::Object(_)
            | Value::Function(_) => true,
        }
    }

    /// Numeric conversion.
    #[expect(
        clippy::cast_precision_loss,
        reason = "integer values beyond 2^53 round like any host number"
    )]
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Undefined => f64::NAN,
            Value::Null => 0.0,
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Int(n) => *n as f64,
            Value::Float(f) => *f,
            Value::Str(s) => parse_number(s),
            Value::Array(a) => match a.len() {
                0 => 0.0,
                1 => a.get(0).map_or(f64::NAN, |v| v.to_number()),
                _ => f64::NAN,
            },
            Value::Symbol(_) | Value::Bytes(_) | Value::Object(_) | Value::Function(_) => f64::NAN,
        }
    }

    /// Signed 64-bit integer conversion.
    ///
    /// NaN and infinities map to 0; other numbers truncate toward zero and
    /// wrap modulo 2^64.
    pub fn to_int64(&self) -> i64 {
        match self {
            Value::Int(n) => *n,
            Value::Bool(b) => i64::from(*b),
            other => f64_to_int64(other.to_number()),
        }
    }

    /// String conversion.
    pub fn to_text(&self) -> String {
        match self {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(f) => format_number(*f),
            Value::Str(s) => s.to_string(),
            Value::Symbol(d) => format!("Symbol({})", &**d),
            Value::Bytes(_) => "[object ArrayBuffer]".to_string(),
            Value::Array(a) => a
                .to_vec()
                .iter()
                .map(|v| match v {
                    Value::Undefined | Value::Null => String::new(),
                    other => other.to_text(),
                })
                .collect::<Vec<_>>()
                .join(","),
            Value::Object(_) => "[object Object]".to_string(),
            Value::Function(f) => match f.source() {
                Some(src) => src.to_string(),
                None => format!("function {}() {{ [native code] }}", f.name()),
            },
        }
    }

    /// Bytes to match against string and regex predicates.
    ///
    /// Strings give their UTF-8 bytes and buffers give themselves; anything
    /// else is converted to text first.
    pub fn input_bytes(&self) -> Cow<'_, [u8]> {
        match self {
            Value::Str(s) => Cow::Borrowed(s.as_bytes()),
            Value::Bytes(b) => Cow::Borrowed(&**b),
            other => Cow::Owned(other.to_text().into_bytes()),
        }
    }

    /// Code points to test against a character set.
    ///
    /// Buffers yield one code point per byte.
    pub fn input_chars(&self) -> Vec<char> {
        match self {
            Value::Str(s) => s.chars().collect(),
            Value::Bytes(b) => b.iter().map(|&byte| char::from(byte)).collect(),
            other => other.to_text().chars().collect(),
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "the value is reduced modulo 2^64 first; the i128 → i64 cast wraps intentionally"
)]
fn f64_to_int64(f: f64) -> i64 {
    if !f.is_finite() {
        return 0;
    }
    let reduced = f.trunc() % TWO_POW_64;
    (reduced as i128) as i64
}

#[expect(clippy::cast_precision_loss, reason = "large hex literals round")]
fn u64_to_f64(n: u64) -> f64 {
    n as f64
}

/// Parse a numeric string the way a host `Number()` conversion would.
fn parse_number(s: &str) -> f64 {
    let t = s.trim();
    if t.is_empty() {
        return 0.0;
    }
    match t {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if let Some(hex) = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        return u64::from_str_radix(hex, 16).map_or(f64::NAN, u64_to_f64);
    }
    if !t
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return f64::NAN;
    }
    t.parse::<f64>().unwrap_or(f64::NAN)
}

// Property access

impl Value {
    /// `self[key]`, following the prototype chain.
    ///
    /// Missing properties yield `undefined`. Fails only on `undefined` and
    /// `null`, which carry no properties at all.
    pub fn get_property(&self, key: &str) -> Result<Value, EvalError> {
        Ok(match self {
            Value::Undefined | Value::Null => return Err(not_object(self.type_name())),
            Value::Object(o) => o.get(key).unwrap_or(Value::Undefined),
            Value::Array(a) => {
                if key == "length" {
                    Value::Int(len_to_i64(a.len()))
                } else {
                    key.parse::<usize>()
                        .ok()
                        .and_then(|i| a.get(i))
                        .unwrap_or(Value::Undefined)
                }
            }
            Value::Str(s) => {
                if key == "length" {
                    Value::Int(len_to_i64(s.chars().count()))
                } else {
                    key.parse::<usize>()
                        .ok()
                        .and_then(|i| s.chars().nth(i))
                        .map_or(Value::Undefined, |c| Value::string(c.to_string()))
                }
            }
            Value::Bytes(b) => match key {
                "byteLength" => Value::Int(len_to_i64(b.len())),
                _ => Value::Undefined,
            },
            Value::Function(f) => match key {
                "name" => Value::string(f.name()),
                "length" => Value::Int(len_to_i64(f.arity())),
                "prototype" => f
                    .prototype()
                    .map_or(Value::Undefined, |p| Value::Object(p.clone())),
                _ => Value::Undefined,
            },
            Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Symbol(_) => {
                Value::Undefined
            }
        })
    }

    /// Whether `key` resolves on this value.
    pub fn has_property(&self, key: &str) -> bool {
        match self {
            Value::Object(o) => o.has(key),
            Value::Array(a) => {
                key == "length" || key.parse::<usize>().is_ok_and(|i| i < a.len())
            }
            Value::Function(f) => {
                matches!(key, "name" | "length") || (key == "prototype" && f.prototype().is_some())
            }
            Value::Str(s) => {
                key == "length" || key.parse::<usize>().is_ok_and(|i| i < s.chars().count())
            }
            Value::Bytes(_) => key == "byteLength",
            _ => false,
        }
    }

    /// The value's prototype, or `null` when it has none.
    pub fn prototype_of(&self) -> Value {
        match self {
            Value::Object(o) => o
                .prototype()
                .map_or(Value::Null, |p| Value::Object(p.clone())),
            _ => Value::Null,
        }
    }

    /// `self instanceof ctor`.
    ///
    /// `ctor` must be a function. A constructor without a prototype object
    /// has no instances.
    pub fn instance_of(&self, ctor: &Value) -> Result<bool, EvalError> {
        let Value::Function(func) = ctor else {
            return Err(type_mismatch("function", ctor.type_name()));
        };
        let (Some(proto), Value::Object(object)) = (func.prototype(), self) else {
            return Ok(false);
        };
        Ok(Object::is_prototype_of(proto, object))
    }
}

fn len_to_i64(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}

// Equality

/// Structural equality for containers, identity for symbols and functions,
/// numeric equality across `Int` and `Float`.
impl PartialEq for Value {
    #[expect(
        clippy::cast_precision_loss,
        reason = "mixed int/float comparison follows host number semantics"
    )]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                *a as f64 == *b
            }
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => Heap::ptr_eq(a, b),
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => Heap::ptr_eq(a, b) || a.to_vec() == b.to_vec(),
            (Value::Object(a), Value::Object(b)) => {
                Heap::ptr_eq(a, b) || {
                    let (ea, eb) = (a.entries(), b.entries());
                    ea.len() == eb.len()
                        && ea.iter().all(|(k, v)| b.get_own(k).is_some_and(|w| *v == w))
                }
            }
            (Value::Function(a), Value::Function(b)) => FunctionValue::ptr_eq(a, b),
            _ => false,
        }
    }
}
