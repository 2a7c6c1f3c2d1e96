//! The predicate node.
//!
//! # Ownership
//!
//! A node owns its literal buffers and holds one reference to every value
//! or nested node it mentions. `Clone` copies the node's own buffers and
//! bumps the reference count of everything it points at; `free` releases
//! all of it and leaves the node unset.
//!
//! # Lazy Caches
//!
//! Charset decoding and regex compilation fill `OnceLock` cells on first
//! evaluation. A clone keeps the decoded charset but always starts with an
//! uncompiled regex.

use pred_value::{FunctionValue, TypeFlags, Value};

use crate::charset::Charset;
use crate::operand::Operand;
use crate::operators::{BinaryOp, BooleanOp, CompareOp, Precedence, PredicateKind, UnaryOp};
use crate::regex::{RegexFlags, RegexPredicate};

/// One node of a predicate tree.
#[derive(Clone, Debug, Default)]
pub enum Predicate {
    /// Cleared node. Never valid for evaluation, printing or introspection.
    #[default]
    Unset,
    /// Argument's type category intersects the mask.
    Type(TypeFlags),
    /// Every code point of the argument is in the set.
    Charset(Charset),
    /// The argument starts with these bytes.
    String(Box<[u8]>),
    Unary {
        op: UnaryOp,
        operand: Operand,
    },
    Binary {
        op: BinaryOp,
        left: Operand,
        right: Operand,
    },
    /// Or/And/Xor over a list fixed at construction.
    Boolean {
        op: BooleanOp,
        operands: Box<[Operand]>,
    },
    Regex(RegexPredicate),
    /// Compare one argument against a stored value.
    Compare {
        op: CompareOp,
        value: Value,
    },
    /// Read a property of the argument, optionally piping it through a filter.
    ///
    /// With no name, the key is taken from the cursor after the object.
    Property {
        name: Option<Box<str>>,
        filter: Option<Operand>,
    },
    /// Look the argument up as a key on a captured object.
    Member {
        object: Value,
    },
    /// Skip `count` arguments, then evaluate the operand.
    Shift {
        count: usize,
        operand: Operand,
    },
    /// Call `func` on `this` with the next `arity` arguments.
    Function {
        func: FunctionValue,
        this: Value,
        arity: usize,
    },
}

/// Abort on an unset node. Reaching this is a bug in the caller.
/// Abort an operation that reached an unset node.
#[cold]
#[track_caller]
pub fn unset_node(operation: &str) -> ! {
    panic!("{operation} called on an unset predicate")
}

// Type-test constructors

impl Predicate {
    pub fn type_of(flags: TypeFlags) -> Self {
        Predicate::Type(flags)
    }

    pub fn undefined() -> Self {
        Self::type_of(TypeFlags::UNDEFINED)
    }

    pub fn null() -> Self {
        Self::type_of(TypeFlags::NULL)
    }

    pub fn bool() -> Self {
        Self::type_of(TypeFlags::BOOL)
    }

    pub fn int() -> Self {
        Self::type_of(TypeFlags::INT)
    }

    pub fn object() -> Self {
        Self::type_of(TypeFlags::OBJECT)
    }

    pub fn string_type() -> Self {
        Self::type_of(TypeFlags::STRING)
    }

    pub fn symbol() -> Self {
        Self::type_of(TypeFlags::SYMBOL)
    }

    pub fn big_float() -> Self {
        Self::type_of(TypeFlags::BIG_FLOAT)
    }

    pub fn big_int() -> Self {
        Self::type_of(TypeFlags::BIG_INT)
    }

    pub fn big_decimal() -> Self {
        Self::type_of(TypeFlags::BIG_DECIMAL)
    }

    pub fn float64() -> Self {
        Self::type_of(TypeFlags::FLOAT64)
    }

    pub fn number() -> Self {
        Self::type_of(TypeFlags::NUMBER)
    }

    pub fn primitive() -> Self {
        Self::type_of(TypeFlags::PRIMITIVE)
    }

    pub fn all() -> Self {
        Self::type_of(TypeFlags::ALL)
    }

    pub fn function_type() -> Self {
        Self::type_of(TypeFlags::FUNCTION)
    }

    pub fn array() -> Self {
        Self::type_of(TypeFlags::ARRAY)
    }
}

// Literal constructors

impl Predicate {
    pub fn charset(set: &str) -> Self {
        Predicate::Charset(Charset::new(set))
    }

    pub fn string(prefix: impl AsRef<[u8]>) -> Self {
        Predicate::String(prefix.as_ref().into())
    }

    pub fn regex(source: &str, flags: RegexFlags) -> Self {
        Predicate::Regex(RegexPredicate::new(source, flags))
    }
}

// Operator constructors

impl Predicate {
    pub fn unary(op: UnaryOp, operand: impl Into<Operand>) -> Self {
        Predicate::Unary {
            op,
            operand: operand.into(),
        }
    }

    pub fn notnot(operand: impl Into<Operand>) -> Self {
        Self::unary(UnaryOp::NotNot, operand)
    }

    pub fn not(operand: impl Into<Operand>) -> Self {
        Self::unary(UnaryOp::Not, operand)
    }

    pub fn bnot(operand: impl Into<Operand>) -> Self {
        Self::unary(UnaryOp::BitNot, operand)
    }

    pub fn sqrt(operand: impl Into<Operand>) -> Self {
        Self::unary(UnaryOp::Sqrt, operand)
    }

    pub fn binary(op: BinaryOp, left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Predicate::Binary {
            op,
            left: left.into(),
            right: right.into(),
        }
    }

    pub fn add(left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Self::binary(BinaryOp::Add, left, right)
    }

    pub fn sub(left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Self::binary(BinaryOp::Sub, left, right)
    }

    pub fn mul(left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Self::binary(BinaryOp::Mul, left, right)
    }

    pub fn div(left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Self::binary(BinaryOp::Div, left, right)
    }

    pub fn modulo(left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Self::binary(BinaryOp::Mod, left, right)
    }

    pub fn bor(left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Self::binary(BinaryOp::BitOr, left, right)
    }

    pub fn band(left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Self::binary(BinaryOp::BitAnd, left, right)
    }

    pub fn pow(left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Self::binary(BinaryOp::Pow, left, right)
    }

    pub fn atan2(left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Self::binary(BinaryOp::Atan2, left, right)
    }

    pub fn boolean<I>(op: BooleanOp, operands: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        Predicate::Boolean {
            op,
            operands: operands.into_iter().map(Into::into).collect(),
        }
    }

    pub fn or<I>(operands: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        Self::boolean(BooleanOp::Or, operands)
    }

    pub fn and<I>(operands: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        Self::boolean(BooleanOp::And, operands)
    }

    pub fn xor<I>(operands: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        Self::boolean(BooleanOp::Xor, operands)
    }
}

// Relation and access constructors

impl Predicate {
    pub fn instance_of(ctor: Value) -> Self {
        Predicate::Compare {
            op: CompareOp::InstanceOf,
            value: ctor,
        }
    }

    pub fn prototype_is(prototype: Value) -> Self {
        Predicate::Compare {
            op: CompareOp::PrototypeIs,
            value: prototype,
        }
    }

    pub fn equal(value: Value) -> Self {
        Predicate::Compare {
            op: CompareOp::Equal,
            value,
        }
    }

    /// Property read. `name: None` takes the key from the cursor.
    pub fn property(name: Option<&str>, filter: Option<Operand>) -> Self {
        Predicate::Property {
            name: name.map(Into::into),
            filter,
        }
    }

    pub fn member(object: Value) -> Self {
        Predicate::Member { object }
    }

    pub fn shift(count: usize, operand: impl Into<Operand>) -> Self {
        Predicate::Shift {
            count,
            operand: operand.into(),
        }
    }

    /// Call node taking as many arguments as `func` declares.
    pub fn function(func: FunctionValue, this: Value) -> Self {
        let arity = func.arity();
        Self::function_with_arity(func, this, arity)
    }

    pub fn function_with_arity(func: FunctionValue, this: Value, arity: usize) -> Self {
        Predicate::Function { func, this, arity }
    }
}

// Classification and lifecycle

impl Predicate {
    /// Node kind.
    ///
    /// # Panics
    ///
    /// On an unset node.
    #[track_caller]
    pub fn kind(&self) -> PredicateKind {
        match self {
            Predicate::Unset => unset_node("kind()"),
            Predicate::Type(_) => PredicateKind::Type,
            Predicate::Charset(_) => PredicateKind::Charset,
            Predicate::String(_) => PredicateKind::String,
            Predicate::Unary { op, .. } => op.kind(),
            Predicate::Binary { op, .. } => op.kind(),
            Predicate::Boolean { op, .. } => op.kind(),
            Predicate::Regex(_) => PredicateKind::Regex,
            Predicate::Compare { op, .. } => op.kind(),
            Predicate::Property { .. } => PredicateKind::Property,
            Predicate::Member { .. } => PredicateKind::Member,
            Predicate::Shift { .. } => PredicateKind::Shift,
            Predicate::Function { .. } => PredicateKind::Function,
        }
    }

    #[inline]
    pub fn is_unset(&self) -> bool {
        matches!(self, Predicate::Unset)
    }

    /// Precedence class of this node's source rendering.
    #[track_caller]
    pub fn precedence(&self) -> Precedence {
        match self {
            Predicate::Unset => unset_node("precedence()"),
            Predicate::Type(flags) => match flags.type_names().len() {
                0 => Precedence::MemberAccess,
                1 => Precedence::Equality,
                _ => Precedence::LogicalOr,
            },
            Predicate::Unary { op, .. } => op.precedence(),
            Predicate::Binary { op, .. } => op.precedence(),
            Predicate::Boolean { op, .. } => op.precedence(),
            Predicate::Compare { op, .. } => op.precedence(),
            Predicate::Shift { operand, .. } => operand.precedence(),
            Predicate::Charset(_)
            | Predicate::String(_)
            | Predicate::Regex(_)
            | Predicate::Property { .. }
            | Predicate::Member { .. }
            | Predicate::Function { .. } => Precedence::MemberAccess,
        }
    }

    /// Release every owned buffer and reference, leaving the node unset.
    ///
    /// Never evaluates anything. Freeing an unset node is a no-op.
    pub fn free(&mut self) {
        *self = Predicate::Unset;
    }
}
