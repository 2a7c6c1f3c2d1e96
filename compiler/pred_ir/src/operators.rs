//! Operator tables shared by the evaluator and the printers.
//!
//! Each operator family knows its source symbol, its dump name and its
//! precedence class. Precedence drives parenthesization in generated source.

/// Precedence classes, lowest binding first.
///
/// `Ord` follows binding strength: `a < b` means `a` binds less tightly.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    LogicalOr,
    LogicalAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    Equality,
    Relational,
    Additive,
    Multiplicative,
    Exponentiation,
    Unary,
    /// Calls, member access and atoms.
    MemberAccess,
}

impl Precedence {
    /// Whether operators at this level group to the right (`a ** b ** c`).
    pub const fn is_right_associative(self) -> bool {
        matches!(self, Self::Exponentiation)
    }
}

/// Single-operand operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// Boolean coercion (`!!x`).
    NotNot,
    /// Logical negation.
    Not,
    /// 64-bit bitwise complement.
    BitNot,
    /// Floating square root.
    Sqrt,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::NotNot => "!!",
            Self::Not => "!",
            Self::BitNot => "~",
            Self::Sqrt => "Math.sqrt",
        }
    }

    pub const fn precedence(self) -> Precedence {
        match self {
            Self::NotNot | Self::Not | Self::BitNot => Precedence::Unary,
            Self::Sqrt => Precedence::MemberAccess,
        }
    }

    pub const fn kind(self) -> PredicateKind {
        match self {
            Self::NotNot => PredicateKind::NotNot,
            Self::Not => PredicateKind::Not,
            Self::BitNot => PredicateKind::BitNot,
            Self::Sqrt => PredicateKind::Sqrt,
        }
    }
}

/// Arithmetic binary operators. Operands are converted to doubles.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    BitOr,
    BitAnd,
    Pow,
    Atan2,
}

impl BinaryOp {
    /// Infix symbol. `Atan2` has no infix form and renders as `atan2`.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::BitOr => "|",
            Self::BitAnd => "&",
            Self::Pow => "**",
            Self::Atan2 => "atan2",
        }
    }

    pub const fn precedence(self) -> Precedence {
        match self {
            Self::Add | Self::Sub => Precedence::Additive,
            Self::Mul | Self::Div | Self::Mod => Precedence::Multiplicative,
            Self::Pow => Precedence::Exponentiation,
            Self::BitOr => Precedence::BitwiseOr,
            Self::BitAnd => Precedence::BitwiseAnd,
            // Rendered as a call: Math.atan2(l, r)
            Self::Atan2 => Precedence::MemberAccess,
        }
    }

    pub const fn kind(self) -> PredicateKind {
        match self {
            Self::Add => PredicateKind::Add,
            Self::Sub => PredicateKind::Sub,
            Self::Mul => PredicateKind::Mul,
            Self::Div => PredicateKind::Div,
            Self::Mod => PredicateKind::Mod,
            Self::BitOr => PredicateKind::BitOr,
            Self::BitAnd => PredicateKind::BitAnd,
            Self::Pow => PredicateKind::Pow,
            Self::Atan2 => PredicateKind::Atan2,
        }
    }
}

/// Variadic boolean combinators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BooleanOp {
    Or,
    And,
    Xor,
}

impl BooleanOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Or => "||",
            Self::And => "&&",
            Self::Xor => "^",
        }
    }

    pub const fn precedence(self) -> Precedence {
        match self {
            Self::Or => Precedence::LogicalOr,
            Self::And => Precedence::LogicalAnd,
            Self::Xor => Precedence::BitwiseXor,
        }
    }

    pub const fn kind(self) -> PredicateKind {
        match self {
            Self::Or => PredicateKind::Or,
            Self::And => PredicateKind::And,
            Self::Xor => PredicateKind::Xor,
        }
    }
}

/// Relations between one argument and a stored value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CompareOp {
    /// `arg instanceof stored`.
    InstanceOf,
    /// `Object.getPrototypeOf(arg) == stored`, by identity.
    PrototypeIs,
    /// Structural equality.
    Equal,
}

impl CompareOp {
    pub const fn precedence(self) -> Precedence {
        match self {
            Self::InstanceOf => Precedence::Relational,
            Self::PrototypeIs | Self::Equal => Precedence::Equality,
        }
    }

    pub const fn kind(self) -> PredicateKind {
        match self {
            Self::InstanceOf => PredicateKind::InstanceOf,
            Self::PrototypeIs => PredicateKind::PrototypeIs,
            Self::Equal => PredicateKind::Equal,
        }
    }
}

/// The closed set of predicate kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PredicateKind {
    Type,
    Charset,
    String,
    NotNot,
    Not,
    BitNot,
    Sqrt,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    BitOr,
    BitAnd,
    Pow,
    Atan2,
    Or,
    And,
    Xor,
    Regex,
    InstanceOf,
    PrototypeIs,
    Equal,
    Property,
    Member,
    Shift,
    Function,
}

impl PredicateKind {
    /// Every kind, in declaration order.
    pub const ALL: [PredicateKind; 27] = [
        Self::Type,
        Self::Charset,
        Self::String,
        Self::NotNot,
        Self::Not,
        Self::BitNot,
        Self::Sqrt,
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Mod,
        Self::BitOr,
        Self::BitAnd,
        Self::Pow,
        Self::Atan2,
        Self::Or,
        Self::And,
        Self::Xor,
        Self::Regex,
        Self::InstanceOf,
        Self::PrototypeIs,
        Self::Equal,
        Self::Property,
        Self::Member,
        Self::Shift,
        Self::Function,
    ];

    /// Lower-case type name used in dumps.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Charset => "charset",
            Self::String => "string",
            Self::NotNot => "notnot",
            Self::Not => "not",
            Self::BitNot => "bnot",
            Self::Sqrt => "sqrt",
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Mod => "mod",
            Self::BitOr => "bor",
            Self::BitAnd => "band",
            Self::Pow => "pow",
            Self::Atan2 => "atan2",
            Self::Or => "or",
            Self::And => "and",
            Self::Xor => "xor",
            Self::Regex => "regexp",
            Self::InstanceOf => "instanceof",
            Self::PrototypeIs => "prototypeis",
            Self::Equal => "equal",
            Self::Property => "property",
            Self::Member => "member",
            Self::Shift => "shift",
            Self::Function => "function",
        }
    }
}
