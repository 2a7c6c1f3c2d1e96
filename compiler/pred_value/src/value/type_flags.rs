//! Type classification bitmask.

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Set of runtime type categories.
    ///
    /// Every value classifies to one or more bits (an array is both `OBJECT`
    /// and `ARRAY`). A type test matches when the intersection is non-empty.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct TypeFlags: u32 {
        const UNDEFINED = 1 << 0;
        const NULL = 1 << 1;
        const BOOL = 1 << 2;
        const INT = 1 << 3;
        const OBJECT = 1 << 4;
        const STRING = 1 << 5;
        const SYMBOL = 1 << 6;
        const BIG_FLOAT = 1 << 7;
        const BIG_INT = 1 << 8;
        const BIG_DECIMAL = 1 << 9;
        const FLOAT64 = 1 << 10;
        const FUNCTION = 1 << 11;
        const ARRAY = 1 << 12;

        const NUMBER = Self::INT.bits()
            | Self::BIG_FLOAT.bits()
            | Self::BIG_INT.bits()
            | Self::BIG_DECIMAL.bits()
            | Self::FLOAT64.bits();
        const PRIMITIVE = Self::UNDEFINED.bits()
            | Self::NULL.bits()
            | Self::BOOL.bits()
            | Self::NUMBER.bits()
            | Self::STRING.bits()
            | Self::SYMBOL.bits();
        const ALL = Self::PRIMITIVE.bits()
            | Self::OBJECT.bits()
            | Self::FUNCTION.bits()
            | Self::ARRAY.bits();
    }
}

/// Single-bit flags in bit order, with their dump names and `typeof` names.
const SINGLE_FLAGS: [(TypeFlags, &str, &str); 13] = [
    (TypeFlags::UNDEFINED, "UNDEFINED", "undefined"),
    (TypeFlags::NULL, "NULL", "null"),
    (TypeFlags::BOOL, "BOOL", "boolean"),
    (TypeFlags::INT, "INT", "int"),
    (TypeFlags::OBJECT, "OBJECT", "object"),
    (TypeFlags::STRING, "STRING", "string"),
    (TypeFlags::SYMBOL, "SYMBOL", "symbol"),
    (TypeFlags::BIG_FLOAT, "BIG_FLOAT", "bigfloat"),
    (TypeFlags::BIG_INT, "BIG_INT", "bigint"),
    (TypeFlags::BIG_DECIMAL, "BIG_DECIMAL", "bigdecimal"),
    (TypeFlags::FLOAT64, "FLOAT64", "float64"),
    (TypeFlags::FUNCTION, "FUNCTION", "function"),
    (TypeFlags::ARRAY, "ARRAY", "array"),
];

impl TypeFlags {
    /// Type names for each set bit, in bit order.
    ///
    /// Composite masks collapse to their own name first (`number`,
    /// `primitive`, `all`) when fully set.
    pub fn type_names(self) -> Vec<&'static str> {
        if self == Self::ALL {
            return vec!["all"];
        }
        let mut names = Vec::new();
        let mut rest = self;
        if rest.contains(Self::PRIMITIVE) {
            names.push("primitive");
            rest.remove(Self::PRIMITIVE);
        } else if rest.contains(Self::NUMBER) {
            names.push("number");
            rest.remove(Self::NUMBER);
        }
        names.extend(
            SINGLE_FLAGS
                .iter()
                .filter(|(flag, _, _)| rest.contains(*flag))
                .map(|(_, _, name)| *name),
        );
        names
    }
}

/// Dump form: single-bit names joined with `|`, e.g. `STRING|INT`.
impl fmt::Display for TypeFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (flag, name, _) in &SINGLE_FLAGS {
            if self.contains(*flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        if first {
            f.write_str("0")?;
        }
        Ok(())
    }
}
