//! Semantic types as resolved by the front end.
//!
//! [`Type`] is a closed union: every codegen switch over it is checked for
//! exhaustiveness by the compiler. The backend only inspects types; it never
//! infers or rewrites them.

use std::fmt;

use crate::{ContractId, Program, StructId};

/// A fixed-width integer type (`intN` / `uintN`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct IntegerType {
    /// Width in bits, `1..=256` for source-level integers.
    pub bits: u16,
    pub signed: bool,
}

impl IntegerType {
    /// Widest integer the language allows.
    pub const MAX_BITS: u16 = 256;

    /// Signed integer of the given width.
    #[inline]
    pub const fn signed(bits: u16) -> Self {
        IntegerType { bits, signed: true }
    }

    /// Unsigned integer of the given width.
    #[inline]
    pub const fn unsigned(bits: u16) -> Self {
        IntegerType {
            bits,
            signed: false,
        }
    }

    /// Whether the width is one a source program can spell.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.bits >= 1 && self.bits <= Self::MAX_BITS
    }
}

impl fmt::Display for IntegerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.signed { "int" } else { "uint" };
        write!(f, "{prefix}{}", self.bits)
    }
}

/// Array flavour. Byte arrays and strings share a packed representation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ArrayKind {
    /// `T[]` for any element type other than bytes.
    Usual,
    /// `bytes`
    Bytes,
    /// `string` (UTF-8)
    String,
}

impl ArrayKind {
    /// `bytes` and `string` are both byte arrays.
    #[inline]
    pub const fn is_byte_array(self) -> bool {
        matches!(self, ArrayKind::Bytes | ArrayKind::String)
    }
}

/// Resolved semantic type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Type {
    Integer(IntegerType),
    Bool,
    /// `bytesN`, `N` in `1..=32`.
    FixedBytes(u8),
    Address,
    Contract(ContractId),
    Array(ArrayKind),
    /// Compile-time string literal, before it is materialized as `string`.
    StringLiteral,
    Struct(StructId),
    Enum {
        value_count: u32,
    },
    /// Raw TVM cell.
    Cell,
    Mapping {
        key: Box<Type>,
        value: Box<Type>,
    },
    Function,
}

impl Type {
    /// Shorthand for `Type::Integer(IntegerType::signed(bits))`.
    #[inline]
    pub const fn int(bits: u16) -> Self {
        Type::Integer(IntegerType::signed(bits))
    }

    /// Shorthand for `Type::Integer(IntegerType::unsigned(bits))`.
    #[inline]
    pub const fn uint(bits: u16) -> Self {
        Type::Integer(IntegerType::unsigned(bits))
    }

    /// `mapping(key => value)`
    pub fn mapping(key: Type, value: Type) -> Self {
        Type::Mapping {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Render the type for diagnostics.
    pub fn display<'a>(&'a self, program: &'a Program) -> TypeDisplay<'a> {
        TypeDisplay { ty: self, program }
    }
}

/// Display adapter resolving struct and contract names through a [`Program`].
pub struct TypeDisplay<'a> {
    ty: &'a Type,
    program: &'a Program,
}

impl fmt::Display for TypeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ty {
            Type::Integer(int) => write!(f, "{int}"),
            Type::Bool => f.write_str("bool"),
            Type::FixedBytes(n) => write!(f, "bytes{n}"),
            Type::Address => f.write_str("address"),
            Type::Contract(id) => {
                write!(f, "contract {}", self.program.name(self.program.contract(*id).name))
            }
            Type::Array(ArrayKind::Usual) => f.write_str("array"),
            Type::Array(ArrayKind::Bytes) => f.write_str("bytes"),
            Type::Array(ArrayKind::String) => f.write_str("string"),
            Type::StringLiteral => f.write_str("literal_string"),
            Type::Struct(id) => {
                write!(f, "struct {}", self.program.name(self.program.struct_def(*id).name))
            }
            Type::Enum { value_count } => write!(f, "enum({value_count})"),
            Type::Cell => f.write_str("TvmCell"),
            Type::Mapping { key, value } => write!(
                f,
                "mapping({} => {})",
                key.display(self.program),
                value.display(self.program)
            ),
            Type::Function => f.write_str("function"),
        }
    }
}
