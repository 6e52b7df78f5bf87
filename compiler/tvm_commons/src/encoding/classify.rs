//! Storage classification of semantic types.

use tvm_ir::{ArrayKind, StructId, Type};

/// Signedness and width of a type stored as a fixed-width integer.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct NumericInfo {
    pub signed: bool,
    pub bits: u16,
}

/// Storage class of a type.
///
/// The class is the finest one that applies. Broader groupings used by key
/// encoding (e.g. "string literal or bytes") are predicates on top of it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeClass {
    /// Stored as an integer: integers, `bool`, `bytesN`, enums.
    Numeric(NumericInfo),
    /// Addresses and contract references, interchangeable for storage.
    AddressOrContract,
    /// Any array that is not a byte array.
    UsualArray,
    /// `bytes` and `string`.
    ByteArrayOrString,
    /// Compile-time string literal; not a plain array.
    StringLiteral,
    Struct(StructId),
    /// Cells, mappings, function types.
    Other,
}

impl TypeClass {
    #[inline]
    pub fn is_numeric(self) -> bool {
        matches!(self, TypeClass::Numeric(_))
    }

    /// `bytes`, `string` or a string literal: keyed by content hash.
    #[inline]
    pub fn is_string_literal_or_bytes(self) -> bool {
        matches!(self, TypeClass::ByteArrayOrString | TypeClass::StringLiteral)
    }
}

/// Smallest byte-aligned width that indexes `value_count` enum values.
///
/// Widths are whole bytes: `1..=256` values take 8 bits, `257..=65536`
/// take 16. A zero count is treated as one value.
pub fn enum_bit_width(value_count: u32) -> u16 {
    let mut rest = value_count.saturating_sub(1);
    let mut bytes = 0u16;
    loop {
        rest >>= 8;
        bytes += 1;
        if rest == 0 {
            break;
        }
    }
    8 * bytes
}

/// Integer layout of `ty`, if it is stored as an integer.
pub fn numeric_info(ty: &Type) -> Option<NumericInfo> {
    match *ty {
        Type::Integer(int) => Some(NumericInfo {
            signed: int.signed,
            bits: int.bits,
        }),
        Type::Bool => Some(NumericInfo {
            signed: true,
            bits: 1,
        }),
        Type::FixedBytes(n) => Some(NumericInfo {
            signed: false,
            bits: 8 * u16::from(n),
        }),
        Type::Enum { value_count } => Some(NumericInfo {
            signed: false,
            bits: enum_bit_width(value_count),
        }),
        Type::Address
        | Type::Contract(_)
        | Type::Array(_)
        | Type::StringLiteral
        | Type::Struct(_)
        | Type::Cell
        | Type::Mapping { .. }
        | Type::Function => None,
    }
}

/// Widest `bytesN` the language allows.
const MAX_FIXED_BYTES: u8 = 32;

/// Whether an integer or `bytesN` type has a width the language can spell.
///
/// Every other type has no width of its own and passes.
pub fn has_valid_width(ty: &Type) -> bool {
    match *ty {
        Type::Integer(int) => int.is_valid(),
        Type::FixedBytes(n) => (1..=MAX_FIXED_BYTES).contains(&n),
        _ => true,
    }
}

/// Classify `ty` for storage purposes.
pub fn classify(ty: &Type) -> TypeClass {
    if let Some(info) = numeric_info(ty) {
        return TypeClass::Numeric(info);
    }
    match ty {
        Type::Address | Type::Contract(_) => TypeClass::AddressOrContract,
        Type::Array(ArrayKind::Usual) => TypeClass::UsualArray,
        Type::Array(ArrayKind::Bytes | ArrayKind::String) => TypeClass::ByteArrayOrString,
        Type::StringLiteral => TypeClass::StringLiteral,
        Type::Struct(id) => TypeClass::Struct(*id),
        Type::Integer(_)
        | Type::Bool
        | Type::FixedBytes(_)
        | Type::Enum { .. }
        | Type::Cell
        | Type::Mapping { .. }
        | Type::Function => TypeClass::Other,
    }
}

// ── Predicates ──────────────────────────────────────────────────

pub fn is_address_or_contract(ty: &Type) -> bool {
    matches!(ty, Type::Address | Type::Contract(_))
}

pub fn is_usual_array(ty: &Type) -> bool {
    matches!(ty, Type::Array(ArrayKind::Usual))
}

/// `bytes` or `string`.
pub fn is_byte_array_or_string(ty: &Type) -> bool {
    matches!(ty, Type::Array(kind) if kind.is_byte_array())
}

/// `string` or a string literal.
pub fn is_string(ty: &Type) -> bool {
    matches!(ty, Type::StringLiteral | Type::Array(ArrayKind::String))
}

pub fn is_string_or_string_literal_or_bytes(ty: &Type) -> bool {
    classify(ty).is_string_literal_or_bytes()
}

/// Values stored as a cell reference rather than inline bits.
pub fn is_ref_type(ty: &Type) -> bool {
    is_byte_array_or_string(ty) || matches!(ty, Type::Cell)
}

pub fn is_integral(ty: &Type) -> bool {
    numeric_info(ty).is_some()
}

#[cfg(test)]
mod tests;
