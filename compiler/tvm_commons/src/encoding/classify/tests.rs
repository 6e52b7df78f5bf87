use pretty_assertions::assert_eq;
use tvm_ir::{IntegerType, Program, Span};

use super::*;

// ── Classification ──────────────────────────────────────────────

#[test]
fn integers_are_numeric_with_own_width() {
    assert_eq!(
        classify(&Type::int(8)),
        TypeClass::Numeric(NumericInfo {
            signed: true,
            bits: 8
        })
    );
    assert_eq!(
        classify(&Type::Integer(IntegerType::unsigned(256))),
        TypeClass::Numeric(NumericInfo {
            signed: false,
            bits: 256
        })
    );
}

#[test]
fn bool_bytes_n_and_enum_are_numeric() {
    assert_eq!(
        numeric_info(&Type::Bool),
        Some(NumericInfo {
            signed: true,
            bits: 1
        })
    );
    assert_eq!(
        numeric_info(&Type::FixedBytes(4)),
        Some(NumericInfo {
            signed: false,
            bits: 32
        })
    );
    assert_eq!(
        numeric_info(&Type::Enum { value_count: 300 }),
        Some(NumericInfo {
            signed: false,
            bits: 16
        })
    );
}

#[test]
fn address_and_contract_share_a_class() {
    let mut program = Program::new();
    let c = program.add_contract("Vault", Span::DUMMY);
    assert_eq!(classify(&Type::Address), TypeClass::AddressOrContract);
    assert_eq!(classify(&Type::Contract(c)), TypeClass::AddressOrContract);
    assert!(is_address_or_contract(&Type::Contract(c)));
}

#[test]
fn arrays_split_by_byte_array_flag() {
    assert_eq!(classify(&Type::Array(ArrayKind::Usual)), TypeClass::UsualArray);
    assert_eq!(
        classify(&Type::Array(ArrayKind::Bytes)),
        TypeClass::ByteArrayOrString
    );
    assert_eq!(
        classify(&Type::Array(ArrayKind::String)),
        TypeClass::ByteArrayOrString
    );
    assert!(is_usual_array(&Type::Array(ArrayKind::Usual)));
    assert!(!is_usual_array(&Type::Array(ArrayKind::Bytes)));
}

#[test]
fn other_category() {
    assert_eq!(classify(&Type::Cell), TypeClass::Other);
    assert_eq!(classify(&Type::Function), TypeClass::Other);
    assert_eq!(
        classify(&Type::mapping(Type::uint(8), Type::Bool)),
        TypeClass::Other
    );
}

// ── Predicates ──────────────────────────────────────────────────

#[test]
fn string_literal_is_not_a_byte_array() {
    assert!(!is_byte_array_or_string(&Type::StringLiteral));
    assert!(is_string(&Type::StringLiteral));
    assert!(is_string_or_string_literal_or_bytes(&Type::StringLiteral));
}

#[test]
fn bytes_is_not_a_string() {
    let bytes = Type::Array(ArrayKind::Bytes);
    assert!(is_byte_array_or_string(&bytes));
    assert!(!is_string(&bytes));
    assert!(is_string_or_string_literal_or_bytes(&bytes));
    assert!(is_string(&Type::Array(ArrayKind::String)));
}

#[test]
fn ref_types() {
    assert!(is_ref_type(&Type::Cell));
    assert!(is_ref_type(&Type::Array(ArrayKind::Bytes)));
    assert!(is_ref_type(&Type::Array(ArrayKind::String)));
    assert!(!is_ref_type(&Type::StringLiteral));
    assert!(!is_ref_type(&Type::uint(8)));
}

#[test]
fn integral_types() {
    assert!(is_integral(&Type::Bool));
    assert!(is_integral(&Type::Enum { value_count: 2 }));
    assert!(!is_integral(&Type::Address));
}

#[test]
fn width_bounds() {
    assert!(has_valid_width(&Type::uint(1)));
    assert!(has_valid_width(&Type::int(256)));
    assert!(!has_valid_width(&Type::uint(0)));
    assert!(!has_valid_width(&Type::int(257)));
    assert!(has_valid_width(&Type::FixedBytes(1)));
    assert!(has_valid_width(&Type::FixedBytes(32)));
    assert!(!has_valid_width(&Type::FixedBytes(0)));
    assert!(!has_valid_width(&Type::FixedBytes(33)));
    assert!(has_valid_width(&Type::Address));
}

// ── Enum widths ─────────────────────────────────────────────────

#[test]
fn enum_width_concrete_cases() {
    assert_eq!(enum_bit_width(1), 8);
    assert_eq!(enum_bit_width(2), 8);
    assert_eq!(enum_bit_width(255), 8);
    assert_eq!(enum_bit_width(256), 8);
    assert_eq!(enum_bit_width(257), 16);
    assert_eq!(enum_bit_width(65_536), 16);
    assert_eq!(enum_bit_width(65_537), 24);
    assert_eq!(enum_bit_width(u32::MAX), 32);
}

#[test]
fn enum_width_zero_count_is_one_byte() {
    assert_eq!(enum_bit_width(0), 8);
}

mod proptest_enum_width {
    use super::super::enum_bit_width;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn width_is_byte_aligned_and_covers_indices(n in 1u32..=u32::MAX) {
            let bits = enum_bit_width(n);
            prop_assert_eq!(bits % 8, 0);
            prop_assert!(u64::from(n - 1) < (1u64 << bits));
        }

        #[test]
        fn width_is_monotonic(a in 1u32..=u32::MAX, b in 1u32..=u32::MAX) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(enum_bit_width(lo) <= enum_bit_width(hi));
        }
    }
}
