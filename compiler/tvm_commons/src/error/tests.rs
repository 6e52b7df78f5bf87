use pretty_assertions::assert_eq;

use super::*;

#[test]
fn unsupported_type_message() {
    let err = EncodingError::UnsupportedType {
        operation: EncodingOp::Store,
        ty: "function".into(),
    };
    assert_eq!(err.to_string(), "type `function` cannot be encoded with a direct store");
    assert_eq!(err.code(), ErrorCode::E5001);
}

#[test]
fn dict_key_unsupported_has_suggestion() {
    let err = EncodingError::UnsupportedType {
        operation: EncodingOp::DictKey,
        ty: "array".into(),
    };
    let diag = err.to_diagnostic(Span::new(5, 10));
    assert_eq!(diag.primary_span(), Some(Span::new(5, 10)));
    assert_eq!(diag.suggestions.len(), 1);
}

#[test]
fn invalid_struct_key_is_actionable() {
    let err = EncodingError::InvalidStructKey {
        struct_name: "Owner".into(),
        member: "wallet".into(),
        member_ty: "address".into(),
    };
    let diag = err.to_diagnostic(Span::new(0, 5));
    assert_eq!(diag.code, ErrorCode::E5002);
    assert!(diag.message.contains("member `wallet` has type `address`"));
    assert!(diag.suggestions[0].contains("`wallet`"));
}

#[test]
fn reserved_encoding_is_internal() {
    let err = EncodingError::ReservedEncoding { bits: 267 };
    assert!(err.code().is_internal());
    assert!(err.to_diagnostic(Span::DUMMY).is_error());
}

#[test]
fn empty_struct_key_is_warning() {
    let diag = empty_struct_key("Unit", Span::new(1, 2));
    assert!(!diag.is_error());
    assert_eq!(diag.code, ErrorCode::E5003);
}

#[test]
fn invalid_width_is_internal() {
    let err = EncodingError::InvalidWidth { ty: "uint0".into() };
    assert_eq!(err.code(), ErrorCode::E9002);
    assert!(err.code().is_internal());
    assert_eq!(
        err.to_string(),
        "type `uint0` has a width outside the supported range"
    );
    assert_eq!(err.to_diagnostic(Span::new(2, 4)).notes.len(), 2);
}
