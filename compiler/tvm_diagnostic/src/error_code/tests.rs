use super::*;

#[test]
fn codes_render_as_strings() {
    assert_eq!(ErrorCode::E5002.to_string(), "E5002");
    assert_eq!(ErrorCode::E9001.as_str(), "E9001");
}

#[test]
fn internal_codes_are_e9() {
    for code in ErrorCode::ALL {
        assert_eq!(code.is_internal(), code.as_str().starts_with("E9"));
        assert!(!code.description().is_empty());
    }
    assert!(ErrorCode::E9001.is_internal());
    assert!(!ErrorCode::E5001.is_internal());
}
