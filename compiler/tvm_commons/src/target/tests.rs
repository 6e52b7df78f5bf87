use pretty_assertions::assert_eq;

use super::*;

#[test]
fn default_is_tvm() {
    let target = TargetProfile::default();
    assert_eq!(target, TargetProfile::tvm());
    assert_eq!(target.std_addr_length, 267);
    assert_eq!(target.content_hash_key_length, 256);
}

#[test]
fn key_types_are_unsigned() {
    let target = TargetProfile::tvm();
    assert_eq!(target.persistent_key_type(), IntegerType::unsigned(64));
    assert_eq!(target.array_key_type(), IntegerType::unsigned(32));
}
