use pretty_assertions::assert_eq;

use super::*;

#[test]
fn functions_are_attached_in_declaration_order() {
    let mut program = Program::new();
    let token = program.add_contract("Token", Span::new(0, 40));
    let mint = program.add_function(token, "mint", FunctionRole::Regular, Span::new(10, 20));
    let ctor = program.add_function(token, "", FunctionRole::Constructor, Span::new(2, 8));

    assert_eq!(program.contract(token).functions(), &[mint, ctor]);
    assert_eq!(program.function(mint).contract, token);
    assert_eq!(program.name(program.function(mint).name), "mint");
    assert!(program.function(ctor).is_constructor());
    assert!(program.function(ctor).name.is_empty());
}

#[test]
fn linearized_bases_start_empty() {
    let mut program = Program::new();
    let base = program.add_contract("Base", Span::DUMMY);
    let derived = program.add_contract("Derived", Span::DUMMY);
    assert!(program.contract(derived).linearized_bases().is_empty());

    program.set_linearized_bases(derived, [derived, base]);
    assert_eq!(program.contract(derived).linearized_bases(), &[derived, base]);
}

#[test]
fn inline_flag_defaults_off() {
    let mut program = Program::new();
    let c = program.add_contract("C", Span::DUMMY);
    let f = program.add_function(c, "helper", FunctionRole::Regular, Span::DUMMY);
    assert!(!program.function(f).is_inline);
    program.set_inline(f, true);
    assert!(program.function(f).is_inline);
}

#[test]
fn struct_members_keep_order() {
    let mut program = Program::new();
    let pair = program.add_struct(
        "Pair",
        [("first", Type::uint(8)), ("second", Type::int(16))],
        Span::DUMMY,
    );
    let def = program.struct_def(pair);
    let names: Vec<&str> = def.members.iter().map(|m| program.name(m.name)).collect();
    assert_eq!(names, vec!["first", "second"]);
    assert_eq!(def.members[1].ty, Type::int(16));
}

#[test]
fn contract_lookup_by_name() {
    let mut program = Program::new();
    program.add_contract("A", Span::DUMMY);
    let b = program.add_contract("B", Span::DUMMY);
    assert_eq!(program.contract_by_name("B"), Some(b));
    assert_eq!(program.contract_by_name("Missing"), None);
    assert_eq!(program.contracts().count(), 2);
}
