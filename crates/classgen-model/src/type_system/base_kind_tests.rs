use super::BaseKind;

#[test]
fn integer_kinds_are_numeric_but_not_floating() {
    assert!(BaseKind::Int.is_integer());
    assert!(BaseKind::Int.is_numeric());
    assert!(!BaseKind::Int.is_floating());
}

#[test]
fn floating_kinds_are_numeric_but_not_integer() {
    assert!(BaseKind::Double.is_numeric());
    assert!(BaseKind::Double.is_floating());
    assert!(!BaseKind::Double.is_integer());
}

#[test]
fn object_and_string_are_neither_integer_nor_floating() {
    assert!(!BaseKind::Object.is_numeric());
    assert!(!BaseKind::String.is_numeric());
}

#[test]
fn unknown_and_function_are_unsupported() {
    assert!(!BaseKind::Unknown.is_supported());
    assert!(!BaseKind::Function.is_supported());
    assert!(BaseKind::Int.is_supported());
    assert!(BaseKind::Object.is_supported());
}
