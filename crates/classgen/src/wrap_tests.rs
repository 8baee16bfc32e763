use super::*;
use classgen_model::{Argument, Hint, Indirection, MethodDescription};

fn baseline() -> MethodDescription {
    MethodDescription {
        name: Some("DoThing".to_string()),
        signature: "void DoThing()".to_string(),
        comment: None,
        return_type: TypeTag::value(BaseKind::Void),
        return_class: None,
        arguments: Vec::new(),
        is_public: true,
        is_operator: false,
        is_pure_virtual: false,
        is_legacy: false,
        has_array_failure: false,
        hint: None,
    }
}

#[test]
fn baseline_is_wrappable() {
    assert!(is_wrappable(&baseline()));
    assert_eq!(rejection_rule(&baseline()), None);
}

#[test]
fn rule_1_rejects_operators_array_failures_private_and_unnamed() {
    let mut m = baseline();
    m.is_operator = true;
    assert_eq!(rejection_rule(&m), Some(1));

    let mut m = baseline();
    m.has_array_failure = true;
    assert_eq!(rejection_rule(&m), Some(1));

    let mut m = baseline();
    m.is_public = false;
    assert_eq!(rejection_rule(&m), Some(1));

    let mut m = baseline();
    m.name = None;
    assert_eq!(rejection_rule(&m), Some(1));
}

#[test]
fn rule_2_rejects_reserved_names() {
    let mut m = baseline();
    m.name = Some("New".to_string());
    assert_eq!(rejection_rule(&m), Some(2));
    m.name = Some("Delete".to_string());
    assert_eq!(rejection_rule(&m), Some(2));
}

#[test]
fn rule_3_rejects_unsupported_base_kind_and_extra_function_pointer_args() {
    let mut m = baseline();
    m.arguments.push(Argument::new(TypeTag::value(BaseKind::Unknown)));
    assert_eq!(rejection_rule(&m), Some(3));

    let mut m = baseline();
    m.arguments.push(Argument::new(TypeTag::value(BaseKind::Function)));
    m.arguments.push(Argument::new(TypeTag::value(BaseKind::Int)));
    assert_eq!(rejection_rule(&m), Some(3));

    // A sole function-pointer argument is fine (not rejected by rule 3).
    let mut m = baseline();
    m.arguments.push(Argument::new(TypeTag::value(BaseKind::Function)));
    assert_ne!(rejection_rule(&m), Some(3));
}

#[test]
fn rule_4_rejects_unsupported_indirection() {
    let mut m = baseline();
    m.arguments.push(Argument::new(
        TypeTag::value(BaseKind::Int).with_indirection(Indirection::PointerToPointer),
    ));
    assert_eq!(rejection_rule(&m), Some(4));
}

#[test]
fn rule_5_rejects_non_const_reference_to_non_object() {
    let mut m = baseline();
    m.arguments.push(Argument::new(
        TypeTag::value(BaseKind::Int)
            .with_indirection(Indirection::Reference)
            .with_const(false),
    ));
    assert_eq!(rejection_rule(&m), Some(5));

    // const reference is fine.
    let mut m = baseline();
    m.arguments.push(Argument::new(
        TypeTag::value(BaseKind::Int)
            .with_indirection(Indirection::Reference)
            .with_const(true),
    ));
    assert_ne!(rejection_rule(&m), Some(5));
}

#[test]
fn rule_6_rejects_char_pointer_array_ambiguity() {
    let mut m = baseline();
    m.arguments.push(
        Argument::new(TypeTag::value(BaseKind::Char).with_indirection(Indirection::Pointer))
            .array_count(8),
    );
    assert_eq!(rejection_rule(&m), Some(6));
}

#[test]
fn rule_7_rejects_unsigned_integer_pointer() {
    let mut m = baseline();
    m.arguments.push(Argument::new(
        TypeTag::value(BaseKind::Int)
            .with_indirection(Indirection::Pointer)
            .with_unsigned(true),
    ));
    assert_eq!(rejection_rule(&m), Some(7));
}

#[test]
fn rule_7_rejects_unsigned_char_pointer_argument() {
    let mut m = baseline();
    m.arguments.push(Argument::new(
        TypeTag::value(BaseKind::Char)
            .with_indirection(Indirection::Pointer)
            .with_unsigned(true),
    ));
    assert_eq!(rejection_rule(&m), Some(7));
}

#[test]
fn rule_8_rejects_string_or_unicode_pointer() {
    let mut m = baseline();
    m.arguments.push(Argument::new(
        TypeTag::value(BaseKind::String).with_indirection(Indirection::Pointer),
    ));
    assert_eq!(rejection_rule(&m), Some(8));
}

#[test]
fn rule_9_rejects_unbounded_numeric_pointer() {
    let mut m = baseline();
    m.arguments.push(Argument::new(
        TypeTag::value(BaseKind::Double).with_indirection(Indirection::Pointer),
    ));
    assert_eq!(rejection_rule(&m), Some(9));

    // Supplying array_count flips it to wrappable (not rejected by rule 9).
    let mut m = baseline();
    m.arguments.push(
        Argument::new(TypeTag::value(BaseKind::Double).with_indirection(Indirection::Pointer))
            .array_count(3),
    );
    assert_ne!(rejection_rule(&m), Some(9));
}

#[test]
fn rule_10_rejects_unsupported_return_type() {
    let mut m = baseline();
    m.return_type = TypeTag::value(BaseKind::Unknown);
    assert_eq!(rejection_rule(&m), Some(10));
}

#[test]
fn rule_11_rejects_numeric_pointer_return_without_hint() {
    let mut m = baseline();
    m.return_type = TypeTag::value(BaseKind::Double).with_indirection(Indirection::Pointer);
    assert_eq!(rejection_rule(&m), Some(11));

    m.hint = Some(Hint {
        tag: TypeTag::value(BaseKind::Double),
        size: 3,
    });
    assert_ne!(rejection_rule(&m), Some(11));
}

#[test]
fn rule_10_rejects_unsigned_char_pointer_return() {
    // Unlike plain `char*`, `unsigned char*` is never treated as a string
    // return and stays rejected even though it carries no array hint.
    let mut m = baseline();
    m.return_type = TypeTag::value(BaseKind::Char)
        .with_indirection(Indirection::Pointer)
        .with_unsigned(true);
    assert_eq!(rejection_rule(&m), Some(10));
}

#[test]
fn char_pointer_return_without_hint_is_wrappable() {
    // char* is always treated as a string return, never as a numeric array,
    // so it must not trip rule 11's missing-hint check.
    let mut m = baseline();
    m.return_type = TypeTag::value(BaseKind::Char).with_indirection(Indirection::Pointer);
    assert!(is_wrappable(&m));
}

#[test]
fn rule_12_rejects_char_pointer_return_with_positive_hint() {
    let mut m = baseline();
    m.return_type = TypeTag::value(BaseKind::Char).with_indirection(Indirection::Pointer);
    m.hint = Some(Hint {
        tag: TypeTag::value(BaseKind::Char),
        size: 4,
    });
    assert_eq!(rejection_rule(&m), Some(12));
}

#[test]
fn clearing_an_unrelated_field_does_not_restore_wrappability() {
    let mut m = baseline();
    m.name = Some("New".to_string());
    assert!(!is_wrappable(&m));
    m.comment = Some("unrelated".to_string());
    assert!(!is_wrappable(&m));
}

#[test]
fn fixing_the_cause_restores_wrappability() {
    let mut m = baseline();
    m.is_operator = true;
    assert!(!is_wrappable(&m));
    m.is_operator = false;
    assert!(is_wrappable(&m));
}
