//! Wrappability Filter (spec §4.3): decides whether one [`MethodDescription`]
//! can be represented and dispatched by the scripting runtime at all.
//!
//! Each clause of the spec's rejection table is its own named predicate so
//! a fixture can target exactly one rule (spec §8, testable property 3).
//! [`rejection_rule`] returns the first rule that fires, in the table's
//! declared order; [`is_wrappable`] is just "no rule fires."

use classgen_model::{Argument, MethodDescription};

/// Evaluate every rejection rule in order and return the first that fires.
/// `None` means the method is wrappable.
pub fn rejection_rule(m: &MethodDescription) -> Option<u8> {
    RULES.iter().find_map(|(n, rule)| rule(m).then_some(*n))
}

pub fn is_wrappable(m: &MethodDescription) -> bool {
    rejection_rule(m).is_none()
}

type Rule = fn(&MethodDescription) -> bool;

const RULES: &[(u8, Rule)] = &[
    (1, rule_1_basic_admissibility),
    (2, rule_2_reserved_name),
    (3, rule_3_unsupported_argument_base_kind),
    (4, rule_4_unsupported_argument_indirection),
    (5, rule_5_non_const_object_unsafe_reference),
    (6, rule_6_ambiguous_char_array),
    (7, rule_7_unsigned_integer_pointer),
    (8, rule_8_string_or_unicode_pointer),
    (9, rule_9_unbounded_numeric_pointer),
    (10, rule_10_unsupported_return_type),
    (11, rule_11_missing_array_return_hint),
    (12, rule_12_char_pointer_return_with_hint),
];

fn rule_1_basic_admissibility(m: &MethodDescription) -> bool {
    m.is_operator || m.has_array_failure || !m.is_public || m.name.as_deref().is_none_or(str::is_empty)
}

fn rule_2_reserved_name(m: &MethodDescription) -> bool {
    matches!(m.name.as_deref(), Some("New") | Some("Delete"))
}

fn rule_3_unsupported_argument_base_kind(m: &MethodDescription) -> bool {
    let function_args = m.arguments.iter().filter(|a| a.type_tag.is_function()).count();
    if function_args > 0 && !(function_args == 1 && m.arguments.len() == 1) {
        return true;
    }
    m.arguments
        .iter()
        .any(|a| !a.type_tag.is_function() && !a.type_tag.base_kind.is_supported())
}

fn rule_4_unsupported_argument_indirection(m: &MethodDescription) -> bool {
    m.arguments.iter().any(|a| !a.type_tag.indirection.is_flat())
}

fn rule_5_non_const_object_unsafe_reference(m: &MethodDescription) -> bool {
    m.arguments
        .iter()
        .any(|a| a.type_tag.is_reference() && !a.type_tag.is_object() && !a.type_tag.is_const())
}

fn rule_6_ambiguous_char_array(m: &MethodDescription) -> bool {
    m.arguments.iter().any(|a| a.type_tag.is_char_ptr() && a.array_count > 0)
}

fn rule_7_unsigned_integer_pointer(m: &MethodDescription) -> bool {
    m.arguments.iter().any(|a| {
        let t = a.type_tag;
        t.is_pointer() && t.is_unsigned()
    })
}

fn rule_8_string_or_unicode_pointer(m: &MethodDescription) -> bool {
    m.arguments
        .iter()
        .any(|a| a.type_tag.is_pointer() && (a.type_tag.is_string() || a.type_tag.is_unicode()))
}

fn rule_9_unbounded_numeric_pointer(m: &MethodDescription) -> bool {
    m.arguments.iter().any(unbounded_numeric_pointer)
}

fn unbounded_numeric_pointer(a: &Argument) -> bool {
    let t = a.type_tag;
    t.is_pointer()
        && t.base_kind.is_numeric()
        && !t.is_char_ptr()
        && !t.is_void_ptr()
        && !t.is_object()
        && a.array_count <= 0
}

fn rule_10_unsupported_return_type(m: &MethodDescription) -> bool {
    let t = m.return_type;
    (!t.is_function() && !t.base_kind.is_supported()) || !t.indirection.is_flat() || (t.is_char_ptr() && t.is_unsigned())
}

fn rule_11_missing_array_return_hint(m: &MethodDescription) -> bool {
    let t = m.return_type;
    t.is_pointer() && t.base_kind.is_numeric() && !t.is_char_ptr() && m.hint.is_none()
}

fn rule_12_char_pointer_return_with_hint(m: &MethodDescription) -> bool {
    m.return_type.is_char_ptr() && m.hint.is_some_and(|h| h.size > 0)
}

#[cfg(test)]
mod wrap_tests;
