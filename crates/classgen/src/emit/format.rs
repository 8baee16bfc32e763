//! `emit_parse_format` (spec §4.5): the format descriptor string consumed
//! by the runtime's tuple-parsing entry point.
//!
//! Grounded on `vtkWrapPython_FormatString`
//! (original_source/Wrapping/vtkWrapPython.c): a sole function-pointer
//! argument collapses to `"O"`; otherwise one character (or parenthesized
//! tuple) per argument, consulting [`crate::target::TargetProfile`] for
//! the two host-dependent codes (64-bit integers, `vtkIdType` width).

use classgen_model::{BaseKind, Indirection, MethodDescription, TypeTag};

use crate::target::TargetProfile;

/// One format character for a scalar (non-array, non-string-pointer)
/// argument of the given base kind.
fn scalar_code(t: TypeTag, profile: &TargetProfile) -> char {
    match t.base_kind {
        BaseKind::Object | BaseKind::Bool | BaseKind::UnicodeString => 'O',
        BaseKind::Float => 'f',
        BaseKind::Double => 'd',
        BaseKind::Int => 'i',
        BaseKind::Short => 'h',
        BaseKind::Long => 'l',
        BaseKind::IdType => {
            if profile.ids_are_64_bit {
                if profile.supports_int64 { 'L' } else { 'l' }
            } else {
                'i'
            }
        }
        BaseKind::LongLong | BaseKind::Int64 => {
            if profile.supports_long_long && profile.supports_int64 {
                'L'
            } else {
                'l'
            }
        }
        BaseKind::SignedChar => 'b',
        BaseKind::Char if t.is_unsigned() => 'b',
        BaseKind::Char => 'c',
        BaseKind::String => 's',
        BaseKind::Void | BaseKind::Function | BaseKind::Unknown => 'O',
    }
}

/// Build the parse-format string for one argument, including the
/// pointer-argument special cases (`z` for nullable `char*`, `s#` for
/// sized `void*` buffers, `(XXX...)` tuples for fixed numeric arrays).
fn argument_format(t: TypeTag, array_count: i32, profile: &TargetProfile) -> String {
    if t.indirection != Indirection::Pointer || t.is_object() {
        return scalar_code(t, profile).to_string();
    }
    if t.is_char_ptr() {
        return "z".to_string();
    }
    if t.is_void_ptr() {
        return "s#".to_string();
    }
    // Boolean arrays use 'i' elements (python bool is an int subclass);
    // every other numeric array uses its own scalar code repeated.
    let element = if t.base_kind == BaseKind::Bool { 'i' } else { scalar_code(t, profile) };
    let mut s = String::from("(");
    for _ in 0..array_count.max(0) {
        s.push(element);
    }
    s.push(')');
    s
}

/// The full parse-format descriptor for a method's arguments.
pub fn emit_parse_format(m: &MethodDescription, profile: &TargetProfile) -> String {
    if m.arguments.len() == 1 && m.arguments[0].type_tag.is_function() {
        return "O".to_string();
    }
    let mut out = String::new();
    for a in &m.arguments {
        out.push_str(&argument_format(a.type_tag, a.array_count, profile));
    }
    out
}

#[cfg(test)]
mod format_tests {
    use super::*;
    use classgen_model::Argument;

    fn method(args: Vec<Argument>) -> MethodDescription {
        MethodDescription {
            name: Some("F".into()),
            signature: "void F()".into(),
            comment: None,
            return_type: TypeTag::value(BaseKind::Void),
            return_class: None,
            arguments: args,
            is_public: true,
            is_operator: false,
            is_pure_virtual: false,
            is_legacy: false,
            has_array_failure: false,
            hint: None,
        }
    }

    #[test]
    fn int_and_double_are_disjoint() {
        let p = TargetProfile::baseline();
        assert_eq!(emit_parse_format(&method(vec![Argument::new(TypeTag::value(BaseKind::Int))]), &p), "i");
        assert_eq!(
            emit_parse_format(&method(vec![Argument::new(TypeTag::value(BaseKind::Double))]), &p),
            "d"
        );
    }

    #[test]
    fn char_ptr_is_nullable_z() {
        let p = TargetProfile::baseline();
        let t = TypeTag::value(BaseKind::Char).with_indirection(Indirection::Pointer);
        assert_eq!(emit_parse_format(&method(vec![Argument::new(t)]), &p), "z");
    }

    #[test]
    fn void_ptr_is_sized_buffer() {
        let p = TargetProfile::baseline();
        let t = TypeTag::value(BaseKind::Void).with_indirection(Indirection::Pointer);
        assert_eq!(emit_parse_format(&method(vec![Argument::new(t)]), &p), "s#");
    }

    #[test]
    fn numeric_array_is_tuple_of_width() {
        let p = TargetProfile::baseline();
        let t = TypeTag::value(BaseKind::Double).with_indirection(Indirection::Pointer);
        let mut a = Argument::new(t);
        a.array_count = 3;
        assert_eq!(emit_parse_format(&method(vec![a]), &p), "(ddd)");
    }

    #[test]
    fn id_type_respects_profile() {
        let baseline = TargetProfile::baseline();
        let modern = TargetProfile::modern();
        let t = TypeTag::value(BaseKind::IdType);
        assert_eq!(emit_parse_format(&method(vec![Argument::new(t)]), &baseline), "i");
        assert_eq!(emit_parse_format(&method(vec![Argument::new(t)]), &modern), "L");
    }

    #[test]
    fn sole_function_pointer_collapses_to_o() {
        let p = TargetProfile::baseline();
        let t = TypeTag::value(BaseKind::Function);
        assert_eq!(emit_parse_format(&method(vec![Argument::new(t)]), &p), "O");
    }
}
