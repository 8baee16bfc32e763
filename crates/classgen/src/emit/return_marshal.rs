//! `emit_return_marshal` (spec §4.5): the code that builds a runtime
//! value from the C++ call's result.
//!
//! Grounded on `vtkWrapPython_ReturnValue`/`vtkWrapPython_ReturnHintedValue`
//! (original_source/Wrapping/vtkWrapPython.c): one rule per return shape,
//! dereferencing through `*temp_ret` whenever the return type is a
//! reference (spec §4.5: "all dereference if return is a reference").

use classgen_model::{BaseKind, Indirection, MethodDescription};

use crate::abi;
use crate::target::TargetProfile;

/// Emit the statements that assign `result` from `temp_ret` (and, for
/// numeric-array hints, from `temp_ret`'s known element count).
pub fn emit_return_marshal(m: &MethodDescription, profile: &TargetProfile) -> String {
    let t = m.return_type;
    let deref = if t.indirection == Indirection::Reference { "*" } else { "" };

    if t.is_void() && t.indirection == Indirection::None {
        return format!("    {incref}(result);\n    result = {none};\n", incref = abi::INCREF, none = abi::NONE);
    }

    if t.is_char_ptr() {
        return format!(
            "    if (temp_ret == NULL) {{\n      {incref}(result);\n      result = {none};\n    }} else {{\n      result = {from_c}(temp_ret);\n    }}\n",
            incref = abi::INCREF,
            none = abi::NONE,
            from_c = abi::STRING_FROM_C_STRING,
        );
    }

    if t.is_object_ptr() {
        return format!(
            "    result = {get_obj}((RtObjectBase *)temp_ret);\n",
            get_obj = abi::GET_OBJECT_FROM_POINTER
        );
    }

    if t.is_object_ref() {
        let class = m.return_class.as_deref().unwrap_or("?");
        return format!(
            "    result = {get_special}(temp_ret, \"{class}\");\n",
            get_special = abi::GET_SPECIAL_OBJECT_FROM_POINTER
        );
    }

    if t.is_object_value() {
        let class = m.return_class.as_deref().unwrap_or("?");
        return format!(
            "    result = {get_special}(&temp_ret, \"{class}\");\n",
            get_special = abi::GET_SPECIAL_OBJECT_FROM_POINTER
        );
    }

    if t.is_void_ptr() {
        return format!(
            "    if (temp_ret == NULL) {{\n      {incref}(result);\n      result = {none};\n    }} else {{\n      result = {mangle}(temp_ret, \"void_p\");\n    }}\n",
            incref = abi::INCREF,
            none = abi::NONE,
            mangle = abi::STRING_FROM_MANGLED_POINTER,
        );
    }

    // Fixed-size numeric-pointer return, needs a hint (wrappability rule 11
    // guarantees `m.hint.is_some()` for every method reaching this branch).
    if t.indirection == Indirection::Pointer && t.base_kind.is_numeric() {
        let hint = m.hint.expect("wrappability filter guarantees a hint for numeric-pointer returns");
        return format!(
            "    if (temp_ret == NULL) {{\n      {incref}(result);\n      result = {none};\n    }} else {{\n      result = {build}(temp_ret, {size});\n    }}\n",
            incref = abi::INCREF,
            none = abi::NONE,
            build = abi::BUILD_NUMERIC_TUPLE,
            size = hint.size,
        );
    }

    if t.base_kind.is_floating() {
        return format!("    result = {f}({deref}temp_ret);\n", f = abi::FLOAT_FROM_DOUBLE);
    }

    if t.base_kind == BaseKind::Bool {
        return format!("    result = {b}((long){deref}temp_ret);\n", b = abi::BOOL_FROM_LONG);
    }

    if t.base_kind == BaseKind::Char {
        return "    ch_buf[0] = ".to_string()
            + deref
            + "temp_ret;\n    ch_buf[1] = '\\0';\n    result = "
            + abi::STRING_FROM_C_STRING
            + "(ch_buf);\n";
    }

    if t.is_string() {
        return format!("    result = {f}({deref}temp_ret);\n", f = abi::STRING_FROM_C_STRING);
    }

    if t.is_unicode() {
        let access = if deref == "*" { "->" } else { "." };
        return format!(
            "    {{\n      const char *s = temp_ret{access}utf8_str();\n      result = {f}(s, strlen(s));\n    }}\n",
            f = abi::STRING_FROM_UTF8,
        );
    }

    if t.base_kind.is_integer() {
        if t.is_unsigned() && !matches!(t.base_kind, BaseKind::Char | BaseKind::SignedChar) {
            return unsigned_integer_marshal(t.base_kind, deref, profile);
        }
        return format!("    result = {f}((long){deref}temp_ret);\n", f = abi::INT_FROM_LONG);
    }

    unreachable!("wrappability filter rejects every base kind not handled above")
}

fn unsigned_integer_marshal(base: BaseKind, deref: &str, profile: &TargetProfile) -> String {
    let wide = matches!(base, BaseKind::LongLong | BaseKind::Int64)
        || (base == BaseKind::IdType && profile.ids_are_64_bit);
    if wide && profile.supports_long_long && profile.supports_int64 {
        return format!("    result = {f}({deref}temp_ret);\n", f = abi::INT_FROM_UNSIGNED_LONG_LONG);
    }
    format!(
        "    if ((long)({deref}temp_ret) >= 0) {{\n      result = {signed_f}((long)({deref}temp_ret));\n    }} else {{\n      result = {unsigned_f}({deref}temp_ret);\n    }}\n",
        signed_f = abi::INT_FROM_LONG,
        unsigned_f = abi::INT_FROM_UNSIGNED_LONG,
    )
}

#[cfg(test)]
mod return_marshal_tests {
    use super::*;
    use classgen_model::{Hint, TypeTag};

    fn method(t: TypeTag) -> MethodDescription {
        MethodDescription {
            name: Some("F".into()),
            signature: "void F()".into(),
            comment: None,
            return_type: t,
            return_class: None,
            arguments: vec![],
            is_public: true,
            is_operator: false,
            is_pure_virtual: false,
            is_legacy: false,
            has_array_failure: false,
            hint: None,
        }
    }

    #[test]
    fn void_returns_none() {
        let p = TargetProfile::baseline();
        let m = method(TypeTag::value(BaseKind::Void));
        assert!(emit_return_marshal(&m, &p).contains(abi::NONE));
    }

    #[test]
    fn char_ptr_null_checks_before_building_string() {
        let p = TargetProfile::baseline();
        let t = TypeTag::value(BaseKind::Char).with_indirection(Indirection::Pointer);
        let out = emit_return_marshal(&method(t), &p);
        assert!(out.contains("temp_ret == NULL"));
        assert!(out.contains(abi::STRING_FROM_C_STRING));
    }

    #[test]
    fn numeric_pointer_return_uses_hint_size() {
        let p = TargetProfile::baseline();
        let t = TypeTag::value(BaseKind::Double).with_indirection(Indirection::Pointer);
        let mut m = method(t);
        m.hint = Some(Hint { tag: t, size: 2 });
        let out = emit_return_marshal(&m, &p);
        assert!(out.contains(abi::BUILD_NUMERIC_TUPLE));
        assert!(out.contains(", 2)"));
    }

    #[test]
    fn reference_return_dereferences() {
        let p = TargetProfile::baseline();
        let t = TypeTag::value(BaseKind::Double).with_indirection(Indirection::Reference);
        let out = emit_return_marshal(&method(t), &p);
        assert!(out.contains("*temp_ret"));
    }

    #[test]
    fn char_value_builds_length_one_string() {
        let p = TargetProfile::baseline();
        let out = emit_return_marshal(&method(TypeTag::value(BaseKind::Char)), &p);
        assert!(out.contains("ch_buf"));
    }
}
