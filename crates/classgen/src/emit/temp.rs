//! `emit_temp_variable` (spec §4.5): the typed temporary declaration for
//! one argument, or the return value, plus whatever auxiliary temporaries
//! that type needs to round-trip through the runtime.
//!
//! Grounded on `vtkWrapPython_MakeTempVariable`
//! (original_source/Wrapping/vtkWrapPython.c): same base-kind switch,
//! same indirection decoration rules (references decay to pointers,
//! object values are always passed around by pointer), same set of
//! auxiliary temporaries per type. Variable names follow spec §4.5's
//! naming (`temp{i}`, `handle_i`, `raw_b_i`/`bool_i`, `c_str_i`,
//! `raw_u_i`/`utf8_i`, `ch_buf`) rather than the original's `tempH`/`tempB`/
//! `tempC`/`tempU`/`tempA` abbreviations.

use classgen_model::{BaseKind, Indirection, MethodDescription, TypeTag};

use super::Slot;

fn tag_and_class(m: &MethodDescription, slot: Slot) -> (TypeTag, Option<&str>, i32) {
    match slot {
        Slot::Return => (m.return_type, m.return_class.as_deref(), 0),
        Slot::Arg(i) => {
            let a = &m.arguments[i];
            (a.type_tag, a.class_name.as_deref(), a.array_count)
        }
    }
}

fn base_keyword(base: BaseKind) -> Option<&'static str> {
    Some(match base {
        BaseKind::Float => "float",
        BaseKind::Double => "double",
        BaseKind::Int => "int",
        BaseKind::Short => "short",
        BaseKind::Long => "long",
        BaseKind::Void => "void",
        BaseKind::Char => "char",
        BaseKind::IdType => "RtIdType",
        BaseKind::LongLong => "long long",
        BaseKind::Int64 => "__int64",
        BaseKind::SignedChar => "signed char",
        BaseKind::Bool => "bool",
        BaseKind::String => "RtStdString",
        BaseKind::UnicodeString => "RtUnicodeString",
        BaseKind::Unknown | BaseKind::Function => return None,
        BaseKind::Object => return None, // handled by caller (needs the class name)
    })
}

/// Declare the primary temporary for `slot`, plus whatever auxiliary
/// temporaries its type requires. Function-pointer arguments and `void`
/// by-value arguments are special-cased exactly as spec §4.5 describes.
pub fn emit_temp_variable(m: &MethodDescription, slot: Slot) -> String {
    let (t, class_name, array_count) = tag_and_class(m, slot);
    let suffix = slot.var_suffix();
    let var = format!("temp{suffix}");

    if t.is_function() {
        return format!("  {} *{var};\n", crate::abi::VALUE_TYPE);
    }

    // `void` by value contributes no temporary at all.
    if t.is_void() && t.indirection == Indirection::None {
        return String::new();
    }

    let mut out = String::new();
    out.push_str("  ");

    let is_return = matches!(slot, Slot::Return);
    let prepend_const = is_return && t.is_const && matches!(t.indirection, Indirection::Pointer | Indirection::Reference);
    if prepend_const {
        out.push_str("const ");
    }
    if t.is_unsigned() {
        out.push_str("unsigned ");
    }

    match t.base_kind {
        BaseKind::Object => {
            out.push_str(class_name.unwrap_or("RtObjectBase"));
            out.push(' ');
        }
        other => match base_keyword(other) {
            Some(kw) => {
                out.push_str(kw);
                out.push(' ');
            }
            None => return String::new(),
        },
    }

    // Decorate with `*`/`*&`/`**`; references decay to pointers.
    match t.indirection {
        Indirection::Reference => {
            if t.is_object() || is_return {
                out.push('*');
            }
        }
        Indirection::Pointer => {
            if is_return || t.is_object() || t.is_char_ptr() || t.is_void_ptr() {
                out.push('*');
            }
        }
        Indirection::PointerReference => out.push_str("*&"),
        Indirection::PointerToPointer => out.push_str("**"),
        Indirection::None => {}
    }

    // A non-return object *value* argument is still passed by pointer.
    if t.is_object_value() && !is_return {
        out.push('*');
    }

    out.push_str(&var);

    // Fixed-length numeric arrays get the `[N]` array decorator, except
    // for the object/char*/void* cases that were already pointer-decorated.
    if t.indirection == Indirection::Pointer && !is_return && t.base_kind.is_numeric() && !t.is_char_ptr() && !t.is_void_ptr()
    {
        out.push_str(&format!("[{array_count}]"));
    }

    out.push_str(if is_return { "; // return value\n" } else { "; // argument\n" });

    // Auxiliary temporaries.
    if t.is_void_ptr() && !is_return {
        out.push_str(&format!("  int size{suffix};\n"));
    }
    if t.is_object() && !is_return {
        out.push_str(&format!("  {} *handle{suffix} = 0;\n", crate::abi::VALUE_TYPE));
    }
    if t.base_kind == BaseKind::Bool && !is_return {
        out.push_str(&format!(
            "  {} *raw_b{suffix} = 0;\n  int bool{suffix};\n",
            crate::abi::VALUE_TYPE
        ));
    }
    if t.is_string() && !is_return {
        out.push_str(&format!("  const char *c_str{suffix} = 0;\n"));
    }
    if t.is_unicode() && !is_return {
        out.push_str(&format!(
            "  {value} *raw_u{suffix} = 0;\n  const char *utf8_{suffix} = 0;\n",
            value = crate::abi::VALUE_TYPE
        ));
    }
    if is_return && t.base_kind == BaseKind::Char && t.indirection != Indirection::Pointer {
        out.push_str("  char ch_buf[2];\n");
    }

    out
}

#[cfg(test)]
mod temp_tests {
    use super::*;
    use classgen_model::Argument;

    fn method_with_return(t: TypeTag) -> MethodDescription {
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
    fn void_return_emits_nothing() {
        let m = method_with_return(TypeTag::value(BaseKind::Void));
        assert_eq!(emit_temp_variable(&m, Slot::Return), "");
    }

    #[test]
    fn char_ptr_return_is_pointer_decorated() {
        let t = TypeTag::value(BaseKind::Char).with_indirection(Indirection::Pointer);
        let m = method_with_return(t);
        let out = emit_temp_variable(&m, Slot::Return);
        assert!(out.contains("char *temp_ret;"));
    }

    #[test]
    fn void_ptr_arg_gets_size_companion() {
        let t = TypeTag::value(BaseKind::Void).with_indirection(Indirection::Pointer);
        let mut m = method_with_return(TypeTag::value(BaseKind::Void));
        m.arguments.push(Argument::new(t));
        let out = emit_temp_variable(&m, Slot::Arg(0));
        assert!(out.contains("void *temp0;"));
        assert!(out.contains("int size0;"));
    }

    #[test]
    fn bool_arg_gets_raw_and_decoded_temps() {
        let mut m = method_with_return(TypeTag::value(BaseKind::Void));
        m.arguments.push(Argument::new(TypeTag::value(BaseKind::Bool)));
        let out = emit_temp_variable(&m, Slot::Arg(0));
        assert!(out.contains("raw_b0"));
        assert!(out.contains("bool0"));
    }

    #[test]
    fn char_return_gets_two_byte_buffer() {
        let m = method_with_return(TypeTag::value(BaseKind::Char));
        let out = emit_temp_variable(&m, Slot::Return);
        assert!(out.contains("ch_buf[2]"));
    }

    #[test]
    fn by_value_object_arg_still_gets_owning_handle() {
        let mut m = method_with_return(TypeTag::value(BaseKind::Void));
        m.arguments.push(Argument::new(TypeTag::value(BaseKind::Object)));
        let out = emit_temp_variable(&m, Slot::Arg(0));
        assert!(out.contains("handle0"), "by-value object args need a handle to release on cleanup:\n{out}");
    }

    #[test]
    fn numeric_array_arg_gets_bracket_decorator() {
        let mut m = method_with_return(TypeTag::value(BaseKind::Void));
        let mut arg = Argument::new(TypeTag::value(BaseKind::Double).with_indirection(Indirection::Pointer));
        arg.array_count = 3;
        m.arguments.push(arg);
        let out = emit_temp_variable(&m, Slot::Arg(0));
        assert!(out.contains("temp0[3]"));
    }
}
