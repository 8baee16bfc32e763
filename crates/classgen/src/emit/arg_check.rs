//! `emit_arg_check_descriptor` (spec §4.5): the overload-dispatch
//! descriptor string, consumed at runtime by `CallOverloadedMethod` to
//! pick among sibling dispatchers.
//!
//! Grounded on `vtkWrapPython_ArgCheckString`
//! (original_source/Wrapping/vtkWrapPython.c): the parse format plus an
//! optional leading `@` (dispatched on an instance) plus space-separated
//! hints for argument kinds the tuple parser alone cannot disambiguate
//! (`bool`, `unicode`, and object value/reference/pointer class names).

use classgen_model::{BaseKind, Indirection, MethodDescription};

use super::emit_parse_format;
use crate::target::TargetProfile;

pub fn emit_arg_check_descriptor(m: &MethodDescription, is_instance_method: bool, profile: &TargetProfile) -> String {
    let mut out = String::new();
    if is_instance_method {
        out.push('@');
    }
    out.push_str(&emit_parse_format(m, profile));

    if m.arguments.len() == 1 && m.arguments[0].type_tag.is_function() {
        out.push_str(" func");
        return out;
    }

    for a in &m.arguments {
        let t = a.type_tag;
        if t.base_kind == BaseKind::Bool {
            out.push_str(" bool");
        }
        if t.base_kind == BaseKind::UnicodeString {
            out.push_str(" unicode");
        }
        if t.is_object() {
            out.push(' ');
            match t.indirection {
                Indirection::Reference => out.push('&'),
                Indirection::Pointer => out.push('*'),
                _ => {}
            }
            out.push_str(a.class_name.as_deref().unwrap_or("?"));
        }
    }
    out
}

#[cfg(test)]
mod arg_check_tests {
    use super::*;
    use classgen_model::{Argument, TypeTag};

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
    fn instance_method_prefixes_at() {
        let p = TargetProfile::baseline();
        let m = method(vec![Argument::new(TypeTag::value(BaseKind::Int))]);
        assert_eq!(emit_arg_check_descriptor(&m, true, &p), "@i");
        assert_eq!(emit_arg_check_descriptor(&m, false, &p), "i");
    }

    #[test]
    fn bool_and_unicode_get_hints() {
        let p = TargetProfile::baseline();
        let m = method(vec![
            Argument::new(TypeTag::value(BaseKind::Bool)),
            Argument::new(TypeTag::value(BaseKind::UnicodeString)),
        ]);
        assert_eq!(emit_arg_check_descriptor(&m, false, &p), "OO bool unicode");
    }

    #[test]
    fn object_pointer_hint_includes_class_name() {
        let p = TargetProfile::baseline();
        let t = TypeTag::value(BaseKind::Object).with_indirection(Indirection::Pointer);
        let m = method(vec![Argument::new(t).class_name("vtkPoints")]);
        assert_eq!(emit_arg_check_descriptor(&m, false, &p), "O *vtkPoints");
    }

    #[test]
    fn format_and_arg_check_agree_on_arity() {
        let p = TargetProfile::baseline();
        let t = TypeTag::value(BaseKind::Double).with_indirection(Indirection::Pointer);
        let mut a = Argument::new(t);
        a.array_count = 2;
        let m = method(vec![a]);
        let format = emit_parse_format(&m, &p);
        let check = emit_arg_check_descriptor(&m, false, &p);
        assert!(check.starts_with(&format));
    }
}
