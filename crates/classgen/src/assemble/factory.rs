//! Factory function emission (spec §4.7.4): the constructor the runtime
//! calls to instantiate an object-kind class, chained to its primary
//! base's own factory so the runtime can build the base's method
//! resolution order without the generated code repeating it.
//!
//! Grounded on `vtkWrapPython_GenerateObjectNew`
//! (original_source/Wrapping/vtkWrapPython.c): emit a `StaticNew` wrapper
//! around the class's own `New()` factory method when it has one, then a
//! `Factory_<Class>(modulename)` function that recursively calls
//! `Factory_<PrimaryBase>(modulename)` to register the base type first,
//! terminating at a root class (no base) by passing a null factory chain.

use classgen_model::ClassDescription;

use crate::abi;

/// Whether `class_desc` declares a `New()` factory method of its own
/// (spec §4.7.4: "a class with its own `New` gets a `StaticNew` wrapper;
/// otherwise the plain constructor is used").
fn has_own_new(class_desc: &ClassDescription) -> bool {
    class_desc.functions.iter().any(|m| m.name.as_deref() == Some("New") && m.is_static())
}

/// Emit the object-kind factory function for `class_desc`.
///
/// An abstract class that isn't object-kind (not derived from the
/// scripting runtime's refcounted base) has no constructible instance and
/// no base-factory chain to join; its factory is a stub returning null
/// (spec §4.7: "Abstract non-object classes get a factory returning null").
pub fn emit_factory(class_desc: &ClassDescription) -> String {
    let class_name = &class_desc.class_name;

    if class_desc.is_abstract && !class_desc.is_object_kind {
        return format!(
            "RtObject *Factory_{class_name}(const char *modulename)\n{{\n  (void)modulename;\n  return NULL;\n}}\n",
        );
    }

    let mut out = String::new();

    if has_own_new(class_desc) {
        out.push_str(&format!(
            "static {class_name} *StaticNew_{class_name}()\n{{\n  return {class_name}::New();\n}}\n",
        ));
    } else {
        out.push_str(&format!(
            "static {class_name} *StaticNew_{class_name}()\n{{\n  return new {class_name}();\n}}\n",
        ));
    }

    let base_factory = match class_desc.primary_base() {
        Some(base) => format!("Factory_{base}"),
        None => "NULL".to_string(),
    };

    out.push_str(&format!(
        "RtObject *Factory_{class_name}(const char *modulename)\n{{\n  return {add_type}(modulename, \"{class_name}\", (void *(*)())StaticNew_{class_name}, {class_name}_methods, {base_factory});\n}}\n",
        add_type = abi::ADD_OBJECT_TYPE,
    ));

    out
}

#[cfg(test)]
mod factory_tests {
    use super::*;
    use classgen_model::MethodDescription;

    fn class(name: &str, super_classes: Vec<String>) -> ClassDescription {
        ClassDescription {
            class_name: name.into(),
            super_classes,
            is_object_kind: true,
            is_abstract: false,
            name_comment: None,
            description: None,
            caveats: None,
            see_also: None,
            functions: vec![],
            compare_mode: None,
            opts_into_hash: false,
        }
    }

    #[test]
    fn abstract_non_object_class_gets_null_factory() {
        let mut c = class("vtkAbstractInterface", vec![]);
        c.is_object_kind = false;
        c.is_abstract = true;
        let out = emit_factory(&c);
        assert!(out.contains("return NULL;"));
        assert!(!out.contains("StaticNew"));
    }

    #[test]
    fn root_class_chains_to_null() {
        let c = class("vtkObjectBase", vec![]);
        let out = emit_factory(&c);
        assert!(out.contains("StaticNew_vtkObjectBase"));
        assert!(out.contains("NULL)"));
    }

    #[test]
    fn derived_class_chains_to_primary_base_factory() {
        let c = class("vtkPoints", vec!["vtkObject".into()]);
        let out = emit_factory(&c);
        assert!(out.contains("Factory_vtkObject)"));
    }

    #[test]
    fn class_with_own_new_wraps_it() {
        let mut c = class("vtkPoints", vec!["vtkObject".into()]);
        let mut return_type = classgen_model::TypeTag::value(classgen_model::BaseKind::Object)
            .with_indirection(classgen_model::Indirection::Pointer);
        return_type.is_static = true;
        let new_method = MethodDescription {
            name: Some("New".into()),
            signature: "static vtkPoints *New()".into(),
            comment: None,
            return_type,
            return_class: Some("vtkPoints".into()),
            arguments: vec![],
            is_public: true,
            is_operator: false,
            is_pure_virtual: false,
            is_legacy: false,
            has_array_failure: false,
            hint: None,
        };
        c.functions.push(new_method);
        let out = emit_factory(&c);
        assert!(out.contains("vtkPoints::New()"));
    }
}
