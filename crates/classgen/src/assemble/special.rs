//! Value-kind shim emission (spec §4.7.3): `Copy`/`Delete`/`Print` for
//! every value-kind class, plus `Compare`/`Hash` for classes that opt in.
//!
//! Grounded on `vtkWrapPython_GenerateSpecialObjectNew`
//! (original_source/Wrapping/vtkWrapPython.c): a value-kind class gets a
//! `Copy`/`Delete`/`Print` trio unconditionally (every value type must be
//! copyable, destructible, and printable to participate in the runtime),
//! and `Compare`/`Hash` only when its registry entry asks for them — the
//! original hard-codes this per class name (`vtkVariant`, `vtkTimeStamp`);
//! here it's read from [`classgen_model::ClassDescription::compare_mode`]
//! and `opts_into_hash` instead (spec §9: "keep as data, don't infer").

use classgen_model::{ClassDescription, CompareMode};

use crate::abi;

/// Everything needed to register a value-kind class's special-type
/// bundle with the runtime.
pub struct SpecialShims {
    pub copy_fn: String,
    pub delete_fn: String,
    pub print_fn: String,
    pub compare_fn: Option<String>,
    pub hash_fn: Option<String>,
    pub methods_table: String,
}

fn emit_copy(class_name: &str) -> String {
    format!(
        "static void *Copy_{class_name}(void *obj)\n{{\n  return new {class_name}(*({class_name} *)obj);\n}}\n",
    )
}

fn emit_delete(class_name: &str) -> String {
    format!("static void Delete_{class_name}(void *obj)\n{{\n  delete ({class_name} *)obj;\n}}\n")
}

fn emit_print(class_name: &str) -> String {
    format!(
        "static void Print_{class_name}(void *obj, ostream &os)\n{{\n  ({class_name} *)obj;\n  ((({class_name} *)obj))->Print(os);\n}}\n",
    )
}

/// `Compare` shim body for one [`CompareMode`]. `FullOrdering` exposes all
/// six relational operators; `StrictOrdering` only `<`/`>` (spec §4.7.3,
/// mirroring the original's per-class hard-coded operator subset).
fn emit_compare(class_name: &str, mode: CompareMode) -> Option<String> {
    let ops: &[&str] = match mode {
        CompareMode::None => return None,
        CompareMode::FullOrdering => &["==", "!=", "<", "<=", ">", ">="],
        CompareMode::StrictOrdering => &["<", ">"],
    };

    let mut body = format!(
        "static RtObject *Compare_{class_name}(void *a, void *b, int op)\n{{\n  {class_name} *pa = ({class_name} *)a;\n  {class_name} *pb = ({class_name} *)b;\n  switch (op) {{\n",
    );
    for op in ops {
        body.push_str(&format!("    case {op_sym}: return {f}(*pa {op} *pb);\n", op_sym = op_symbol(op), f = abi::RICH_COMPARE_FROM_INT));
    }
    body.push_str("    default: break;\n  }\n  Rt_INCREF(Rt_NotImplemented());\n  return Rt_NotImplemented();\n}\n");
    Some(body)
}

fn op_symbol(op: &str) -> &'static str {
    match op {
        "==" => "RT_EQ",
        "!=" => "RT_NE",
        "<" => "RT_LT",
        "<=" => "RT_LE",
        ">" => "RT_GT",
        ">=" => "RT_GE",
        _ => unreachable!("closed set of comparison operators"),
    }
}

fn emit_hash(class_name: &str) -> String {
    format!(
        "static long Hash_{class_name}(void *obj)\n{{\n  return (long){combine}({class_name}Hash(*({class_name} *)obj));\n}}\n",
        combine = abi::HASH_COMBINE,
    )
}

fn emit_methods_table(class_name: &str, has_compare: bool, has_hash: bool) -> String {
    let compare = if has_compare { format!("Compare_{class_name}") } else { "NULL".to_string() };
    let hash = if has_hash { format!("Hash_{class_name}") } else { "NULL".to_string() };
    format!(
        "static {ty} {class_name}_SpecialMethods = {{\n  Copy_{class_name},\n  Delete_{class_name},\n  Print_{class_name},\n  {compare},\n  {hash}\n}};\n",
        ty = abi::SPECIAL_METHODS_TYPE,
    )
}

/// Emit the full shim set for a value-kind class (spec §4.7.3 requires
/// this for every class with `is_value_kind() == true`; it is a defect to
/// skip `Copy`/`Delete`/`Print` even when `Compare`/`Hash` don't apply).
pub fn emit_special_shims(class_desc: &ClassDescription) -> SpecialShims {
    let class_name = &class_desc.class_name;
    let mode = class_desc.compare_mode.unwrap_or(CompareMode::None);
    let compare_fn = emit_compare(class_name, mode);
    let hash_fn = if class_desc.opts_into_hash { Some(emit_hash(class_name)) } else { None };

    SpecialShims {
        copy_fn: emit_copy(class_name),
        delete_fn: emit_delete(class_name),
        print_fn: emit_print(class_name),
        methods_table: emit_methods_table(class_name, compare_fn.is_some(), hash_fn.is_some()),
        compare_fn,
        hash_fn,
    }
}

#[cfg(test)]
mod special_tests {
    use super::*;

    fn class(compare_mode: Option<CompareMode>, opts_into_hash: bool) -> ClassDescription {
        ClassDescription {
            class_name: "Value".into(),
            super_classes: vec![],
            is_object_kind: false,
            is_abstract: false,
            name_comment: None,
            description: None,
            caveats: None,
            see_also: None,
            functions: vec![],
            compare_mode,
            opts_into_hash,
        }
    }

    #[test]
    fn plain_value_kind_gets_copy_delete_print_only() {
        let shims = emit_special_shims(&class(None, false));
        assert!(shims.copy_fn.contains("Copy_Value"));
        assert!(shims.delete_fn.contains("delete (Value *)obj"));
        assert!(shims.compare_fn.is_none());
        assert!(shims.hash_fn.is_none());
        assert!(shims.methods_table.contains("NULL,\n  NULL"));
    }

    #[test]
    fn full_ordering_emits_all_six_operators() {
        let shims = emit_special_shims(&class(Some(CompareMode::FullOrdering), true));
        let compare = shims.compare_fn.unwrap();
        for op in ["RT_EQ", "RT_NE", "RT_LT", "RT_LE", "RT_GT", "RT_GE"] {
            assert!(compare.contains(op), "missing {op}");
        }
        assert!(shims.hash_fn.is_some());
    }

    #[test]
    fn strict_ordering_emits_only_lt_gt() {
        let shims = emit_special_shims(&class(Some(CompareMode::StrictOrdering), false));
        let compare = shims.compare_fn.unwrap();
        assert!(compare.contains("RT_LT"));
        assert!(compare.contains("RT_GT"));
        assert!(!compare.contains("RT_EQ"));
    }
}
