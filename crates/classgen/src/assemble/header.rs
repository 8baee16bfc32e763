//! Header discovery (spec §4.7.1): which `#include`s the prologue needs
//! for every object/string/unicode class referenced by a wrappable
//! method's arguments or return value.
//!
//! Grounded on `vtkWrapPython_GenerateSpecialHeaders`
//! (original_source/Wrapping/vtkWrapPython.c): scan every wrappable
//! method's return value and arguments, substitute the canonical header
//! name for `string`/`unicode_string`, apply the fixed exception table
//! for types whose header doesn't match their name, dedupe, and drop the
//! subject class's own header.

use classgen_model::{BaseKind, ClassDescription, Indirection};
use indexmap::IndexSet;

use crate::wrap::is_wrappable;

/// Maps a type name that isn't defined in a header of its own name to the
/// header that actually declares it (spec §4.7.1's "fixed exception
/// table"). A short, representative subset of the original's table —
/// the mechanism (a lookup, not identity branches) is what's load-bearing
/// here, not an exhaustive transcription of VTK's class list.
const EXCEPTION_TABLE: &[(&str, &str)] = &[
    ("vtkCollectionSimpleIterator", "vtkCollection"),
    ("vtkLibHandle", "vtkDynamicLoader"),
    ("vtkMultiThreaderIDType", "vtkMultiThreader"),
    ("vtkThreadFunctionType", "vtkMultiThreader"),
    ("vtkEdgeType", "vtkGraph"),
    ("vtkInEdgeType", "vtkGraph"),
    ("vtkOutEdgeType", "vtkGraph"),
    ("vtkProcessFunctionType", "vtkMultiProcessController"),
    ("vtkRMIFunctionType", "vtkMultiProcessController"),
];

fn resolve_header(type_name: &str) -> &str {
    EXCEPTION_TABLE
        .iter()
        .find(|(name, _)| *name == type_name)
        .map_or(type_name, |(_, header)| *header)
}

/// Distinct `#include "<Header>.h"` lines needed by every wrappable
/// method of `class_desc`, excluding the subject class's own header.
pub fn discover_headers(class_desc: &ClassDescription) -> Vec<String> {
    let mut types: IndexSet<String> = IndexSet::new();

    let mut note = |base: BaseKind, indirection: Indirection, class_name: Option<&str>| {
        if indirection == Indirection::Pointer && base != BaseKind::Object {
            return;
        }
        let name = match base {
            BaseKind::String => Some("vtkStdString".to_string()),
            BaseKind::UnicodeString => Some("vtkUnicodeString".to_string()),
            BaseKind::Object => class_name.map(str::to_string),
            _ => None,
        };
        if let Some(name) = name
            && name != class_desc.class_name
        {
            types.insert(name);
        }
    };

    for m in &class_desc.functions {
        if !is_wrappable(m) {
            continue;
        }
        note(m.return_type.base_kind, m.return_type.indirection, m.return_class.as_deref());
        for a in &m.arguments {
            note(a.type_tag.base_kind, a.type_tag.indirection, a.class_name.as_deref());
        }
    }

    types
        .into_iter()
        .map(|t| resolve_header(&t).to_string())
        .filter(|h| *h != class_desc.class_name)
        .collect::<IndexSet<_>>()
        .into_iter()
        .map(|h| format!("#include \"{h}.h\"\n"))
        .collect()
}
