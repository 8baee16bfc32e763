//! Class docstring assembly (spec §4.7.1): the text the runtime shows a
//! user who introspects the generated type.
//!
//! Grounded on `vtkWrapPython_ClassDoc`
//! (original_source/Wrapping/vtkWrapPython.c): name line, superclass
//! line, reflowed description/caveats/see-also sections at 70 columns,
//! and — for value-kind classes — every surviving constructor's
//! reflowed signature, all chunked into ≤400-byte string-literal pieces
//! the emitted source concatenates back together (spec §4.2: a single C
//! string literal is capped per compiler, so long docstrings are split).

use classgen_model::ClassDescription;

use crate::synth::NameGroup;
use crate::text::{quote_for_string_literal, reflow_comment};

const REFLOW_WIDTH: usize = 70;
const CHUNK_SIZE: usize = 400;

/// Build the full docstring body for `class_desc`, including constructor
/// signatures drawn from `constructor_groups` when the class is value-kind.
pub fn build_docstring(class_desc: &ClassDescription, constructor_groups: &[NameGroup]) -> String {
    let mut sections: Vec<String> = Vec::new();

    sections.push(class_desc.class_name.clone());

    if let Some(base) = class_desc.primary_base() {
        sections.push(format!("Superclass: {base}"));
    }

    if class_desc.is_value_kind() {
        for group in constructor_groups {
            for sig in &group.docstring_signatures {
                sections.push(reflow_comment(sig, REFLOW_WIDTH));
            }
        }
    }

    if let Some(desc) = &class_desc.description {
        sections.push(reflow_comment(desc, REFLOW_WIDTH));
    }
    if let Some(caveats) = &class_desc.caveats {
        sections.push(format!("Caveats:\n\n{}", reflow_comment(caveats, REFLOW_WIDTH)));
    }
    if let Some(see_also) = &class_desc.see_also {
        sections.push(format!("See Also:\n\n{}", reflow_comment(see_also, REFLOW_WIDTH)));
    }

    sections.join("\n\n")
}

/// Split `docstring` into consecutive, already-escaped C string-literal
/// pieces of at most [`CHUNK_SIZE`] bytes each, ready to be emitted as
/// adjacent literals (C concatenates them at compile time).
pub fn chunk_docstring(docstring: &str) -> Vec<String> {
    if docstring.is_empty() {
        return vec![String::new()];
    }

    let mut chunks = Vec::new();
    let bytes = docstring.as_bytes();
    let mut start = 0;
    while start < bytes.len() {
        let end = (start + CHUNK_SIZE).min(bytes.len());
        // Never split inside a UTF-8 multi-byte sequence.
        let mut end = end;
        while end < bytes.len() && !docstring.is_char_boundary(end) {
            end -= 1;
        }
        chunks.push(quote_for_string_literal(&docstring[start..end], CHUNK_SIZE + 64));
        start = end;
    }
    chunks
}
