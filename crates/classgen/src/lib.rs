//! classgen: translates a parsed C++ class description into a scripting-
//! runtime binding source file.
//!
//! This crate provides the translation engine, spec §1-2:
//! - `target` - ambient host-capability toggles (`TargetProfile`)
//! - `text` - quote-escaping and comment/signature reflow
//! - `wrap` - the wrappability filter (spec §4.3)
//! - `prune` - the overload pruner (spec §4.4)
//! - `emit` - emitter primitives: temporaries, format/arg-check
//!   descriptors, return marshalling (spec §4.5)
//! - `synth` - the method synthesizer: per-overload dispatchers, method
//!   tables, master dispatchers (spec §4.6)
//! - `assemble` - the class assembler: prologue, header discovery,
//!   overlays, docstrings, factories, special-type shims (spec §4.7)
//! - `abi` - names of the abstract scripting-runtime C ABI targeted by
//!   generated code (spec §6)
//! - `diagnostics` - fatal errors and the out-of-band skipped-method list

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod abi;
pub mod assemble;
pub mod diagnostics;
pub mod emit;
pub mod prune;
pub mod synth;
pub mod target;
pub mod text;
pub mod wrap;

pub use diagnostics::{Error, Result, SkipReason, SkippedMethod};
pub use target::TargetProfile;

use classgen_model::ClassDescription;

/// Generate the complete C source implementing `class_desc`'s binding
/// under `profile`, alongside every method the wrappability filter or
/// overload pruner rejected (spec §7: "Empty class name" is the one
/// condition the engine refuses to emit for).
pub fn generate(class_desc: &ClassDescription, profile: &TargetProfile) -> Result<(String, Vec<SkippedMethod>)> {
    if class_desc.class_name.is_empty() {
        return Err(Error::EmptyClassName);
    }
    Ok(assemble::generate_class(class_desc, profile))
}
