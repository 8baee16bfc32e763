//! Error reporting (spec §7).
//!
//! The engine reports only structural errors fatal to the whole
//! invocation; everything else is resolved by skipping the offending
//! overload rather than failing generation. Skipped methods are not an
//! error: [`crate::generate`] returns them alongside the generated source
//! so a caller can explain, rather than merely note, why an overload
//! produced no dispatcher.

/// Fatal, whole-invocation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Spec §7: an empty class name is the one condition the engine
    /// refuses to emit for, rather than skipping.
    #[error("refusing to emit a binding for a class with an empty name")]
    EmptyClassName,
}

/// Result type for top-level generation.
pub type Result<T> = std::result::Result<T, Error>;

/// Why the wrappability filter or overload pruner removed a method from
/// the output, reported out-of-band rather than logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Rejected by one of the eleven wrappability rules (spec §4.3); the
    /// field is the rule number, 1-indexed as in the spec table.
    Unwrappable { rule: u8 },
    /// Tombstoned by the overload pruner in favor of a preferred sibling
    /// signature (spec §4.4).
    Dominated,
    /// Marked `is_legacy` and the active [`crate::target::TargetProfile`]
    /// has `legacy_removed` set (spec §6, §9: resolved statically per
    /// invocation rather than guarded with a preprocessor `#ifdef`).
    LegacyRemoved,
}

/// A method that contributed no dispatcher to the output, and why.
#[derive(Debug, Clone)]
pub struct SkippedMethod {
    /// The method's original declared name; tombstoned methods have
    /// already had [`classgen_model::MethodDescription::name`] cleared by
    /// the time this is recorded, so it is captured here instead.
    pub name: String,
    pub reason: SkipReason,
}
