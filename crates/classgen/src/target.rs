//! Ambient compile-time toggles the emitter consults (spec §6, §9).
//!
//! The original tool branches on these with inline `#if` blocks scattered
//! through the emitter. A single invocation of this engine targets exactly
//! one concrete runtime, so there is nothing to guard at generation time:
//! `TargetProfile` is consulted once per decision and the output resolves
//! statically for that profile, rather than re-emitting `#if Host_Supports_X`
//! into text nobody will ever recompile against a second host.

/// Compile-time capabilities of the host scripting runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetProfile {
    /// Host has a native `long long` integer type.
    pub supports_long_long: bool,
    /// Host's tuple parser has a dedicated 64-bit integer format code.
    pub supports_int64: bool,
    /// The runtime's object-identity type (`id_type`) is 64 bits wide.
    pub ids_are_64_bit: bool,
    /// `unsigned int` and `unsigned long` share a format code on this host.
    pub unsigned_int_matches_long_in_width: bool,
    /// The host scripting runtime has a native unicode string type.
    pub unicode_enabled: bool,
    /// Methods marked `is_legacy` should be skipped entirely.
    pub legacy_removed: bool,
}

impl TargetProfile {
    /// A conservative profile: no optional host capability enabled, legacy
    /// methods kept. Useful as a baseline for fixtures and as the CLI
    /// default absent explicit flags.
    pub const fn baseline() -> Self {
        Self {
            supports_long_long: false,
            supports_int64: false,
            ids_are_64_bit: false,
            unsigned_int_matches_long_in_width: false,
            unicode_enabled: false,
            legacy_removed: false,
        }
    }

    /// A profile with every optional capability enabled, suitable for a
    /// modern 64-bit host with a unicode-capable runtime.
    pub const fn modern() -> Self {
        Self {
            supports_long_long: true,
            supports_int64: true,
            ids_are_64_bit: true,
            unsigned_int_matches_long_in_width: true,
            unicode_enabled: true,
            legacy_removed: true,
        }
    }
}

impl Default for TargetProfile {
    fn default() -> Self {
        Self::baseline()
    }
}

#[cfg(test)]
mod target_tests;
