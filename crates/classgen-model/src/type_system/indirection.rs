//! Indirection levels an argument or return type may carry.

use serde::{Deserialize, Serialize};

/// How a value is passed: by value, or through some level of pointer/reference.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indirection {
    /// Passed or returned by value.
    #[default]
    None,
    /// `T*`
    Pointer,
    /// `T&`
    Reference,
    /// `T**`
    PointerToPointer,
    /// `T*&`
    PointerReference,
}

impl Indirection {
    /// Whether this is exactly one level of pointer indirection.
    pub fn is_pointer(self) -> bool {
        self == Self::Pointer
    }

    /// Whether this is a reference.
    pub fn is_reference(self) -> bool {
        self == Self::Reference
    }

    /// Whether this is the "flat" set the wrappability filter accepts for
    /// ordinary (non-object) arguments: by value, pointer, or reference.
    /// `PointerToPointer` and `PointerReference` never wrap (spec §4.3 rule 4).
    pub fn is_flat(self) -> bool {
        matches!(self, Self::None | Self::Pointer | Self::Reference)
    }
}
