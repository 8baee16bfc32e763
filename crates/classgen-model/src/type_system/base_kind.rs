//! Canonical base-kind definitions.
//!
//! This enum represents the semantic base kind of a C++ argument or return
//! type, independent of signedness, indirection, or cv-qualification. It is
//! the leaf of the `TypeTag` record (see [`crate::TypeTag`]).

use serde::{Deserialize, Serialize};

/// Semantic base kind of a C++ type, stripped of sign/indirection/qualifiers.
///
/// This is the canonical enumeration the wrappability filter and the
/// emitter dispatch on. `Unknown` is the catch-all the external parser
/// produces for anything it cannot classify; it is never wrappable.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseKind {
    Void,
    Bool,
    Char,
    SignedChar,
    Short,
    Int,
    Long,
    LongLong,
    Int64,
    IdType,
    Float,
    Double,
    String,
    UnicodeString,
    Object,
    Function,
    Unknown,
}

impl BaseKind {
    /// Whether `unsigned` is a meaningful qualifier for this kind.
    ///
    /// Only integer kinds carry a sign; asking for unsigned on e.g. `Float`
    /// or `Object` is always `false` regardless of the `unsigned` bit the
    /// parser set (the parser is trusted but the model does not propagate
    /// a meaningless qualifier into decisions).
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            Self::Bool
                | Self::Char
                | Self::SignedChar
                | Self::Short
                | Self::Int
                | Self::Long
                | Self::LongLong
                | Self::Int64
                | Self::IdType
        )
    }

    /// Whether this kind is one of the two floating-point kinds.
    pub fn is_floating(self) -> bool {
        matches!(self, Self::Float | Self::Double)
    }

    /// Whether this is a numeric kind (integer or floating), the set
    /// `is_array` and the pointer-to-numeric-array rules range over.
    pub fn is_numeric(self) -> bool {
        self.is_integer() || self.is_floating()
    }

    /// Whether this kind is wrappable at all, independent of indirection.
    /// Mirrors the `supported_types` table consulted by the wrappability
    /// filter (spec §4.3, rule 3/10).
    pub fn is_supported(self) -> bool {
        !matches!(self, Self::Unknown | Self::Function)
    }
}
