//! The `TypeTag` record: the unit of decision throughout the engine.
//!
//! The original tool packs this into a 32-bit field with masks for base
//! type, sign, indirection, const and static. Re-expressed here as a plain
//! record of enums: the bit layout was never a contract, only an
//! implementation detail of the parser that produced it.

use serde::{Deserialize, Serialize};

use super::base_kind::BaseKind;
use super::indirection::Indirection;

/// Canonical encoding of a C++ argument or return type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct TypeTag {
    pub base_kind: BaseKind,
    #[serde(default)]
    pub unsigned: bool,
    #[serde(default)]
    pub indirection: Indirection,
    #[serde(default)]
    pub is_const: bool,
    #[serde(default)]
    pub is_static: bool,
}

impl TypeTag {
    /// Construct a by-value tag with no qualifiers.
    pub fn value(base_kind: BaseKind) -> Self {
        Self {
            base_kind,
            unsigned: false,
            indirection: Indirection::None,
            is_const: false,
            is_static: false,
        }
    }

    /// Same tag with the given indirection.
    pub fn with_indirection(mut self, indirection: Indirection) -> Self {
        self.indirection = indirection;
        self
    }

    /// Same tag, marked const.
    pub fn with_const(mut self, is_const: bool) -> Self {
        self.is_const = is_const;
        self
    }

    /// Same tag, marked unsigned.
    pub fn with_unsigned(mut self, unsigned: bool) -> Self {
        self.unsigned = unsigned;
        self
    }

    /// Drop `const`/`static` qualifiers. The engine compares on unqualified
    /// tags everywhere except when deciding whether to emit `const`.
    pub fn unqualified(self) -> Self {
        Self {
            is_const: false,
            is_static: false,
            ..self
        }
    }

    pub fn is_unsigned(self) -> bool {
        self.unsigned && self.base_kind.is_integer()
    }

    pub fn is_const(self) -> bool {
        self.is_const
    }

    pub fn is_static(self) -> bool {
        self.is_static
    }

    pub fn is_pointer(self) -> bool {
        self.indirection.is_pointer()
    }

    pub fn is_reference(self) -> bool {
        self.indirection.is_reference()
    }

    pub fn is_void(self) -> bool {
        self.base_kind == BaseKind::Void
    }

    pub fn is_object(self) -> bool {
        self.base_kind == BaseKind::Object
    }

    pub fn is_object_ptr(self) -> bool {
        self.is_object() && self.indirection == Indirection::Pointer
    }

    pub fn is_object_ref(self) -> bool {
        self.is_object() && self.indirection == Indirection::Reference
    }

    pub fn is_object_value(self) -> bool {
        self.is_object() && self.indirection == Indirection::None
    }

    pub fn is_string(self) -> bool {
        self.base_kind == BaseKind::String
    }

    pub fn is_unicode(self) -> bool {
        self.base_kind == BaseKind::UnicodeString
    }

    pub fn is_char_ptr(self) -> bool {
        self.base_kind == BaseKind::Char && self.indirection == Indirection::Pointer
    }

    pub fn is_void_ptr(self) -> bool {
        self.base_kind == BaseKind::Void && self.indirection == Indirection::Pointer
    }

    pub fn is_function(self) -> bool {
        self.base_kind == BaseKind::Function
    }

    /// True when this is a fixed-length numeric array: pointer indirection,
    /// numeric base, and a positive element count supplied out-of-band by
    /// the caller (the tag itself carries no count; see [`crate::Argument`]).
    pub fn is_array(self, array_count: i32) -> bool {
        self.indirection == Indirection::Pointer && array_count > 0 && self.base_kind.is_numeric()
    }
}
