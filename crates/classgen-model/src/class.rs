//! The input schema: `ClassDescription` and `MethodDescription`.
//!
//! These are produced by the external C++ parser and consumed read-only by
//! the engine, with two narrow exceptions documented on [`MethodDescription`]:
//! the overload pruner may tombstone a method by clearing its `name`, and the
//! method synthesizer may append extra signature text to a surviving method
//! for docstring aggregation.

use serde::{Deserialize, Serialize};

use crate::TypeTag;

/// A single formal argument of a method.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Argument {
    pub type_tag: TypeTag,
    pub name: Option<String>,
    /// Element count for a fixed-length numeric array argument.
    /// `> 0` iff the argument is such an array (see [`TypeTag::is_array`]).
    #[serde(default)]
    pub array_count: i32,
    /// Class name for an object-kind argument (pointer, reference, or value).
    #[serde(default)]
    pub class_name: Option<String>,
}

impl Argument {
    pub fn new(type_tag: TypeTag) -> Self {
        Self {
            type_tag,
            name: None,
            array_count: 0,
            class_name: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn array_count(mut self, count: i32) -> Self {
        self.array_count = count;
        self
    }

    pub fn class_name(mut self, name: impl Into<String>) -> Self {
        self.class_name = Some(name.into());
        self
    }
}

/// Parser-supplied metadata giving the element count of a fixed-size
/// numeric pointer return, without which such returns are unwrappable.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Hint {
    pub tag: TypeTag,
    pub size: i32,
}

/// One overload of a wrapped C++ method.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MethodDescription {
    /// Nullable; used as a tombstone by the overload pruner (§4.4). A
    /// cleared name means this signature was dominated by a sibling and
    /// contributes nothing but its signature text to the survivor's
    /// docstring.
    pub name: Option<String>,
    /// Original C++ declaration text, used for docstrings.
    pub signature: String,
    pub comment: Option<String>,
    pub return_type: TypeTag,
    #[serde(default)]
    pub return_class: Option<String>,
    #[serde(default)]
    pub arguments: Vec<Argument>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub is_operator: bool,
    #[serde(default)]
    pub is_pure_virtual: bool,
    #[serde(default)]
    pub is_legacy: bool,
    #[serde(default)]
    pub has_array_failure: bool,
    #[serde(default)]
    pub hint: Option<Hint>,
}

impl MethodDescription {
    /// Extra signature text appended by the synthesizer when a sibling
    /// overload is tombstoned: its declaration still belongs in the
    /// survivor's aggregated docstring.
    pub fn append_signature(&mut self, extra: &str) {
        self.signature.push('\n');
        self.signature.push_str(extra);
    }

    /// A constructor is a same-named, non-destructor method: the name
    /// matches the class and the declaration text carries no `~` before
    /// its argument list.
    pub fn is_constructor(&self, class_name: &str) -> bool {
        let is_destructor = self
            .signature
            .split('(')
            .next()
            .is_some_and(|head| head.contains('~'));
        self.name.as_deref() == Some(class_name) && !is_destructor
    }

    pub fn is_static(&self) -> bool {
        self.return_type.is_static
    }
}

/// How a value-kind class opts in to the generated `Compare` shim.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareMode {
    /// No `Compare`/`Hash` support.
    None,
    /// Full six-way comparison (`==`, `!=`, `<`, `<=`, `>`, `>=`).
    FullOrdering,
    /// Only `<` and `>` are meaningful.
    StrictOrdering,
}

/// Full description of a C++ class, as produced by the external parser.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClassDescription {
    pub class_name: String,
    #[serde(default)]
    pub super_classes: Vec<String>,
    #[serde(default)]
    pub is_object_kind: bool,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default)]
    pub name_comment: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub caveats: Option<String>,
    #[serde(default)]
    pub see_also: Option<String>,
    #[serde(default)]
    pub functions: Vec<MethodDescription>,
    /// Opt-in registry entry for `Compare`/`Hash` shims on value-kind
    /// classes. `None` behaves as [`CompareMode::None`].
    #[serde(default)]
    pub compare_mode: Option<CompareMode>,
    /// Whether a `Hash(self, &immutable)` shim should be emitted. Hard-coded
    /// per class in the original tool; kept here as data rather than
    /// inferred (spec §9 open question).
    #[serde(default)]
    pub opts_into_hash: bool,
}

impl ClassDescription {
    /// The primary base class, if any (index 0 of `super_classes`).
    pub fn primary_base(&self) -> Option<&str> {
        self.super_classes.first().map(String::as_str)
    }

    /// Value-kind: not object-kind, and not abstract.
    pub fn is_value_kind(&self) -> bool {
        !self.is_object_kind && !self.is_abstract
    }
}
