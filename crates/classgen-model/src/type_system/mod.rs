//! Canonical type encoding shared across the engine.
//!
//! A [`TypeTag`] is a record, not a bit-packed integer: [`BaseKind`] and
//! [`Indirection`] are plain enums, and qualifiers (`unsigned`, `const`,
//! `static`) are explicit booleans. Every other component dispatches on a
//! `TypeTag`; keeping the record flat makes that dispatch total and
//! auditable instead of a virtual call graph.

mod base_kind;
mod indirection;
mod type_tag;

#[cfg(test)]
mod base_kind_tests;

pub use base_kind::BaseKind;
pub use indirection::Indirection;
pub use type_tag::TypeTag;
