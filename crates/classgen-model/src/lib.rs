//! Input schema and type model for `classgen`.
//!
//! This crate contains:
//! - The type model (`TypeTag`, `BaseKind`, `Indirection`) classgen dispatches on
//! - The class-description schema (`ClassDescription`, `MethodDescription`,
//!   `Argument`, `Hint`) produced by the external C++ parser and consumed
//!   read-only by the engine

mod class;
mod type_system;

pub use class::{Argument, ClassDescription, CompareMode, Hint, MethodDescription};
pub use type_system::{BaseKind, Indirection, TypeTag};
