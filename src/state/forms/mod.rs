//! Form domain layer
//!
//! Headless form state: dotted field paths, the input components that
//! register against them, and the controller that owns the live values and
//! error annotations.

mod controller;
mod field;
mod path;
mod value_tree;

pub use controller::{ErrorMap, FormController};
pub use field::{FieldHandle, InputField, InputKind};
pub use path::{FieldPath, PathError, Scope};
