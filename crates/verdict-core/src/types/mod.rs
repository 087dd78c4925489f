//! Type system for Verdict
//!
//! This module contains the runtime type system including:
//! - Value types
//! - Field catalog definitions

pub mod field;
pub mod value;

pub use field::{FieldCatalog, FieldRef, FieldType};
pub use value::Value;
