//! Verdict Core - Core types and definitions for the Verdict condition engine
//!
//! This crate provides the fundamental types used across the Verdict ecosystem:
//! - Value types for runtime data
//! - Field catalog (the fields a condition may refer to)
//! - Operator enumeration and per-consumer operator registries
//! - The condition tree model (leaves and and/or/not groups)
//! - Error types

pub mod condition;
pub mod error;
pub mod operator;
pub mod registry;
pub mod types;

// Re-export commonly used types
pub use condition::{Combinator, Condition, ConditionGroup, ConditionList, ConditionNode, Operand};
pub use error::CoreError;
pub use operator::{Arity, LeafOperator, Operator, OperatorCategory};
pub use registry::OperatorRegistry;
pub use types::{FieldCatalog, FieldRef, FieldType, Value};
