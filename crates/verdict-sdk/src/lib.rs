//! Verdict SDK - High-level API for the Verdict condition engine
//!
//! One engine, configured per consumer: the workflow, approval and mapper
//! editors each construct a [`ConditionEngine`] with their operator registry
//! (and optionally their field catalog) and get a uniform
//! parse / serialize / evaluate surface.

pub mod engine;
pub mod error;

// Re-export main types
pub use engine::ConditionEngine;
pub use error::{Result, SdkError};

// Re-export commonly used types from dependencies
pub use verdict_core::{
    Combinator, Condition, ConditionGroup, ConditionList, ConditionNode, FieldCatalog, FieldRef,
    FieldType, LeafOperator, Operand, Operator, OperatorRegistry, Value,
};
pub use verdict_eval::{Bindings, Evaluation, TraceEntry};
pub use verdict_wire::ParseError;
