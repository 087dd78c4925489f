//! Condition tree model
//!
//! This module provides the canonical in-memory representation of a
//! condition, shared by every editor family:
//! - Field visibility rules on workflow elements
//! - Approval-step rules
//! - Mapper field rules
//!
//! A node is either a leaf (`field operator value`) or a group (an
//! `and`/`or`/`not` combinator over one or more child nodes). The persisted
//! unit is an ordered list of nodes; top-level siblings combine left to
//! right with AND unless the preceding leaf carries an explicit
//! `logical_operator: or` override.
//!
//! The wire JSON shape lives in `verdict-wire`; evaluation in
//! `verdict-eval`. This module is purely the data model.

mod types;

pub use types::{Combinator, Condition, ConditionGroup, ConditionList, ConditionNode, Operand};
