//! Verdict Wire - JSON wire format for Verdict condition trees
//!
//! This crate provides the bidirectional mapping between the in-memory
//! condition tree and the compact wire JSON embedded in persisted entities.
//!
//! # Wire format
//!
//! ```text
//! ConditionList ::= ConditionNode[]
//! ConditionNode ::= LeafJSON | GroupJSON
//! LeafJSON  ::= { field, operation, value, logical_operator? }
//! GroupJSON ::= { operation: "and"|"or"|"not", conditions: ConditionNode[] }
//! ```
//!
//! ## Examples
//!
//! Single leaf:
//! ```json
//! [{"field":"age","operation":">=","value":18}]
//! ```
//!
//! Group:
//! ```json
//! [{"operation":"or","conditions":[
//!     {"field":"first_name","operation":"=","value":"Hisham"},
//!     {"field":"last_name","operation":"startswith","value":"Nasr"}]}]
//! ```
//!
//! # Normalization
//!
//! An `and`/`or` group with a single child serializes as that child directly
//! (no `conditions` wrapper). A single-child `not` group keeps its wrapper,
//! since flattening would drop the negation. Round-tripping therefore
//! preserves semantics but may change shape.
//!
//! # Membership values
//!
//! `in`/`not in` values serialize as native JSON arrays. On parse, both a
//! native array and the legacy comma-joined string form are accepted; the
//! string form is split on `,` with tokens trimmed and empties dropped.

pub mod error;
pub mod parse;
pub mod serialize;

pub use error::{ParseError, Result};
pub use parse::{parse_str, parse_value};
pub use serialize::{serialize, serialize_node, serialize_string};
