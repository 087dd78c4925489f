//! Condition tree types

use crate::error::CoreError;
use crate::operator::LeafOperator;
use crate::types::Value;

/// Right-hand operand of a leaf condition
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Literal value (scalars and list literals)
    Literal(Value),
    /// Reference to another field's runtime value
    Field(String),
}

impl Operand {
    /// Create a literal operand
    pub fn literal(value: impl Into<Value>) -> Self {
        Operand::Literal(value.into())
    }

    /// Create a field-reference operand
    pub fn field(name: impl Into<String>) -> Self {
        Operand::Field(name.into())
    }

    /// Check if this is a field reference
    pub fn is_field_ref(&self) -> bool {
        matches!(self, Operand::Field(_))
    }
}

/// Boolean operator joining a group's children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// All children must pass
    And,
    /// At least one child must pass
    Or,
    /// Negation of the AND-combination of the children
    Not,
}

impl Combinator {
    /// Wire spelling of this combinator
    pub fn as_str(&self) -> &'static str {
        match self {
            Combinator::And => "and",
            Combinator::Or => "or",
            Combinator::Not => "not",
        }
    }

    /// Parse a wire spelling
    pub fn from_str(s: &str) -> Result<Combinator, CoreError> {
        match s {
            "and" => Ok(Combinator::And),
            "or" => Ok(Combinator::Or),
            "not" => Ok(Combinator::Not),
            other => Err(CoreError::UnknownCombinator(other.to_string())),
        }
    }
}

/// A single field/operator/value condition (a leaf)
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    /// Field name, resolved through the evaluation bindings
    pub field: String,
    /// Operator slot; unrecognized wire symbols are preserved here
    pub operator: LeafOperator,
    /// Right-hand operand
    pub value: Operand,
    /// Legacy per-sibling override: when `Some(Or)`, this leaf combines
    /// with the *next* top-level sibling using OR instead of AND.
    /// Distinct from a group's combinator; only meaningful at top level.
    pub logical_operator: Option<Combinator>,
}

impl Condition {
    /// Create a new leaf condition
    pub fn new(
        field: impl Into<String>,
        operator: impl Into<LeafOperator>,
        value: Operand,
    ) -> Self {
        Self {
            field: field.into(),
            operator: operator.into(),
            value,
            logical_operator: None,
        }
    }

    /// Set the sibling logical-operator override
    pub fn with_logical_operator(mut self, combinator: Combinator) -> Self {
        self.logical_operator = Some(combinator);
        self
    }
}

/// A combinator over one or more child nodes
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionGroup {
    /// Boolean operator joining the children
    pub combinator: Combinator,
    /// Ordered child nodes (length >= 1 for a well-formed group)
    pub children: Vec<ConditionNode>,
}

impl ConditionGroup {
    /// Create a group with an explicit combinator
    pub fn new(combinator: Combinator, children: Vec<ConditionNode>) -> Self {
        Self {
            combinator,
            children,
        }
    }

    /// Create an AND group
    pub fn all(children: Vec<ConditionNode>) -> Self {
        Self::new(Combinator::And, children)
    }

    /// Create an OR group
    pub fn any(children: Vec<ConditionNode>) -> Self {
        Self::new(Combinator::Or, children)
    }

    /// Create a NOT group (negates the AND-combination of the children)
    pub fn negated(children: Vec<ConditionNode>) -> Self {
        Self::new(Combinator::Not, children)
    }

    /// All leaf conditions in this group, depth-first
    pub fn leaves(&self) -> Vec<&Condition> {
        let mut result = Vec::new();
        self.collect_leaves(&mut result);
        result
    }

    fn collect_leaves<'a>(&'a self, result: &mut Vec<&'a Condition>) {
        for child in &self.children {
            match child {
                ConditionNode::Leaf(condition) => result.push(condition),
                ConditionNode::Group(group) => group.collect_leaves(result),
            }
        }
    }
}

/// A node in a condition tree
#[derive(Debug, Clone, PartialEq)]
pub enum ConditionNode {
    /// Single condition
    Leaf(Condition),
    /// Nested group
    Group(ConditionGroup),
}

impl ConditionNode {
    /// Create a leaf node
    pub fn leaf(
        field: impl Into<String>,
        operator: impl Into<LeafOperator>,
        value: Operand,
    ) -> Self {
        ConditionNode::Leaf(Condition::new(field, operator, value))
    }

    /// Create a group node
    pub fn group(combinator: Combinator, children: Vec<ConditionNode>) -> Self {
        ConditionNode::Group(ConditionGroup::new(combinator, children))
    }

    /// The sibling logical-operator override, if this node is a leaf
    pub fn logical_operator(&self) -> Option<Combinator> {
        match self {
            ConditionNode::Leaf(condition) => condition.logical_operator,
            ConditionNode::Group(_) => None,
        }
    }
}

/// The persisted/transported unit: an ordered list of top-level nodes
pub type ConditionList = Vec<ConditionNode>;
