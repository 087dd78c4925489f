//! Per-consumer operator registries
//!
//! The workflow, approval and mapper editors historically carried their own
//! near-identical operator lists. A registry is the injected configuration
//! that replaces those forks: one evaluator, different operator sets.

use crate::operator::{Operator, OperatorCategory};
use crate::types::FieldType;

/// The catalog of operators a consumer may use
///
/// Operators are held in category order (comparison, text, set, emptiness,
/// arithmetic, approval) so `operators_for` returns a stable, grouped list
/// suitable for direct display.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorRegistry {
    operators: Vec<Operator>,
}

const COMPARISON: &[Operator] = &[
    Operator::Eq,
    Operator::Ne,
    Operator::Gt,
    Operator::Lt,
    Operator::Ge,
    Operator::Le,
];

const TEXT: &[Operator] = &[
    Operator::Contains,
    Operator::StartsWith,
    Operator::EndsWith,
    Operator::Matches,
];

const SET: &[Operator] = &[Operator::In, Operator::NotIn];

const EMPTINESS: &[Operator] = &[
    Operator::IsEmpty,
    Operator::IsNotEmpty,
    Operator::IsNull,
    Operator::IsNotNull,
];

const ARITHMETIC: &[Operator] = &[
    Operator::Add,
    Operator::Sub,
    Operator::Mul,
    Operator::Div,
    Operator::Pow,
];

const APPROVAL: &[Operator] = &[
    Operator::IsApprovedBy,
    Operator::IsRejectedBy,
    Operator::PendingApprovalFrom,
    Operator::HasRole,
    Operator::InGroup,
];

impl OperatorRegistry {
    /// Registry for workflow/mapper condition editors (no approval operators)
    pub fn workflow() -> Self {
        let mut operators = Vec::new();
        operators.extend_from_slice(COMPARISON);
        operators.extend_from_slice(TEXT);
        operators.extend_from_slice(SET);
        operators.extend_from_slice(EMPTINESS);
        operators.extend_from_slice(ARITHMETIC);
        Self { operators }
    }

    /// Registry for approval-step condition editors
    pub fn approval() -> Self {
        let mut registry = Self::workflow();
        registry.operators.extend_from_slice(APPROVAL);
        registry
    }

    /// Build a registry from an explicit operator list
    ///
    /// Order is kept as given; duplicates are dropped.
    pub fn from_operators(operators: impl IntoIterator<Item = Operator>) -> Self {
        let mut deduped = Vec::new();
        for op in operators {
            if !deduped.contains(&op) {
                deduped.push(op);
            }
        }
        Self { operators: deduped }
    }

    /// Whether this registry offers the given operator
    pub fn contains(&self, operator: Operator) -> bool {
        self.operators.contains(&operator)
    }

    /// Operators valid for a field type, grouped by category
    pub fn operators_for(&self, field_type: FieldType) -> Vec<Operator> {
        self.operators
            .iter()
            .copied()
            .filter(|op| op.valid_for(field_type))
            .collect()
    }

    /// Whether the operator needs a right-hand value
    pub fn requires_value(&self, operator: Operator) -> bool {
        operator.requires_value()
    }

    /// All operators in this registry, in category order
    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }
}

impl Default for OperatorRegistry {
    fn default() -> Self {
        Self::workflow()
    }
}
