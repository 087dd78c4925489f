//! Operators for Verdict conditions
//!
//! The operator set is the union of what the workflow, approval and mapper
//! editors offer. Which subset a given consumer sees is decided by its
//! [`OperatorRegistry`](crate::registry::OperatorRegistry), not by forking
//! the enum.

use crate::types::FieldType;
use serde::{Deserialize, Serialize};

/// Condition operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    // Comparison operators
    /// Equal (=)
    Eq,
    /// Not equal (!=)
    Ne,
    /// Greater than (>)
    Gt,
    /// Less than (<)
    Lt,
    /// Greater than or equal (>=)
    Ge,
    /// Less than or equal (<=)
    Le,

    // Text operators
    /// String contains
    Contains,
    /// String starts with
    StartsWith,
    /// String ends with
    EndsWith,
    /// Regex match
    Matches,

    // Set-membership operators
    /// In (element in list)
    In,
    /// Not in
    NotIn,

    // Emptiness / null checks (no right-hand value)
    /// Value is empty (absent, null, empty string or empty list)
    IsEmpty,
    /// Value is not empty
    IsNotEmpty,
    /// Value is null or absent
    IsNull,
    /// Value is present and not null
    IsNotNull,

    // Arithmetic operators
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Sub,
    /// Multiplication (*)
    Mul,
    /// Division (/)
    Div,
    /// Exponentiation (**)
    Pow,

    // Approval operators
    /// Approver has signed off
    IsApprovedBy,
    /// Approver has rejected
    IsRejectedBy,
    /// Approval is still pending from approver
    PendingApprovalFrom,
    /// Actor holds a role
    HasRole,
    /// Actor belongs to a group
    InGroup,
}

/// Operator category, in presentation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatorCategory {
    Comparison,
    Text,
    Set,
    Emptiness,
    Arithmetic,
    Approval,
}

/// Value arity an operator expects on its right-hand side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arity {
    /// No right-hand value (emptiness checks)
    None,
    /// Single primitive value; a field reference is also accepted and
    /// resolved to the other field's runtime value before dispatch
    Scalar,
    /// List of primitives
    List,
    /// Single primitive or another field's value (arithmetic operators,
    /// where the right-hand side is most often a second field)
    Field,
}

impl Operator {
    /// Canonical wire symbol for this operator
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::Ge => ">=",
            Operator::Le => "<=",
            Operator::Contains => "contains",
            Operator::StartsWith => "startswith",
            Operator::EndsWith => "endswith",
            Operator::Matches => "matches",
            Operator::In => "in",
            Operator::NotIn => "not in",
            Operator::IsEmpty => "is_empty",
            Operator::IsNotEmpty => "is_not_empty",
            Operator::IsNull => "is_null",
            Operator::IsNotNull => "is_not_null",
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Pow => "**",
            Operator::IsApprovedBy => "is_approved_by",
            Operator::IsRejectedBy => "is_rejected_by",
            Operator::PendingApprovalFrom => "pending_approval_from",
            Operator::HasRole => "has_role",
            Operator::InGroup => "in_group",
        }
    }

    /// Parse a wire symbol into an operator
    ///
    /// Accepts the canonical symbols plus the spellings older editors
    /// persisted (`==`, `starts_with`, `ends_with`, `not_in`).
    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        let op = match symbol {
            "=" | "==" => Operator::Eq,
            "!=" => Operator::Ne,
            ">" => Operator::Gt,
            "<" => Operator::Lt,
            ">=" => Operator::Ge,
            "<=" => Operator::Le,
            "contains" => Operator::Contains,
            "startswith" | "starts_with" => Operator::StartsWith,
            "endswith" | "ends_with" => Operator::EndsWith,
            "matches" => Operator::Matches,
            "in" => Operator::In,
            "not in" | "not_in" => Operator::NotIn,
            "is_empty" => Operator::IsEmpty,
            "is_not_empty" => Operator::IsNotEmpty,
            "is_null" => Operator::IsNull,
            "is_not_null" => Operator::IsNotNull,
            "+" => Operator::Add,
            "-" => Operator::Sub,
            "*" => Operator::Mul,
            "/" => Operator::Div,
            "**" => Operator::Pow,
            "is_approved_by" => Operator::IsApprovedBy,
            "is_rejected_by" => Operator::IsRejectedBy,
            "pending_approval_from" => Operator::PendingApprovalFrom,
            "has_role" => Operator::HasRole,
            "in_group" => Operator::InGroup,
            _ => return None,
        };
        Some(op)
    }

    /// Human-readable label, as shown in operator pickers
    pub fn label(&self) -> &'static str {
        match self {
            Operator::Eq => "equals",
            Operator::Ne => "does not equal",
            Operator::Gt => "greater than",
            Operator::Lt => "less than",
            Operator::Ge => "greater than or equal",
            Operator::Le => "less than or equal",
            Operator::Contains => "contains",
            Operator::StartsWith => "starts with",
            Operator::EndsWith => "ends with",
            Operator::Matches => "matches pattern",
            Operator::In => "is one of",
            Operator::NotIn => "is not one of",
            Operator::IsEmpty => "is empty",
            Operator::IsNotEmpty => "is not empty",
            Operator::IsNull => "is null",
            Operator::IsNotNull => "is not null",
            Operator::Add => "plus",
            Operator::Sub => "minus",
            Operator::Mul => "times",
            Operator::Div => "divided by",
            Operator::Pow => "to the power of",
            Operator::IsApprovedBy => "is approved by",
            Operator::IsRejectedBy => "is rejected by",
            Operator::PendingApprovalFrom => "pending approval from",
            Operator::HasRole => "has role",
            Operator::InGroup => "is in group",
        }
    }

    /// Category this operator belongs to
    pub fn category(&self) -> OperatorCategory {
        match self {
            Operator::Eq
            | Operator::Ne
            | Operator::Gt
            | Operator::Lt
            | Operator::Ge
            | Operator::Le => OperatorCategory::Comparison,
            Operator::Contains
            | Operator::StartsWith
            | Operator::EndsWith
            | Operator::Matches => OperatorCategory::Text,
            Operator::In | Operator::NotIn => OperatorCategory::Set,
            Operator::IsEmpty
            | Operator::IsNotEmpty
            | Operator::IsNull
            | Operator::IsNotNull => OperatorCategory::Emptiness,
            Operator::Add | Operator::Sub | Operator::Mul | Operator::Div | Operator::Pow => {
                OperatorCategory::Arithmetic
            }
            Operator::IsApprovedBy
            | Operator::IsRejectedBy
            | Operator::PendingApprovalFrom
            | Operator::HasRole
            | Operator::InGroup => OperatorCategory::Approval,
        }
    }

    /// Value arity this operator expects
    pub fn arity(&self) -> Arity {
        match self.category() {
            OperatorCategory::Emptiness => Arity::None,
            OperatorCategory::Set => Arity::List,
            OperatorCategory::Arithmetic => Arity::Field,
            _ => Arity::Scalar,
        }
    }

    /// Whether this operator needs a right-hand value
    ///
    /// False exactly for the four emptiness operators. The evaluator uses
    /// this to decide whether a missing value is an anomaly or expected.
    pub fn requires_value(&self) -> bool {
        self.arity() != Arity::None
    }

    /// Field types this operator is semantically valid for
    ///
    /// Informational only: the evaluator does not reject invalid pairings,
    /// they simply surface as runtime coercion failures.
    pub fn valid_for(&self, field_type: FieldType) -> bool {
        use FieldType::*;
        match self.category() {
            OperatorCategory::Emptiness => true,
            OperatorCategory::Comparison => match self {
                Operator::Eq | Operator::Ne => true,
                _ => matches!(field_type, Number | Date | DateTime),
            },
            OperatorCategory::Text => match self {
                Operator::Matches => matches!(field_type, Text),
                _ => matches!(field_type, Text | Choice),
            },
            OperatorCategory::Set => matches!(field_type, Text | Number | Choice | List),
            OperatorCategory::Arithmetic => matches!(field_type, Number),
            OperatorCategory::Approval => matches!(field_type, Text | Choice | List),
        }
    }

    /// Returns true if this is a comparison operator
    pub fn is_comparison(&self) -> bool {
        self.category() == OperatorCategory::Comparison
    }

    /// Returns true if this is an ordering comparison (> < >= <=)
    pub fn is_ordering(&self) -> bool {
        matches!(
            self,
            Operator::Gt | Operator::Lt | Operator::Ge | Operator::Le
        )
    }

    /// Returns true if this is an arithmetic operator
    pub fn is_arithmetic(&self) -> bool {
        self.category() == OperatorCategory::Arithmetic
    }

    /// Returns true if this is an emptiness/null check
    pub fn is_emptiness(&self) -> bool {
        self.category() == OperatorCategory::Emptiness
    }
}

/// Operator slot of a leaf condition
///
/// Persisted documents may carry operator symbols this build does not
/// recognize (newer editors, retired experiments). The raw symbol is kept so
/// the document stays loadable and re-serializes verbatim; evaluation
/// degrades such leaves to a failed trace entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LeafOperator {
    /// A recognized operator
    Known(Operator),
    /// An unrecognized wire symbol, preserved verbatim
    Unknown(String),
}

impl LeafOperator {
    /// Parse a wire symbol, preserving unrecognized ones
    pub fn from_symbol(symbol: &str) -> Self {
        match Operator::from_symbol(symbol) {
            Some(op) => LeafOperator::Known(op),
            None => LeafOperator::Unknown(symbol.to_string()),
        }
    }

    /// Wire symbol: canonical for known operators, verbatim otherwise
    pub fn symbol(&self) -> &str {
        match self {
            LeafOperator::Known(op) => op.symbol(),
            LeafOperator::Unknown(symbol) => symbol,
        }
    }

    /// The recognized operator, if any
    pub fn known(&self) -> Option<Operator> {
        match self {
            LeafOperator::Known(op) => Some(*op),
            LeafOperator::Unknown(_) => None,
        }
    }

    /// Whether the operator needs a right-hand value
    ///
    /// Unknown symbols are assumed to take one.
    pub fn requires_value(&self) -> bool {
        match self {
            LeafOperator::Known(op) => op.requires_value(),
            LeafOperator::Unknown(_) => true,
        }
    }
}

impl From<Operator> for LeafOperator {
    fn from(op: Operator) -> Self {
        LeafOperator::Known(op)
    }
}

impl PartialEq<Operator> for LeafOperator {
    fn eq(&self, other: &Operator) -> bool {
        matches!(self, LeafOperator::Known(op) if op == other)
    }
}
