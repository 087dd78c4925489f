//! Evaluation trace types
//!
//! The trace records every leaf visited during an evaluation, in
//! left-to-right, depth-first order. The editing UI renders it next to the
//! live preview so users can see which individual condition failed and why.

use serde::{Deserialize, Serialize};
use verdict_core::Value;

/// Trace of a single leaf evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEntry {
    /// The leaf's field name
    pub field: String,

    /// The operator symbol (e.g. ">=", "in", "is_empty")
    pub operator: String,

    /// The resolved right-hand value, if the operator takes one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<Value>,

    /// The runtime value bound to the field, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<Value>,

    /// Whether the leaf passed
    pub passed: bool,

    /// Human-readable explanation of the outcome
    pub detail: String,
}

impl TraceEntry {
    /// Create a trace entry
    pub fn new(
        field: impl Into<String>,
        operator: impl Into<String>,
        passed: bool,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            operator: operator.into(),
            expected: None,
            actual: None,
            passed,
            detail: detail.into(),
        }
    }

    /// Attach the resolved right-hand value
    pub fn with_expected(mut self, expected: Value) -> Self {
        self.expected = Some(expected);
        self
    }

    /// Attach the runtime value the field was bound to
    pub fn with_actual(mut self, actual: Value) -> Self {
        self.actual = Some(actual);
        self
    }
}

/// Result of evaluating a condition list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// The final boolean result
    pub result: bool,

    /// Per-leaf trace, depth-first, left to right
    pub trace: Vec<TraceEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_entry_builders() {
        let entry = TraceEntry::new("age", ">=", true, "20 >= 18")
            .with_expected(Value::Number(18.0))
            .with_actual(Value::Number(20.0));

        assert!(entry.passed);
        assert_eq!(entry.expected, Some(Value::Number(18.0)));
        assert_eq!(entry.actual, Some(Value::Number(20.0)));
    }

    #[test]
    fn test_trace_entry_serde_skips_absent_values() {
        let entry = TraceEntry::new("email", "is_empty", true, "value is empty");
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("expected"));
        assert!(!json.contains("actual"));
    }
}
