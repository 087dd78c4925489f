//! Condition tree evaluator

use std::collections::HashMap;

use regex::RegexBuilder;
use verdict_core::{
    Combinator, Condition, ConditionGroup, ConditionList, ConditionNode, FieldCatalog, Operand,
    Operator, OperatorRegistry, Value,
};

use crate::coerce::{is_empty_value, is_null_value, loose_eq, to_list, to_number, to_text};
use crate::trace::{Evaluation, TraceEntry};

/// Test bindings: field name to runtime value, supplied fresh per call
pub type Bindings = HashMap<String, Value>;

/// Guard against pathological user-supplied `matches` patterns
const MAX_PATTERN_LEN: usize = 512;
const REGEX_SIZE_LIMIT: usize = 1 << 20;

/// Evaluates condition trees against test bindings
///
/// Stateless between calls; holds only the injected operator registry and an
/// optional field catalog. A leaf whose operator is outside the registry, or
/// whose field is unknown to a configured catalog, degrades to a failed
/// trace entry rather than an error.
pub struct Evaluator<'a> {
    registry: &'a OperatorRegistry,
    catalog: Option<&'a FieldCatalog>,
}

impl<'a> Evaluator<'a> {
    /// Create an evaluator for the given registry
    pub fn new(registry: &'a OperatorRegistry) -> Self {
        Self {
            registry,
            catalog: None,
        }
    }

    /// Resolve fields through a catalog: leaves naming unknown fields are
    /// treated as having no test value
    pub fn with_catalog(mut self, catalog: &'a FieldCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Evaluate a condition list against test bindings
    ///
    /// Top-level siblings fold left to right: AND by default, OR between a
    /// sibling carrying `logical_operator: or` and the next one. Every leaf
    /// is visited so the trace is complete regardless of the outcome. An
    /// empty list passes.
    pub fn evaluate(&self, list: &ConditionList, bindings: &Bindings) -> Evaluation {
        let mut trace = Vec::new();
        let mut result: Option<bool> = None;
        let mut join_or = false;

        for node in list {
            let passed = self.eval_node(node, bindings, &mut trace);
            result = Some(match result {
                None => passed,
                Some(acc) if join_or => acc || passed,
                Some(acc) => acc && passed,
            });
            join_or = node.logical_operator() == Some(Combinator::Or);
        }

        let result = result.unwrap_or(true);
        tracing::debug!(result, leaves = trace.len(), "condition list evaluated");
        Evaluation { result, trace }
    }

    fn eval_node(&self, node: &ConditionNode, bindings: &Bindings, trace: &mut Vec<TraceEntry>) -> bool {
        match node {
            ConditionNode::Leaf(condition) => self.eval_leaf(condition, bindings, trace),
            ConditionNode::Group(group) => self.eval_group(group, bindings, trace),
        }
    }

    fn eval_group(&self, group: &ConditionGroup, bindings: &Bindings, trace: &mut Vec<TraceEntry>) -> bool {
        // Children are always all visited, so the trace covers every leaf
        // even when the combinator's outcome is already decided.
        let mut all = true;
        let mut any = false;
        for child in &group.children {
            let passed = self.eval_node(child, bindings, trace);
            all = all && passed;
            any = any || passed;
        }

        let result = match group.combinator {
            Combinator::And => all,
            Combinator::Or => any,
            // `not` negates the AND-combination of its children; with a
            // single child this is a plain negation.
            Combinator::Not => !all,
        };
        tracing::debug!(combinator = group.combinator.as_str(), result, "group evaluated");
        result
    }

    fn eval_leaf(&self, condition: &Condition, bindings: &Bindings, trace: &mut Vec<TraceEntry>) -> bool {
        // A symbol this build does not recognize fails the leaf only; the
        // rest of the document still evaluates.
        let Some(operator) = condition.operator.known() else {
            let symbol = condition.operator.symbol();
            trace.push(TraceEntry::new(
                &condition.field,
                symbol,
                false,
                format!("unknown operator '{symbol}'"),
            ));
            return false;
        };
        let symbol = operator.symbol();

        if !self.registry.contains(operator) {
            trace.push(TraceEntry::new(
                &condition.field,
                symbol,
                false,
                format!("operator '{symbol}' is not available in this registry"),
            ));
            return false;
        }

        // A configured catalog that does not know the field is treated the
        // same as a missing binding.
        let mut unknown_field = false;
        let actual = match self.catalog {
            Some(catalog) if catalog.lookup(&condition.field).is_none() => {
                unknown_field = true;
                None
            }
            _ => bindings.get(&condition.field),
        };

        // Emptiness operators evaluate on absence itself and ignore the
        // right-hand value entirely.
        if operator.is_emptiness() {
            let passed = match operator {
                Operator::IsEmpty => is_empty_value(actual),
                Operator::IsNotEmpty => !is_empty_value(actual),
                Operator::IsNull => is_null_value(actual),
                Operator::IsNotNull => !is_null_value(actual),
                _ => false,
            };
            let mut entry = TraceEntry::new(
                &condition.field,
                symbol,
                passed,
                format!("{} {}: {}", condition.field, operator.label(), passed),
            );
            if let Some(value) = actual {
                entry = entry.with_actual(value.clone());
            }
            trace.push(entry);
            return passed;
        }

        let actual = match actual {
            Some(Value::String(s)) if s.is_empty() => None,
            other => other,
        };
        let Some(actual) = actual else {
            let detail = if unknown_field {
                format!("no test value (field '{}' not in catalog)", condition.field)
            } else {
                "no test value".to_string()
            };
            trace.push(TraceEntry::new(&condition.field, symbol, false, detail));
            return false;
        };

        // Field-reference operands resolve through the same bindings before
        // dispatch, with the same coercion rules as literals.
        let expected = match &condition.value {
            Operand::Literal(value) => value.clone(),
            Operand::Field(name) => match bindings.get(name) {
                Some(value) => value.clone(),
                None => {
                    trace.push(
                        TraceEntry::new(
                            &condition.field,
                            symbol,
                            false,
                            format!("referenced field '{name}' has no test value"),
                        )
                        .with_actual(actual.clone()),
                    );
                    return false;
                }
            },
        };

        let (passed, detail) = match dispatch(operator, actual, &expected) {
            Ok(passed) => {
                let detail = format!("{} {} {}", render(actual), symbol, render(&expected));
                (passed, detail)
            }
            Err(anomaly) => (false, anomaly),
        };

        trace.push(
            TraceEntry::new(&condition.field, symbol, passed, detail)
                .with_expected(expected)
                .with_actual(actual.clone()),
        );
        passed
    }
}

/// Operator dispatch over coerced values
///
/// `Err` carries the anomaly detail for the trace; it never escapes the
/// evaluator as a caller-visible error.
fn dispatch(op: Operator, actual: &Value, expected: &Value) -> Result<bool, String> {
    match op {
        Operator::Eq => Ok(loose_eq(actual, expected)),
        Operator::Ne => Ok(!loose_eq(actual, expected)),

        Operator::Gt | Operator::Lt | Operator::Ge | Operator::Le => {
            let a = to_number(actual)
                .ok_or_else(|| format!("cannot interpret {} as a number", render(actual)))?;
            let b = to_number(expected)
                .ok_or_else(|| format!("cannot interpret {} as a number", render(expected)))?;
            Ok(match op {
                Operator::Gt => a > b,
                Operator::Lt => a < b,
                Operator::Ge => a >= b,
                _ => a <= b,
            })
        }

        Operator::Contains => Ok(to_text(actual).contains(&to_text(expected))),
        Operator::StartsWith => Ok(to_text(actual).starts_with(&to_text(expected))),
        Operator::EndsWith => Ok(to_text(actual).ends_with(&to_text(expected))),

        Operator::Matches => {
            let pattern = to_text(expected);
            if pattern.len() > MAX_PATTERN_LEN {
                return Err(format!(
                    "pattern exceeds {MAX_PATTERN_LEN} characters and was not compiled"
                ));
            }
            let re = RegexBuilder::new(&pattern)
                .size_limit(REGEX_SIZE_LIMIT)
                .build()
                .map_err(|e| format!("invalid pattern: {e}"))?;
            Ok(re.is_match(&to_text(actual)))
        }

        Operator::In => Ok(is_member(expected, actual)),
        Operator::NotIn => Ok(!is_member(expected, actual)),

        // Emptiness operators are resolved in eval_leaf, before dispatch
        Operator::IsEmpty | Operator::IsNotEmpty | Operator::IsNull | Operator::IsNotNull => {
            Err(format!("operator '{}' takes no right-hand value", op.symbol()))
        }

        Operator::Add | Operator::Sub | Operator::Mul | Operator::Div | Operator::Pow => {
            let a = to_number(actual)
                .ok_or_else(|| format!("cannot interpret {} as a number", render(actual)))?;
            let b = to_number(expected)
                .ok_or_else(|| format!("cannot interpret {} as a number", render(expected)))?;
            let result = match op {
                Operator::Add => a + b,
                Operator::Sub => a - b,
                Operator::Mul => a * b,
                Operator::Div => {
                    if b == 0.0 {
                        return Err("division by zero".to_string());
                    }
                    a / b
                }
                _ => a.powf(b),
            };
            // An arithmetic leaf passes when the computed value is truthy
            Ok(result != 0.0 && result.is_finite())
        }

        Operator::IsApprovedBy
        | Operator::IsRejectedBy
        | Operator::PendingApprovalFrom
        | Operator::HasRole
        | Operator::InGroup => Ok(approval_membership(op, actual, expected)),
    }
}

/// Membership test by string equality over the coerced list
fn is_member(list_value: &Value, needle: &Value) -> bool {
    let needle = to_text(needle);
    to_list(list_value).iter().any(|item| to_text(item) == needle)
}

/// Approval operators test membership of the operand in the relevant slot of
/// the field's runtime value: an object binding is inspected by key, any
/// other binding is treated as the collection itself.
fn approval_membership(op: Operator, actual: &Value, expected: &Value) -> bool {
    let slot = match op {
        Operator::IsApprovedBy => "approved_by",
        Operator::IsRejectedBy => "rejected_by",
        Operator::PendingApprovalFrom => "pending",
        Operator::HasRole => "roles",
        Operator::InGroup => "groups",
        _ => return false,
    };

    let haystack = match actual {
        Value::Object(map) => match map.get(slot) {
            Some(value) => value.clone(),
            None => return false,
        },
        other => other.clone(),
    };

    is_member(&haystack, expected)
}

fn render(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(s) => format!("\"{s}\""),
        Value::Array(items) => format!(
            "[{}]",
            items.iter().map(render).collect::<Vec<_>>().join(", ")
        ),
        Value::Object(_) => "{...}".to_string(),
        other => to_text(other),
    }
}
