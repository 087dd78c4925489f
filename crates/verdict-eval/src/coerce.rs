//! Value coercion helpers
//!
//! The wire format and the editing UI are loosely typed: numbers arrive as
//! strings, membership lists as comma-joined text, booleans as flags. These
//! helpers centralize the best-effort coercions the evaluator applies before
//! operator dispatch.

use verdict_core::Value;

/// Best-effort numeric coercion
///
/// Numbers pass through, booleans map to 0/1, strings are parsed. Anything
/// else (and unparsable strings) is `None`, which the evaluator reports as a
/// coercion anomaly.
pub fn to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => Some(*n),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// String coercion, used by the text operators and membership equality
pub fn to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(*n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(to_text)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => String::new(),
    }
}

/// List coercion for membership tests
///
/// Arrays pass through; a string is comma-split (trimmed, empties dropped);
/// any other value becomes a singleton list.
pub fn to_list(value: &Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items.clone(),
        Value::String(s) => s
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| Value::String(token.to_string()))
            .collect(),
        other => vec![other.clone()],
    }
}

/// Loose cross-type equality: string "3" equals number 3
///
/// Exact matches win; otherwise both sides are compared numerically when
/// both coerce, falling back to case-sensitive string comparison.
pub fn loose_eq(left: &Value, right: &Value) -> bool {
    if left == right {
        return true;
    }
    if let (Some(a), Some(b)) = (to_number(left), to_number(right)) {
        return a == b;
    }
    to_text(left) == to_text(right)
}

/// Emptiness test: absent, null, empty string, empty list or empty object
pub fn is_empty_value(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::Object(map)) => map.is_empty(),
        Some(_) => false,
    }
}

/// Null test: absent or explicit null
pub fn is_null_value(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::Null))
}

fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}
