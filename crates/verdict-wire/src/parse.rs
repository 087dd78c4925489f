//! Wire JSON to condition tree

use serde_json::{Map, Value as Json};
use verdict_core::{
    Combinator, Condition, ConditionGroup, ConditionList, ConditionNode, LeafOperator, Operand,
    Operator, Value,
};

use crate::error::{ParseError, Result};

/// Parse a wire JSON string into a condition list
pub fn parse_str(input: &str) -> Result<ConditionList> {
    let json: Json = serde_json::from_str(input)?;
    parse_value(&json)
}

/// Parse an already-decoded wire JSON document into a condition list
pub fn parse_value(json: &Json) -> Result<ConditionList> {
    let elements = match json {
        Json::Array(elements) => elements,
        other => {
            return Err(ParseError::NotAnArray {
                found: json_kind(other).to_string(),
            })
        }
    };

    elements.iter().map(parse_node).collect()
}

fn parse_node(json: &Json) -> Result<ConditionNode> {
    let obj = match json {
        Json::Object(obj) => obj,
        other => return Err(ParseError::InvalidNode(json_kind(other).to_string())),
    };

    if obj.contains_key("conditions") {
        parse_group(obj).map(ConditionNode::Group)
    } else {
        parse_leaf(obj).map(ConditionNode::Leaf)
    }
}

fn parse_group(obj: &Map<String, Json>) -> Result<ConditionGroup> {
    let combinator = match obj.get("operation") {
        None => Combinator::And,
        Some(Json::String(s)) => {
            Combinator::from_str(s).map_err(|_| ParseError::UnknownCombinator(s.clone()))?
        }
        Some(other) => return Err(ParseError::UnknownCombinator(json_kind(other).to_string())),
    };

    let children = match obj.get("conditions") {
        Some(Json::Array(elements)) => elements,
        Some(other) => {
            return Err(ParseError::InvalidGroup {
                found: json_kind(other).to_string(),
            })
        }
        // Unreachable: caller dispatches on the key's presence
        None => {
            return Err(ParseError::InvalidGroup {
                found: "missing".to_string(),
            })
        }
    };
    if children.is_empty() {
        return Err(ParseError::EmptyGroup);
    }

    let children = children
        .iter()
        .map(parse_node)
        .collect::<Result<Vec<_>>>()?;
    Ok(ConditionGroup::new(combinator, children))
}

fn parse_leaf(obj: &Map<String, Json>) -> Result<Condition> {
    let field = match obj.get("field") {
        Some(Json::String(name)) if !name.is_empty() => name.clone(),
        _ => return Err(ParseError::MissingField),
    };

    // Older editors persisted leaves without an operation; default to equals.
    // Unrecognized symbols are kept verbatim: the leaf evaluates to false,
    // but the document stays loadable.
    let operator = match obj.get("operation") {
        None => LeafOperator::Known(Operator::Eq),
        Some(Json::String(symbol)) => LeafOperator::from_symbol(symbol),
        Some(other) => return Err(ParseError::InvalidOperation(json_kind(other).to_string())),
    };

    let value = match obj.get("value") {
        None => Operand::Literal(Value::String(String::new())),
        Some(json) => parse_operand(&field, json)?,
    };
    let value = coerce_membership_value(&operator, value);

    let logical_operator = match obj.get("logical_operator") {
        None => None,
        Some(Json::String(s)) if s == "and" => Some(Combinator::And),
        Some(Json::String(s)) if s == "or" => Some(Combinator::Or),
        Some(Json::String(s)) => return Err(ParseError::InvalidLogicalOperator(s.clone())),
        Some(other) => {
            return Err(ParseError::InvalidLogicalOperator(
                json_kind(other).to_string(),
            ))
        }
    };

    Ok(Condition {
        field,
        operator,
        value,
        logical_operator,
    })
}

fn parse_operand(field: &str, json: &Json) -> Result<Operand> {
    match json {
        // A {"field": name} object is a field reference, not a literal
        Json::Object(obj) => match obj.get("field") {
            Some(Json::String(name)) if obj.len() == 1 && !name.is_empty() => {
                Ok(Operand::Field(name.clone()))
            }
            _ => Err(ParseError::InvalidValue {
                field: field.to_string(),
                message: "object values must be a {\"field\": name} reference".to_string(),
            }),
        },
        other => Ok(Operand::Literal(json_to_value(field, other)?)),
    }
}

fn json_to_value(field: &str, json: &Json) -> Result<Value> {
    match json {
        Json::Null => Ok(Value::Null),
        Json::Bool(b) => Ok(Value::Bool(*b)),
        Json::Number(n) => {
            n.as_f64()
                .map(Value::Number)
                .ok_or_else(|| ParseError::InvalidValue {
                    field: field.to_string(),
                    message: format!("number out of range: {n}"),
                })
        }
        Json::String(s) => Ok(Value::String(s.clone())),
        Json::Array(items) => items
            .iter()
            .map(|item| match item {
                Json::Array(_) | Json::Object(_) => Err(ParseError::InvalidValue {
                    field: field.to_string(),
                    message: "list values must contain primitives".to_string(),
                }),
                other => json_to_value(field, other),
            })
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        Json::Object(_) => Err(ParseError::InvalidValue {
            field: field.to_string(),
            message: "unexpected object value".to_string(),
        }),
    }
}

/// Coerce the legacy comma-joined string form of membership values
///
/// `in`/`not in` values written by the flat editor family arrive as a single
/// comma-separated string; split on `,`, trim tokens, drop empties.
fn coerce_membership_value(operator: &LeafOperator, value: Operand) -> Operand {
    if !matches!(operator.known(), Some(Operator::In | Operator::NotIn)) {
        return value;
    }
    match value {
        Operand::Literal(Value::String(s)) => {
            log::debug!("coercing comma-joined membership value: {s:?}");
            let items = s
                .split(',')
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(|token| Value::String(token.to_string()))
                .collect();
            Operand::Literal(Value::Array(items))
        }
        other => other,
    }
}

fn json_kind(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}
