//! Condition tree to wire JSON

use serde_json::{json, Map, Value as Json};
use verdict_core::{Combinator, Condition, ConditionGroup, ConditionList, ConditionNode, Operand, Value};

use crate::error::Result;

/// Serialize a condition list to its wire JSON array
pub fn serialize(list: &ConditionList) -> Json {
    Json::Array(list.iter().map(serialize_node).collect())
}

/// Serialize a condition list to a JSON string
pub fn serialize_string(list: &ConditionList) -> Result<String> {
    Ok(serde_json::to_string(&serialize(list))?)
}

/// Serialize a single node, applying the group-of-one flattening rule
pub fn serialize_node(node: &ConditionNode) -> Json {
    match node {
        ConditionNode::Leaf(condition) => serialize_leaf(condition),
        ConditionNode::Group(group) => serialize_group(group),
    }
}

fn serialize_leaf(condition: &Condition) -> Json {
    let mut obj = Map::new();
    obj.insert("field".to_string(), Json::String(condition.field.clone()));
    obj.insert(
        "operation".to_string(),
        Json::String(condition.operator.symbol().to_string()),
    );
    obj.insert("value".to_string(), serialize_operand(&condition.value));
    if let Some(combinator) = condition.logical_operator {
        obj.insert(
            "logical_operator".to_string(),
            Json::String(combinator.as_str().to_string()),
        );
    }
    Json::Object(obj)
}

fn serialize_group(group: &ConditionGroup) -> Json {
    // Single-child and/or groups flatten to the child itself. A not group
    // keeps its wrapper: eliding it would drop the negation.
    if group.children.len() == 1 && group.combinator != Combinator::Not {
        return serialize_node(&group.children[0]);
    }

    json!({
        "operation": group.combinator.as_str(),
        "conditions": group.children.iter().map(serialize_node).collect::<Vec<_>>(),
    })
}

fn serialize_operand(operand: &Operand) -> Json {
    match operand {
        Operand::Literal(value) => value_to_json(value),
        // Field references are objects, distinguishing them from literals
        Operand::Field(name) => json!({ "field": name }),
    }
}

fn value_to_json(value: &Value) -> Json {
    match value {
        Value::Null => Json::Null,
        Value::Bool(b) => Json::Bool(*b),
        Value::Number(n) => serde_json::Number::from_f64(*n)
            .map(Json::Number)
            .unwrap_or(Json::Null),
        Value::String(s) => Json::String(s.clone()),
        Value::Array(items) => Json::Array(items.iter().map(value_to_json).collect()),
        Value::Object(map) => Json::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), value_to_json(v)))
                .collect(),
        ),
    }
}
