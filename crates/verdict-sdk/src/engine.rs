//! The condition engine facade

use serde_json::Value as Json;
use verdict_core::{ConditionList, FieldCatalog, FieldType, Operator, OperatorRegistry};
use verdict_eval::{Bindings, Evaluation, Evaluator};

use crate::error::Result;

/// High-level entry point for condition parsing, serialization and
/// evaluation
///
/// The engine is stateless apart from its configuration: every call
/// operates on the tree and bindings it is handed, so a single instance can
/// be shared freely across threads.
#[derive(Debug, Clone)]
pub struct ConditionEngine {
    registry: OperatorRegistry,
    catalog: Option<FieldCatalog>,
}

impl ConditionEngine {
    /// Engine with the workflow operator set
    pub fn new() -> Self {
        Self::with_registry(OperatorRegistry::workflow())
    }

    /// Engine with the approval operator set
    pub fn approval() -> Self {
        Self::with_registry(OperatorRegistry::approval())
    }

    /// Engine with an explicit registry
    pub fn with_registry(registry: OperatorRegistry) -> Self {
        Self {
            registry,
            catalog: None,
        }
    }

    /// Attach a field catalog; leaves naming fields outside it evaluate as
    /// having no test value
    pub fn with_catalog(mut self, catalog: FieldCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Parse a wire JSON string into a condition list
    pub fn parse(&self, input: &str) -> Result<ConditionList> {
        Ok(verdict_wire::parse_str(input)?)
    }

    /// Parse an already-decoded wire JSON document
    pub fn parse_value(&self, json: &Json) -> Result<ConditionList> {
        Ok(verdict_wire::parse_value(json)?)
    }

    /// Serialize a condition list to its wire JSON array
    pub fn serialize(&self, list: &ConditionList) -> Json {
        verdict_wire::serialize(list)
    }

    /// Serialize a condition list to a JSON string
    pub fn serialize_string(&self, list: &ConditionList) -> Result<String> {
        Ok(serde_json::to_string(&verdict_wire::serialize(list))?)
    }

    /// Evaluate a condition list against test bindings
    pub fn evaluate(&self, list: &ConditionList, bindings: &Bindings) -> Evaluation {
        let evaluator = Evaluator::new(&self.registry);
        let evaluator = match &self.catalog {
            Some(catalog) => evaluator.with_catalog(catalog),
            None => evaluator,
        };
        tracing::debug!(nodes = list.len(), "evaluating condition list");
        evaluator.evaluate(list, bindings)
    }

    /// Operators this engine offers for a field type, grouped by category
    pub fn operators_for(&self, field_type: FieldType) -> Vec<Operator> {
        self.registry.operators_for(field_type)
    }

    /// The engine's operator registry
    pub fn registry(&self) -> &OperatorRegistry {
        &self.registry
    }

    /// The engine's field catalog, if configured
    pub fn catalog(&self) -> Option<&FieldCatalog> {
        self.catalog.as_ref()
    }
}

impl Default for ConditionEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdict_core::{FieldRef, Value};

    #[test]
    fn test_default_engine_uses_workflow_registry() {
        let engine = ConditionEngine::new();
        assert!(!engine.registry().contains(Operator::HasRole));
        assert!(ConditionEngine::approval().registry().contains(Operator::HasRole));
    }

    #[test]
    fn test_operators_for_delegates_to_registry() {
        let engine = ConditionEngine::new();
        let ops = engine.operators_for(FieldType::Text);
        assert!(ops.contains(&Operator::Contains));
        assert!(!ops.contains(&Operator::Gt));
    }

    #[test]
    fn test_catalog_flows_into_evaluation() {
        let catalog = FieldCatalog::from_fields(vec![FieldRef::new(
            "age",
            "Age",
            FieldType::Number,
        )]);
        let engine = ConditionEngine::new().with_catalog(catalog);

        let list = engine
            .parse(r#"[{"field":"other","operation":"=","value":1}]"#)
            .unwrap();
        let mut bindings = Bindings::new();
        bindings.insert("other".to_string(), Value::Number(1.0));

        let result = engine.evaluate(&list, &bindings);
        assert!(!result.result);
        assert!(result.trace[0].detail.contains("not in catalog"));
    }
}
