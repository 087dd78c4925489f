//! Live-preview style usage: parse a stored rule, evaluate it against test
//! bindings and print the per-leaf trace.
//!
//! Run with: cargo run --example live_preview -p verdict-sdk

use verdict_sdk::{Bindings, ConditionEngine, FieldCatalog, FieldRef, FieldType, Value};

fn main() -> anyhow::Result<()> {
    let catalog = FieldCatalog::from_fields(vec![
        FieldRef::new("first_name", "First Name", FieldType::Text),
        FieldRef::new("age", "Age", FieldType::Number),
        FieldRef::new("country", "Country", FieldType::Choice),
    ]);
    let engine = ConditionEngine::new().with_catalog(catalog);

    // A visibility rule as persisted by the workflow editor
    let stored = r#"[
        {"field": "age", "operation": ">=", "value": 18},
        {"operation": "or", "conditions": [
            {"field": "country", "operation": "in", "value": ["US", "CA"]},
            {"field": "first_name", "operation": "startswith", "value": "Hi"}
        ]}
    ]"#;
    let rule = engine.parse(stored)?;

    let mut bindings = Bindings::new();
    bindings.insert("age".to_string(), Value::Number(20.0));
    bindings.insert("country".to_string(), Value::String("DE".to_string()));
    bindings.insert("first_name".to_string(), Value::String("Hisham".to_string()));

    let evaluation = engine.evaluate(&rule, &bindings);
    println!("rule passes: {}", evaluation.result);
    for entry in &evaluation.trace {
        let mark = if entry.passed { "ok " } else { "FAIL" };
        println!("  [{mark}] {} {} -- {}", entry.field, entry.operator, entry.detail);
    }

    println!("canonical wire form: {}", engine.serialize_string(&rule)?);
    Ok(())
}
