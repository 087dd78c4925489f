//! Integration tests for the evaluator
//!
//! Exercises every operator in the registry through `evaluate`, plus the
//! group combination and top-level tie-break semantics.

use std::collections::HashMap;

use verdict_core::{
    Combinator, Condition, ConditionNode, Operand, Operator, OperatorRegistry, Value,
};
use verdict_eval::{Bindings, Evaluator};

fn bindings(pairs: &[(&str, Value)]) -> Bindings {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn leaf(field: &str, op: Operator, value: impl Into<Value>) -> ConditionNode {
    ConditionNode::leaf(field, op, Operand::literal(value))
}

fn eval_one(node: ConditionNode, ctx: &Bindings) -> bool {
    let registry = OperatorRegistry::approval();
    Evaluator::new(&registry).evaluate(&vec![node], ctx).result
}

#[test]
fn scenario_a_parsed_leaf_against_bindings() -> anyhow::Result<()> {
    let registry = OperatorRegistry::workflow();
    let evaluator = Evaluator::new(&registry);
    let list = verdict_wire::parse_str(r#"[{"field":"age","operation":">=","value":18}]"#)?;

    let result = evaluator.evaluate(&list, &bindings(&[("age", Value::Number(20.0))]));
    assert!(result.result);

    let result = evaluator.evaluate(&list, &bindings(&[("age", Value::Number(16.0))]));
    assert!(!result.result);
    Ok(())
}

#[test]
fn test_unrecognized_symbol_parses_and_fails_at_evaluation() -> anyhow::Result<()> {
    let registry = OperatorRegistry::workflow();
    let evaluator = Evaluator::new(&registry);
    let list = verdict_wire::parse_str(r#"[{"field":"a","operation":"quux","value":1}]"#)?;

    let result = evaluator.evaluate(&list, &bindings(&[("a", Value::Number(1.0))]));
    assert!(!result.result);
    assert_eq!(result.trace.len(), 1);
    assert!(result.trace[0].detail.contains("unknown operator 'quux'"));
    Ok(())
}

#[test]
fn scenario_c_comma_string_membership() {
    let registry = OperatorRegistry::workflow();
    let evaluator = Evaluator::new(&registry);
    let list =
        verdict_wire::parse_str(r#"[{"field":"first_name","operation":"in","value":"a, b, c"}]"#)
            .unwrap();

    let result = evaluator.evaluate(&list, &bindings(&[("first_name", Value::String("b".into()))]));
    assert!(result.result);

    let result = evaluator.evaluate(&list, &bindings(&[("first_name", Value::String("d".into()))]));
    assert!(!result.result);
}

#[test]
fn scenario_d_missing_binding_fails_with_detail() {
    let registry = OperatorRegistry::workflow();
    let evaluator = Evaluator::new(&registry);
    let list = vec![leaf("email", Operator::Contains, "@x.com")];

    let result = evaluator.evaluate(&list, &Bindings::new());
    assert!(!result.result);
    assert_eq!(result.trace.len(), 1);
    assert!(result.trace[0].detail.contains("no test value"));
}

#[test]
fn scenario_e_nested_groups() {
    let registry = OperatorRegistry::workflow();
    let evaluator = Evaluator::new(&registry);
    let list = vec![ConditionNode::group(
        Combinator::Or,
        vec![
            leaf("a", Operator::Eq, 1.0),
            ConditionNode::group(
                Combinator::And,
                vec![leaf("b", Operator::Eq, 2.0), leaf("c", Operator::Eq, 3.0)],
            ),
        ],
    )];

    let ctx = bindings(&[
        ("a", Value::Number(0.0)),
        ("b", Value::Number(2.0)),
        ("c", Value::Number(3.0)),
    ]);
    let result = evaluator.evaluate(&list, &ctx);
    assert!(result.result);

    // Trace covers every leaf, left to right, depth first
    let fields: Vec<_> = result.trace.iter().map(|t| t.field.as_str()).collect();
    assert_eq!(fields, vec!["a", "b", "c"]);
}

#[test]
fn test_not_group_negates_and_of_children() {
    let registry = OperatorRegistry::workflow();
    let evaluator = Evaluator::new(&registry);
    let list = vec![ConditionNode::group(
        Combinator::Not,
        vec![leaf("a", Operator::Eq, 1.0), leaf("b", Operator::Eq, 2.0)],
    )];

    // Both children pass -> AND passes -> NOT fails
    let ctx = bindings(&[("a", Value::Number(1.0)), ("b", Value::Number(2.0))]);
    assert!(!evaluator.evaluate(&list, &ctx).result);

    // One child fails -> AND fails -> NOT passes
    let ctx = bindings(&[("a", Value::Number(1.0)), ("b", Value::Number(9.0))]);
    assert!(evaluator.evaluate(&list, &ctx).result);
}

#[test]
fn test_single_child_not_group_is_plain_negation() {
    let registry = OperatorRegistry::workflow();
    let evaluator = Evaluator::new(&registry);
    let list = vec![ConditionNode::group(
        Combinator::Not,
        vec![leaf("status", Operator::Eq, "closed")],
    )];

    let ctx = bindings(&[("status", Value::String("open".into()))]);
    assert!(evaluator.evaluate(&list, &ctx).result);

    let ctx = bindings(&[("status", Value::String("closed".into()))]);
    assert!(!evaluator.evaluate(&list, &ctx).result);
}

#[test]
fn test_top_level_siblings_default_and() {
    let registry = OperatorRegistry::workflow();
    let evaluator = Evaluator::new(&registry);
    let list = vec![leaf("a", Operator::Eq, 1.0), leaf("b", Operator::Eq, 2.0)];

    let ctx = bindings(&[("a", Value::Number(1.0)), ("b", Value::Number(2.0))]);
    assert!(evaluator.evaluate(&list, &ctx).result);

    let ctx = bindings(&[("a", Value::Number(1.0)), ("b", Value::Number(9.0))]);
    assert!(!evaluator.evaluate(&list, &ctx).result);
}

#[test]
fn test_logical_operator_or_overrides_next_join() {
    let registry = OperatorRegistry::workflow();
    let evaluator = Evaluator::new(&registry);
    let list = vec![
        ConditionNode::Leaf(
            Condition::new("a", Operator::Eq, Operand::literal(1.0))
                .with_logical_operator(Combinator::Or),
        ),
        leaf("b", Operator::Eq, 2.0),
    ];

    // a fails, b passes: OR join rescues the pair
    let ctx = bindings(&[("a", Value::Number(0.0)), ("b", Value::Number(2.0))]);
    assert!(evaluator.evaluate(&list, &ctx).result);
}

#[test]
fn test_mixed_chain_folds_left_to_right() {
    // a=1 or b=2 and c=3, evaluated as ((a or b) and c) by the
    // left-to-right fold: no precedence, per the legacy editors.
    let registry = OperatorRegistry::workflow();
    let evaluator = Evaluator::new(&registry);
    let list = vec![
        ConditionNode::Leaf(
            Condition::new("a", Operator::Eq, Operand::literal(1.0))
                .with_logical_operator(Combinator::Or),
        ),
        leaf("b", Operator::Eq, 2.0),
        leaf("c", Operator::Eq, 3.0),
    ];

    // a passes, b fails, c passes: (true || false) && true
    let ctx = bindings(&[
        ("a", Value::Number(1.0)),
        ("b", Value::Number(0.0)),
        ("c", Value::Number(3.0)),
    ]);
    assert!(evaluator.evaluate(&list, &ctx).result);

    // a passes, b fails, c fails: (true || false) && false
    let ctx = bindings(&[
        ("a", Value::Number(1.0)),
        ("b", Value::Number(0.0)),
        ("c", Value::Number(0.0)),
    ]);
    assert!(!evaluator.evaluate(&list, &ctx).result);
}

#[test]
fn test_emptiness_operators_ignore_value() {
    let registry = OperatorRegistry::workflow();
    let evaluator = Evaluator::new(&registry);

    for garbage in [
        Operand::literal("anything"),
        Operand::literal(42.0),
        Operand::field("other"),
    ] {
        for (op, expect_on_missing) in [
            (Operator::IsEmpty, true),
            (Operator::IsNotEmpty, false),
            (Operator::IsNull, true),
            (Operator::IsNotNull, false),
        ] {
            let list = vec![ConditionNode::leaf("f", op, garbage.clone())];
            let result = evaluator.evaluate(&list, &Bindings::new());
            assert_eq!(result.result, expect_on_missing, "{op:?} on missing binding");
        }
    }
}

#[test]
fn test_empty_vs_null_distinction() {
    let registry = OperatorRegistry::workflow();
    let evaluator = Evaluator::new(&registry);

    // Empty string: empty but not necessarily bound to null semantics
    let ctx = bindings(&[("f", Value::String(String::new()))]);
    let list = vec![leaf("f", Operator::IsEmpty, "")];
    assert!(evaluator.evaluate(&list, &ctx).result);
    let list = vec![leaf("f", Operator::IsNull, "")];
    assert!(!evaluator.evaluate(&list, &ctx).result);

    // Whole-number zero is neither empty nor null
    let ctx = bindings(&[("f", Value::Number(0.0))]);
    let list = vec![leaf("f", Operator::IsNotEmpty, "")];
    assert!(evaluator.evaluate(&list, &ctx).result);
    let list = vec![leaf("f", Operator::IsNotNull, "")];
    assert!(evaluator.evaluate(&list, &ctx).result);
}

#[test]
fn test_every_operator_has_a_passing_scenario() {
    let mut review = HashMap::new();
    review.insert("approved_by".to_string(), Value::String("alice".into()));
    review.insert("rejected_by".to_string(), Value::String("mallory".into()));
    review.insert("pending".to_string(), Value::String("bob".into()));
    review.insert(
        "roles".to_string(),
        Value::Array(vec![Value::String("manager".into())]),
    );
    review.insert("groups".to_string(), Value::String("finance".into()));

    let ctx = bindings(&[
        ("num", Value::Number(10.0)),
        ("text", Value::String("hello world".into())),
        ("tag", Value::String("beta".into())),
        ("gone", Value::Null),
        ("review", Value::Object(review)),
    ]);

    let cases: Vec<(ConditionNode, &str)> = vec![
        (leaf("num", Operator::Eq, 10.0), "="),
        (leaf("num", Operator::Ne, 11.0), "!="),
        (leaf("num", Operator::Gt, 9.0), ">"),
        (leaf("num", Operator::Lt, 11.0), "<"),
        (leaf("num", Operator::Ge, 10.0), ">="),
        (leaf("num", Operator::Le, 10.0), "<="),
        (leaf("text", Operator::Contains, "lo wo"), "contains"),
        (leaf("text", Operator::StartsWith, "hello"), "startswith"),
        (leaf("text", Operator::EndsWith, "world"), "endswith"),
        (leaf("text", Operator::Matches, "^hel+o"), "matches"),
        (
            ConditionNode::leaf(
                "tag",
                Operator::In,
                Operand::Literal(Value::Array(vec![
                    Value::String("alpha".into()),
                    Value::String("beta".into()),
                ])),
            ),
            "in",
        ),
        (
            ConditionNode::leaf(
                "tag",
                Operator::NotIn,
                Operand::Literal(Value::Array(vec![Value::String("alpha".into())])),
            ),
            "not in",
        ),
        (leaf("gone", Operator::IsEmpty, ""), "is_empty"),
        (leaf("text", Operator::IsNotEmpty, ""), "is_not_empty"),
        (leaf("gone", Operator::IsNull, ""), "is_null"),
        (leaf("text", Operator::IsNotNull, ""), "is_not_null"),
        (leaf("num", Operator::Add, 1.0), "+"),
        (leaf("num", Operator::Sub, 3.0), "-"),
        (leaf("num", Operator::Mul, 2.0), "*"),
        (leaf("num", Operator::Div, 4.0), "/"),
        (leaf("num", Operator::Pow, 2.0), "**"),
        (leaf("review", Operator::IsApprovedBy, "alice"), "is_approved_by"),
        (leaf("review", Operator::IsRejectedBy, "mallory"), "is_rejected_by"),
        (
            leaf("review", Operator::PendingApprovalFrom, "bob"),
            "pending_approval_from",
        ),
        (leaf("review", Operator::HasRole, "manager"), "has_role"),
        (leaf("review", Operator::InGroup, "finance"), "in_group"),
    ];

    for (node, symbol) in cases {
        assert!(eval_one(node, &ctx), "operator {symbol} should pass");
    }
}
