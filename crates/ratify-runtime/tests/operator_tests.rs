//! Integration tests for condition operators
//!
//! Exercises each operator end-to-end through the engine, including the
//! absorbed-mismatch behavior: a malformed condition fails its rule but
//! never fails the evaluation.

mod common;

use common::record;
use ratify_core::{Action, ActionType, Condition, Operator, Rule, Value};
use ratify_runtime::{EvaluationResult, RuleEngine};

fn tagging_rule(field: &str, op: Operator, operand: Value) -> Vec<Rule> {
    vec![Rule::new("probe", "Probe")
        .add_condition(Condition::new(field, op, operand))
        .add_action(Action::new(ActionType::Set, "hit", Value::Bool(true)))]
}

fn fires(rules: &[Rule], input: &str) -> bool {
    let result = RuleEngine::new().evaluate("auto", rules, &record(input));
    match result {
        EvaluationResult::Completed { record, .. } => {
            record.get("hit") == Some(&Value::Bool(true))
        }
        other => panic!("expected Completed, got {:?}", other),
    }
}

#[test]
fn equals_and_not_equals() {
    let rules = tagging_rule("state", Operator::Equals, Value::String("CA".to_string()));
    assert!(fires(&rules, r#"{"state": "CA"}"#));
    assert!(!fires(&rules, r#"{"state": "NY"}"#));

    let rules = tagging_rule("age", Operator::NotEquals, Value::Number(18.0));
    assert!(fires(&rules, r#"{"age": 21}"#));
    assert!(!fires(&rules, r#"{"age": 18}"#));
}

#[test]
fn equals_does_not_coerce_across_types() {
    let rules = tagging_rule("age", Operator::Equals, Value::Number(18.0));
    assert!(!fires(&rules, r#"{"age": "18"}"#));
}

#[test]
fn relational_operators_coerce_numeric_text() {
    let rules = tagging_rule("age", Operator::GreaterThanOrEqual, Value::Number(18.0));
    assert!(fires(&rules, r#"{"age": 18}"#));
    assert!(fires(&rules, r#"{"age": "21"}"#));
    assert!(!fires(&rules, r#"{"age": 17}"#));
}

#[test]
fn relational_mismatch_is_a_non_match_not_a_failure() {
    let rules = tagging_rule("age", Operator::LessThan, Value::Number(18.0));
    // Non-coercible and missing values both simply fail to match
    assert!(!fires(&rules, r#"{"age": true}"#));
    assert!(!fires(&rules, r#"{}"#));
    assert!(!fires(&rules, r#"{"age": "not a number"}"#));
}

#[test]
fn mismatch_is_recorded_as_a_trace_warning() {
    let rules = tagging_rule("age", Operator::LessThan, Value::Number(18.0));
    match RuleEngine::new().evaluate("auto", &rules, &record(r#"{"age": true}"#)) {
        EvaluationResult::Completed { trace, .. } => {
            let cond = &trace[0].conditions[0];
            assert!(!cond.result);
            assert!(cond.warning.as_deref().unwrap_or("").contains("Type mismatch"));
        }
        other => panic!("expected Completed, got {:?}", other),
    }
}

#[test]
fn contains_and_not_contains() {
    let rules = tagging_rule(
        "name",
        Operator::Contains,
        Value::String("Smith".to_string()),
    );
    assert!(fires(&rules, r#"{"name": "Jane Smith"}"#));
    assert!(!fires(&rules, r#"{"name": "Jane Doe"}"#));

    let rules = tagging_rule("codes", Operator::Contains, Value::Number(7.0));
    assert!(fires(&rules, r#"{"codes": [3, 7]}"#));
    assert!(!fires(&rules, r#"{"codes": [3, 5]}"#));

    let rules = tagging_rule("codes", Operator::NotContains, Value::Number(7.0));
    assert!(fires(&rules, r#"{"codes": [3, 5]}"#));
}

#[test]
fn starts_with_and_ends_with() {
    let rules = tagging_rule("vin", Operator::StartsWith, Value::String("1HG".to_string()));
    assert!(fires(&rules, r#"{"vin": "1HGCM82633A004352"}"#));
    assert!(!fires(&rules, r#"{"vin": "2HGCM82633A004352"}"#));
    // Non-text field: absorbed mismatch, no match
    assert!(!fires(&rules, r#"{"vin": 12345}"#));

    let rules = tagging_rule("zip", Operator::EndsWith, Value::String("01".to_string()));
    assert!(fires(&rules, r#"{"zip": "94301"}"#));
    assert!(!fires(&rules, r#"{"zip": "94305"}"#));
}

#[test]
fn in_and_not_in() {
    let states = Value::Array(vec![
        Value::String("CA".to_string()),
        Value::String("NY".to_string()),
    ]);
    let rules = tagging_rule("state", Operator::In, states.clone());
    assert!(fires(&rules, r#"{"state": "NY"}"#));
    assert!(!fires(&rules, r#"{"state": "TX"}"#));

    let rules = tagging_rule("state", Operator::NotIn, states);
    assert!(fires(&rules, r#"{"state": "TX"}"#));
    assert!(!fires(&rules, r#"{"state": "CA"}"#));
}

#[test]
fn in_with_non_array_operand_is_absorbed() {
    let rules = tagging_rule("state", Operator::In, Value::String("CA".to_string()));
    assert!(!fires(&rules, r#"{"state": "CA"}"#));
}

#[test]
fn null_and_empty_checks() {
    let rules = tagging_rule("email", Operator::IsNull, Value::Null);
    assert!(fires(&rules, r#"{"email": null}"#));
    assert!(fires(&rules, r#"{}"#));
    assert!(!fires(&rules, r#"{"email": "a@b.com"}"#));

    let rules = tagging_rule("email", Operator::IsNotNull, Value::Null);
    assert!(fires(&rules, r#"{"email": "a@b.com"}"#));

    let rules = tagging_rule("claims", Operator::IsEmpty, Value::Null);
    assert!(fires(&rules, r#"{"claims": []}"#));
    assert!(fires(&rules, r#"{"claims": ""}"#));
    assert!(!fires(&rules, r#"{"claims": [1]}"#));
    // is_empty on a number is a mismatch, absorbed as non-match
    assert!(!fires(&rules, r#"{"claims": 3}"#));

    let rules = tagging_rule("claims", Operator::IsNotEmpty, Value::Number(1.0));
    assert!(fires(&rules, r#"{"claims": [1]}"#));
    assert!(!fires(&rules, r#"{"claims": []}"#));
}

#[test]
fn symbolic_aliases_behave_like_named_operators() {
    let json = r#"{
        "id": "legacy",
        "name": "Legacy operators",
        "conditions": [
            {"field_path": "age", "operator": ">=", "operand": 18},
            {"field_path": "state", "operator": "==", "operand": "CA"}
        ],
        "actions": [
            {"type": "set", "target_field": "hit", "operand": true}
        ]
    }"#;
    let rules = vec![serde_json::from_str::<Rule>(json).unwrap()];
    assert!(fires(&rules, r#"{"age": 21, "state": "CA"}"#));
    assert!(!fires(&rules, r#"{"age": 17, "state": "CA"}"#));
}
