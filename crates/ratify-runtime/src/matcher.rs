//! Rule matching
//!
//! A rule matches when all of its conditions evaluate true (AND
//! semantics); a rule with zero conditions always matches, which is how
//! default/fallback rules are authored. Conditions are evaluated in
//! ascending `order` (a diagnostics-only key that never changes the
//! outcome).
//!
//! Type mismatches inside a condition make that condition false and are
//! recorded as trace warnings; only malformed field paths (configuration
//! class) propagate.

use crate::condition::evaluate_condition;
use crate::error::Result;
use crate::path::{get_path, FieldPath};
use crate::result::ConditionTrace;
use ratify_core::{Condition, Record, Rule, Value};

/// Fast-path match check without trace collection; short-circuits on the
/// first false condition.
pub fn match_rule(record: &Record, rule: &Rule) -> Result<bool> {
    for condition in ordered_conditions(rule) {
        match evaluate_condition(record, condition) {
            Ok(true) => {}
            Ok(false) => return Ok(false),
            Err(e) if e.is_fatal() => return Err(e),
            Err(_) => return Ok(false),
        }
    }
    Ok(true)
}

/// Match check that records every condition's individual result.
pub fn match_rule_with_trace(record: &Record, rule: &Rule) -> Result<(bool, Vec<ConditionTrace>)> {
    let mut traces = Vec::new();
    let mut all_true = true;

    for condition in ordered_conditions(rule) {
        let actual = read_actual(record, condition);
        let entry = ConditionTrace::new(
            condition.field_path.clone(),
            condition.operator.to_string(),
            condition.operand.clone(),
            actual,
            false,
        );

        match evaluate_condition(record, condition) {
            Ok(result) => {
                traces.push(ConditionTrace { result, ..entry });
                if !result {
                    all_true = false;
                }
            }
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                tracing::debug!(
                    rule_id = %rule.id,
                    field = %condition.field_path,
                    "condition absorbed a type mismatch: {}",
                    e
                );
                traces.push(entry.with_warning(e.to_string()));
                all_true = false;
            }
        }
    }

    Ok((all_true, traces))
}

fn ordered_conditions(rule: &Rule) -> Vec<&Condition> {
    let mut conditions: Vec<&Condition> = rule.conditions.iter().collect();
    conditions.sort_by_key(|c| c.order);
    conditions
}

fn read_actual(record: &Record, condition: &Condition) -> Value {
    match FieldPath::parse(&condition.field_path) {
        Ok(path) => get_path(record, &path),
        Err(_) => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratify_core::Operator;

    fn record(json: &str) -> Record {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_empty_condition_list_always_matches() {
        let rule = Rule::new("fallback", "Default rule");
        assert!(match_rule(&record(r#"{"age": 17}"#), &rule).unwrap());
        assert!(match_rule(&Record::new(), &rule).unwrap());
    }

    #[test]
    fn test_and_semantics() {
        let rule = Rule::new("r1", "CA underage")
            .add_condition(Condition::new(
                "state",
                Operator::Equals,
                Value::String("CA".to_string()),
            ))
            .add_condition(Condition::new(
                "age",
                Operator::LessThan,
                Value::Number(18.0),
            ));

        assert!(match_rule(&record(r#"{"state": "CA", "age": 17}"#), &rule).unwrap());
        assert!(!match_rule(&record(r#"{"state": "NY", "age": 17}"#), &rule).unwrap());
        assert!(!match_rule(&record(r#"{"state": "CA", "age": 30}"#), &rule).unwrap());
    }

    #[test]
    fn test_type_mismatch_makes_condition_false() {
        let rule = Rule::new("r1", "Bad condition").add_condition(Condition::new(
            "active",
            Operator::GreaterThan,
            Value::Number(1.0),
        ));
        assert!(!match_rule(&record(r#"{"active": true}"#), &rule).unwrap());
    }

    #[test]
    fn test_trace_records_each_condition() {
        let rule = Rule::new("r1", "Two conditions")
            .add_condition(
                Condition::new("age", Operator::GreaterThan, Value::Number(18.0)).with_order(1),
            )
            .add_condition(
                Condition::new("state", Operator::Equals, Value::String("CA".to_string()))
                    .with_order(0),
            );

        let (matched, traces) =
            match_rule_with_trace(&record(r#"{"state": "CA", "age": 17}"#), &rule).unwrap();
        assert!(!matched);
        assert_eq!(traces.len(), 2);
        // Diagnostic order: ascending condition order
        assert_eq!(traces[0].field_path, "state");
        assert!(traces[0].result);
        assert_eq!(traces[1].field_path, "age");
        assert!(!traces[1].result);
        assert_eq!(traces[1].actual, Value::Number(17.0));
    }

    #[test]
    fn test_trace_records_absorbed_mismatch_as_warning() {
        let rule = Rule::new("r1", "Bad condition").add_condition(Condition::new(
            "active",
            Operator::LessThan,
            Value::Number(1.0),
        ));
        let (matched, traces) = match_rule_with_trace(&record(r#"{"active": true}"#), &rule).unwrap();
        assert!(!matched);
        assert!(!traces[0].result);
        assert!(traces[0].warning.is_some());
    }

    #[test]
    fn test_malformed_path_propagates() {
        let rule = Rule::new("r1", "Broken").add_condition(Condition::new(
            "a..b",
            Operator::Equals,
            Value::Null,
        ));
        assert!(match_rule(&Record::new(), &rule).is_err());
        assert!(match_rule_with_trace(&Record::new(), &rule).is_err());
    }
}
