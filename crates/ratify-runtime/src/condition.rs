//! Condition evaluation
//!
//! Evaluates a single condition (field path, operator, operand) against a
//! record. Type mismatches are returned as errors here; the matcher maps
//! them to a non-match plus a trace warning so that rule evaluation stays
//! total over arbitrary input data.

use crate::error::{Result, RuntimeError};
use crate::path::{get_path, FieldPath};
use ratify_core::{Condition, Operator, Record, Value};
use std::cmp::Ordering;

/// Evaluate one condition against a record.
///
/// Returns `Err(TypeMismatch)` when the field value or operand has the
/// wrong type for the operator; `Err(InvalidPath)` (fatal) when the
/// field path itself is malformed.
pub fn evaluate_condition(record: &Record, condition: &Condition) -> Result<bool> {
    let path = FieldPath::parse(&condition.field_path)?;
    let actual = get_path(record, &path);

    match condition.operator {
        Operator::Equals => Ok(actual == condition.operand),
        Operator::NotEquals => Ok(actual != condition.operand),

        Operator::GreaterThan => relational(&actual, condition, |ord| ord == Ordering::Greater),
        Operator::GreaterThanOrEqual => {
            relational(&actual, condition, |ord| ord != Ordering::Less)
        }
        Operator::LessThan => relational(&actual, condition, |ord| ord == Ordering::Less),
        Operator::LessThanOrEqual => {
            relational(&actual, condition, |ord| ord != Ordering::Greater)
        }

        Operator::Contains => contains(&actual, condition),
        Operator::NotContains => contains(&actual, condition).map(|r| !r),

        Operator::StartsWith => {
            let (text, prefix) = text_pair(&actual, condition)?;
            Ok(text.starts_with(prefix))
        }
        Operator::EndsWith => {
            let (text, suffix) = text_pair(&actual, condition)?;
            Ok(text.ends_with(suffix))
        }

        Operator::In => membership(&actual, condition),
        Operator::NotIn => membership(&actual, condition).map(|r| !r),

        Operator::IsNull => Ok(actual.is_null()),
        Operator::IsNotNull => Ok(!actual.is_null()),

        Operator::IsEmpty => emptiness(&actual, condition),
        Operator::IsNotEmpty => emptiness(&actual, condition).map(|r| !r),
    }
}

fn relational(
    actual: &Value,
    condition: &Condition,
    check: impl Fn(Ordering) -> bool,
) -> Result<bool> {
    match actual.compare(&condition.operand) {
        Some(ordering) => Ok(check(ordering)),
        None => Err(RuntimeError::TypeMismatch(format!(
            "{} {} {}: cannot compare {} with {}",
            condition.field_path,
            condition.operator,
            condition.operand,
            actual.type_name(),
            condition.operand.type_name()
        ))),
    }
}

fn contains(actual: &Value, condition: &Condition) -> Result<bool> {
    match actual {
        Value::String(text) => match &condition.operand {
            Value::String(needle) => Ok(text.contains(needle.as_str())),
            other => Err(RuntimeError::TypeMismatch(format!(
                "{} contains: string field needs a string operand, got {}",
                condition.field_path,
                other.type_name()
            ))),
        },
        Value::Array(items) => Ok(items.contains(&condition.operand)),
        Value::Object(map) => match &condition.operand {
            Value::String(key) => Ok(map.contains_key(key)),
            other => Err(RuntimeError::TypeMismatch(format!(
                "{} contains: object field needs a string key operand, got {}",
                condition.field_path,
                other.type_name()
            ))),
        },
        other => Err(RuntimeError::TypeMismatch(format!(
            "{} contains is not defined on {}",
            condition.field_path,
            other.type_name()
        ))),
    }
}

fn text_pair<'a>(actual: &'a Value, condition: &'a Condition) -> Result<(&'a str, &'a str)> {
    match (actual, &condition.operand) {
        (Value::String(text), Value::String(operand)) => Ok((text.as_str(), operand.as_str())),
        _ => Err(RuntimeError::TypeMismatch(format!(
            "{} {}: needs string field and string operand, got {} and {}",
            condition.field_path,
            condition.operator,
            actual.type_name(),
            condition.operand.type_name()
        ))),
    }
}

fn membership(actual: &Value, condition: &Condition) -> Result<bool> {
    match &condition.operand {
        Value::Array(items) => Ok(items.contains(actual)),
        other => Err(RuntimeError::TypeMismatch(format!(
            "{} {}: operand must be an array, got {}",
            condition.field_path,
            condition.operator,
            other.type_name()
        ))),
    }
}

fn emptiness(actual: &Value, condition: &Condition) -> Result<bool> {
    actual.is_empty().map_err(|_| {
        RuntimeError::TypeMismatch(format!(
            "{} {} is not defined on {}",
            condition.field_path,
            condition.operator,
            actual.type_name()
        ))
    })
}
