//! Condition definitions

use super::operator::Operator;
use crate::types::Value;
use serde::{Deserialize, Serialize};

/// A single condition of a rule.
///
/// All of a rule's conditions are ANDed; `order` is a stable secondary
/// sort key used for trace readability only and never changes the match
/// outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Dotted field path into the record (e.g. "driver.age", "items[2]")
    pub field_path: String,

    /// Comparison operator
    pub operator: Operator,

    /// Right-hand operand (ignored by unary operators)
    #[serde(default = "default_operand")]
    pub operand: Value,

    /// Diagnostic ordering among the rule's conditions
    #[serde(default)]
    pub order: i32,
}

fn default_operand() -> Value {
    Value::Null
}

impl Condition {
    /// Create a new condition
    pub fn new(field_path: impl Into<String>, operator: Operator, operand: Value) -> Self {
        Condition {
            field_path: field_path.into(),
            operator,
            operand,
            order: 0,
        }
    }

    /// Set the diagnostic order
    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_creation() {
        let cond = Condition::new("driver.age", Operator::LessThan, Value::Number(18.0))
            .with_order(2);
        assert_eq!(cond.field_path, "driver.age");
        assert_eq!(cond.operator, Operator::LessThan);
        assert_eq!(cond.operand, Value::Number(18.0));
        assert_eq!(cond.order, 2);
    }

    #[test]
    fn test_condition_deserializes_without_operand() {
        let json = r#"{"field_path": "email", "operator": "is_null"}"#;
        let cond: Condition = serde_json::from_str(json).unwrap();
        assert_eq!(cond.operator, Operator::IsNull);
        assert_eq!(cond.operand, Value::Null);
        assert_eq!(cond.order, 0);
    }

    #[test]
    fn test_condition_deserializes_symbolic_operator() {
        let json = r#"{"field_path": "age", "operator": "<", "operand": 18, "order": 1}"#;
        let cond: Condition = serde_json::from_str(json).unwrap();
        assert_eq!(cond.operator, Operator::LessThan);
        assert_eq!(cond.operand, Value::Number(18.0));
    }
}
