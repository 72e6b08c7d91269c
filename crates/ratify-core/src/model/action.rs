//! Action definitions
//!
//! Actions are the mutation half of a rule: when a rule matches, its
//! actions run sequentially in ascending `order`, each seeing the
//! mutations of the actions before it.

use crate::types::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Action type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    /// Raw assignment of the operand to the target field
    #[serde(alias = "set_value")]
    Set,
    /// current * (1 + operand/100)
    Surcharge,
    /// current * (1 - operand/100)
    Discount,
    /// current * operand
    Multiply,
    /// current / operand (operand 0 is an arithmetic error)
    Divide,
    /// current + operand
    #[serde(alias = "increment")]
    Add,
    /// current - operand
    #[serde(alias = "decrement")]
    Subtract,
    /// Push the operand onto the target array (absent target becomes a new array)
    Append,
    /// Remove the first structurally-equal element from the target array
    Remove,
    /// Halt the whole evaluation with the operand as rejection reason
    Reject,
}

impl ActionType {
    /// Returns true for the numeric read-modify-write family
    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            ActionType::Surcharge
                | ActionType::Discount
                | ActionType::Multiply
                | ActionType::Divide
                | ActionType::Add
                | ActionType::Subtract
        )
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ActionType::Set => "set",
            ActionType::Surcharge => "surcharge",
            ActionType::Discount => "discount",
            ActionType::Multiply => "multiply",
            ActionType::Divide => "divide",
            ActionType::Add => "add",
            ActionType::Subtract => "subtract",
            ActionType::Append => "append",
            ActionType::Remove => "remove",
            ActionType::Reject => "reject",
        };
        write!(f, "{}", text)
    }
}

/// A single action of a rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// What the action does
    #[serde(rename = "type")]
    pub action_type: ActionType,

    /// Dotted field path the action writes (for `reject`, unused)
    #[serde(default)]
    pub target_field: String,

    /// Operand (amount, element, assigned value or rejection reason)
    #[serde(default = "default_operand")]
    pub operand: Value,

    /// Execution position within the rule; ascending, affects the outcome
    #[serde(default)]
    pub order: i32,
}

fn default_operand() -> Value {
    Value::Null
}

impl Action {
    /// Create a new action
    pub fn new(action_type: ActionType, target_field: impl Into<String>, operand: Value) -> Self {
        Action {
            action_type,
            target_field: target_field.into(),
            operand,
            order: 0,
        }
    }

    /// Create a reject action with a reason
    pub fn reject(reason: impl Into<String>) -> Self {
        Action {
            action_type: ActionType::Reject,
            target_field: String::new(),
            operand: Value::String(reason.into()),
            order: 0,
        }
    }

    /// Set the execution order
    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_creation() {
        let action = Action::new(ActionType::Surcharge, "premium", Value::Number(10.0))
            .with_order(1);
        assert_eq!(action.action_type, ActionType::Surcharge);
        assert_eq!(action.target_field, "premium");
        assert_eq!(action.order, 1);
    }

    #[test]
    fn test_reject_action() {
        let action = Action::reject("underage");
        assert_eq!(action.action_type, ActionType::Reject);
        assert_eq!(action.operand, Value::String("underage".to_string()));
    }

    #[test]
    fn test_action_type_aliases() {
        let ty: ActionType = serde_json::from_str("\"set_value\"").unwrap();
        assert_eq!(ty, ActionType::Set);
        let ty: ActionType = serde_json::from_str("\"increment\"").unwrap();
        assert_eq!(ty, ActionType::Add);
        let ty: ActionType = serde_json::from_str("\"decrement\"").unwrap();
        assert_eq!(ty, ActionType::Subtract);
    }

    #[test]
    fn test_action_deserialization() {
        let json = r#"{"type": "append", "target_field": "flags", "operand": "review", "order": 3}"#;
        let action: Action = serde_json::from_str(json).unwrap();
        assert_eq!(action.action_type, ActionType::Append);
        assert_eq!(action.target_field, "flags");
        assert_eq!(action.operand, Value::String("review".to_string()));
        assert_eq!(action.order, 3);
    }

    #[test]
    fn test_is_arithmetic() {
        assert!(ActionType::Surcharge.is_arithmetic());
        assert!(ActionType::Divide.is_arithmetic());
        assert!(!ActionType::Set.is_arithmetic());
        assert!(!ActionType::Reject.is_arithmetic());
    }
}
