//! Action execution
//!
//! Applies one action to the working record. Errors here are localized:
//! the orchestrator skips the remainder of the failing rule's actions and
//! keeps evaluating, except for `reject`, which halts the whole call.

use crate::error::{Result, RuntimeError};
use crate::path::{get_path, set_path, FieldPath};
use ratify_core::{Action, ActionType, Record, Value};

/// What applying one action produced
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// The action mutated the record; human-readable description for the trace
    Applied(String),
    /// A reject action fired with this reason
    Rejected(String),
}

/// Apply a single action to the working record.
pub fn apply_action(record: &mut Record, action: &Action) -> Result<ActionOutcome> {
    if action.action_type == ActionType::Reject {
        return Ok(ActionOutcome::Rejected(rejection_reason(&action.operand)));
    }

    let path = FieldPath::parse(&action.target_field)?;

    match action.action_type {
        ActionType::Set => {
            set_path(record, &path, action.operand.clone())?;
            Ok(ActionOutcome::Applied(format!(
                "set {} = {}",
                action.target_field, action.operand
            )))
        }

        ty if ty.is_arithmetic() => {
            let current = get_path(record, &path);
            // Missing target reads as 0
            let current = if current.is_null() {
                0.0
            } else {
                current.coerce_number().map_err(|_| {
                    RuntimeError::TypeMismatch(format!(
                        "{} {}: current value {} is not numeric",
                        ty, action.target_field, current
                    ))
                })?
            };
            let operand = action.operand.coerce_number().map_err(|_| {
                RuntimeError::TypeMismatch(format!(
                    "{} {}: operand {} is not numeric",
                    ty, action.target_field, action.operand
                ))
            })?;

            let next = match ty {
                ActionType::Surcharge => current + current * operand / 100.0,
                ActionType::Discount => current - current * operand / 100.0,
                ActionType::Multiply => current * operand,
                ActionType::Divide => {
                    if operand == 0.0 {
                        return Err(RuntimeError::DivisionByZero);
                    }
                    current / operand
                }
                ActionType::Add => current + operand,
                // is_arithmetic leaves only Subtract
                _ => current - operand,
            };

            set_path(record, &path, Value::Number(next))?;
            Ok(ActionOutcome::Applied(format!(
                "{} {} -> {}",
                ty,
                action.target_field,
                Value::Number(next)
            )))
        }

        ActionType::Append => {
            let items = match get_path(record, &path) {
                Value::Null => vec![action.operand.clone()],
                Value::Array(mut items) => {
                    items.push(action.operand.clone());
                    items
                }
                other => {
                    return Err(RuntimeError::TypeMismatch(format!(
                        "append {}: target is {}, expected array",
                        action.target_field,
                        other.type_name()
                    )))
                }
            };
            set_path(record, &path, Value::Array(items))?;
            Ok(ActionOutcome::Applied(format!(
                "append {} to {}",
                action.operand, action.target_field
            )))
        }

        ActionType::Remove => {
            match get_path(record, &path) {
                Value::Array(mut items) => {
                    if let Some(pos) = items.iter().position(|item| item == &action.operand) {
                        items.remove(pos);
                        set_path(record, &path, Value::Array(items))?;
                    }
                    Ok(ActionOutcome::Applied(format!(
                        "remove {} from {}",
                        action.operand, action.target_field
                    )))
                }
                // Missing target: nothing to remove
                Value::Null => Ok(ActionOutcome::Applied(format!(
                    "remove {} from {} (absent)",
                    action.operand, action.target_field
                ))),
                other => Err(RuntimeError::TypeMismatch(format!(
                    "remove {}: target is {}, expected array",
                    action.target_field,
                    other.type_name()
                ))),
            }
        }

        // Set, arithmetic and Reject handled above
        _ => unreachable!("action type {} already dispatched", action.action_type),
    }
}

fn rejection_reason(operand: &Value) -> String {
    match operand {
        Value::String(reason) => reason.clone(),
        Value::Null => "rejected".to_string(),
        other => other.to_string(),
    }
}
