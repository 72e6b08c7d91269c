//! Rule definitions

use super::action::Action;
use super::condition::Condition;
use serde::{Deserialize, Serialize};

/// Rule lifecycle status. Only `Active` rules participate in evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleStatus {
    Active,
    Draft,
    Archived,
}

impl Default for RuleStatus {
    fn default() -> Self {
        RuleStatus::Active
    }
}

/// A business rule: ANDed conditions plus ordered actions.
///
/// The engine consumes an immutable snapshot of rules per evaluation
/// call; it never persists or mutates rule definitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Unique rule ID (ascending-id is the priority tie-break)
    pub id: String,

    /// Human-readable name
    pub name: String,

    /// Lifecycle status
    #[serde(default)]
    pub status: RuleStatus,

    /// Evaluation priority; higher runs first
    #[serde(default)]
    pub priority: i32,

    /// Product line this rule belongs to; `None` applies everywhere
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_line: Option<String>,

    /// ANDed conditions; empty list always matches (fallback rules)
    #[serde(default)]
    pub conditions: Vec<Condition>,

    /// Actions executed in ascending `order` when the rule matches
    #[serde(default)]
    pub actions: Vec<Action>,
}

impl Rule {
    /// Create a new active rule with no conditions or actions
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Rule {
            id: id.into(),
            name: name.into(),
            status: RuleStatus::Active,
            priority: 0,
            product_line: None,
            conditions: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Set the lifecycle status
    pub fn with_status(mut self, status: RuleStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Scope the rule to one product line
    pub fn with_product_line(mut self, product_line: impl Into<String>) -> Self {
        self.product_line = Some(product_line.into());
        self
    }

    /// Add a condition
    pub fn add_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Add an action
    pub fn add_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// True if the rule participates in evaluation
    pub fn is_active(&self) -> bool {
        self.status == RuleStatus::Active
    }

    /// True if the rule applies to the given product line
    pub fn applies_to(&self, product_line: &str) -> bool {
        match &self.product_line {
            Some(line) => line == product_line,
            None => true,
        }
    }
}
