//! Evaluation tracing types for rule debugging
//!
//! These structures capture per-rule, per-condition detail about an
//! evaluation so that operators can see why a rule did or did not fire,
//! and which authoring mistakes (type mismatches, path conflicts) were
//! absorbed along the way.

use ratify_core::Value;
use serde::{Deserialize, Serialize};

/// Trace of a single condition evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionTrace {
    /// The field path the condition read
    pub field_path: String,

    /// The operator used (e.g. ">", "==", "in", "contains")
    pub operator: String,

    /// The condition's operand
    pub expected: Value,

    /// The actual field value during evaluation
    pub actual: Value,

    /// The evaluation result (false for absorbed type mismatches)
    pub result: bool,

    /// Warning text when the condition failed with a type mismatch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl ConditionTrace {
    /// Create a condition trace
    pub fn new(
        field_path: impl Into<String>,
        operator: impl Into<String>,
        expected: Value,
        actual: Value,
        result: bool,
    ) -> Self {
        Self {
            field_path: field_path.into(),
            operator: operator.into(),
            expected,
            actual,
            result,
            warning: None,
        }
    }

    /// Attach a warning (absorbed error)
    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warning = Some(warning.into());
        self
    }
}

/// Trace of a single rule evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleTrace {
    /// The rule ID
    pub rule_id: String,

    /// The rule name
    pub rule_name: String,

    /// Whether the rule matched
    pub matched: bool,

    /// Per-condition evaluation detail, in diagnostic order
    pub conditions: Vec<ConditionTrace>,

    /// Human-readable descriptions of the actions that applied
    pub actions_applied: Vec<String>,

    /// Absorbed action errors (skipped remainder of the rule)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl RuleTrace {
    /// Create a new trace entry for a rule
    pub fn new(rule_id: impl Into<String>, rule_name: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.into(),
            rule_name: rule_name.into(),
            matched: false,
            conditions: Vec::new(),
            actions_applied: Vec::new(),
            warnings: Vec::new(),
        }
    }
}
