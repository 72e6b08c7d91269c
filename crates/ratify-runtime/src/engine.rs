//! Evaluation orchestrator
//!
//! Runs an ordered, filtered set of active rules against one record:
//! filter by status and product line, sort by priority (descending,
//! ties broken by ascending rule id), match each rule, apply the actions
//! of matching rules to a working copy of the input, and assemble the
//! per-rule trace. A `reject` action short-circuits the remaining rules.
//!
//! The engine is a pure, stateless function of `(rules, input)`: it holds
//! no state across calls and any number of evaluations may run in
//! parallel.

use crate::error::{Result, RuntimeError};
use crate::executor::{apply_action, ActionOutcome};
use crate::matcher::match_rule_with_trace;
use crate::result::{EvaluationResult, RuleTrace};
use ratify_core::{Action, Record, Rule};

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Maximum number of active rules one call may evaluate; exceeding
    /// it fails the call with a configuration error
    pub max_rules: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { max_rules: 1000 }
    }
}

/// The rule evaluation engine
#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    config: EngineConfig,
}

impl RuleEngine {
    /// Create an engine with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with the given configuration
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Evaluate the rule set against one input record.
    ///
    /// Per-condition and per-action errors are absorbed into the trace;
    /// only configuration-class errors produce `Failed`, and a failed
    /// call returns no partial record.
    pub fn evaluate(
        &self,
        product_line: &str,
        rules: &[Rule],
        input: &Record,
    ) -> EvaluationResult {
        match self.run(product_line, rules, input) {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(product_line, "evaluation failed: {}", e);
                EvaluationResult::Failed {
                    error: e.to_string(),
                }
            }
        }
    }

    fn run(&self, product_line: &str, rules: &[Rule], input: &Record) -> Result<EvaluationResult> {
        let mut active: Vec<&Rule> = rules
            .iter()
            .filter(|rule| rule.is_active() && rule.applies_to(product_line))
            .collect();

        if active.len() > self.config.max_rules {
            return Err(RuntimeError::RuleLimitExceeded {
                count: active.len(),
                max: self.config.max_rules,
            });
        }

        // Priority descending, ties broken by id ascending: deterministic
        // across repeated calls with the same rule set.
        active.sort_by(|a, b| b.priority.cmp(&a.priority).then_with(|| a.id.cmp(&b.id)));

        tracing::debug!(
            product_line,
            active_rules = active.len(),
            "starting evaluation"
        );

        let mut record = input.clone();
        let mut trace: Vec<RuleTrace> = Vec::new();

        for rule in active {
            let (matched, condition_traces) = match_rule_with_trace(&record, rule)?;
            let mut entry = RuleTrace::new(rule.id.clone(), rule.name.clone());
            entry.matched = matched;
            entry.conditions = condition_traces;

            if matched {
                tracing::debug!(rule_id = %rule.id, "rule matched, applying actions");
                if let Some(reason) = self.apply_rule_actions(&mut record, rule, &mut entry)? {
                    trace.push(entry);
                    return Ok(EvaluationResult::Rejected { reason, trace });
                }
            }

            trace.push(entry);
        }

        Ok(EvaluationResult::Completed { record, trace })
    }

    /// Apply a matched rule's actions in ascending order. Returns the
    /// rejection reason if a reject action fired. A failing action skips
    /// the remainder of this rule's actions only.
    fn apply_rule_actions(
        &self,
        record: &mut Record,
        rule: &Rule,
        entry: &mut RuleTrace,
    ) -> Result<Option<String>> {
        let mut actions: Vec<&Action> = rule.actions.iter().collect();
        actions.sort_by_key(|action| action.order);

        for action in actions {
            match apply_action(record, action) {
                Ok(ActionOutcome::Applied(description)) => {
                    entry.actions_applied.push(description);
                }
                Ok(ActionOutcome::Rejected(reason)) => {
                    entry.actions_applied.push(format!("reject: {}", reason));
                    return Ok(Some(reason));
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    tracing::debug!(
                        rule_id = %rule.id,
                        action = %action.action_type,
                        field = %action.target_field,
                        "action failed, skipping rest of rule: {}",
                        e
                    );
                    entry.warnings.push(format!(
                        "{} {} failed ({}); remaining actions of rule {} skipped",
                        action.action_type, action.target_field, e, rule.id
                    ));
                    break;
                }
            }
        }

        Ok(None)
    }
}
