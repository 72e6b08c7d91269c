//! Evaluation result types

use super::trace::RuleTrace;
use ratify_core::Record;
use serde::{Deserialize, Serialize};

/// Outcome of one `evaluate` call.
///
/// `Rejected` is a first-class business outcome, not an error; only
/// configuration-class failures produce `Failed`, and a `Failed` call
/// returns no partial record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EvaluationResult {
    /// All rules processed; the transformed record and full trace
    Completed {
        record: Record,
        trace: Vec<RuleTrace>,
    },
    /// A reject action fired; downstream processing should halt
    Rejected {
        reason: String,
        trace: Vec<RuleTrace>,
    },
    /// Configuration error aborted the call
    Failed { error: String },
}

impl EvaluationResult {
    /// True for the `Rejected` outcome
    pub fn is_rejected(&self) -> bool {
        matches!(self, EvaluationResult::Rejected { .. })
    }

    /// The final record, when the evaluation completed
    pub fn record(&self) -> Option<&Record> {
        match self {
            EvaluationResult::Completed { record, .. } => Some(record),
            _ => None,
        }
    }

    /// The trace, when one was produced
    pub fn trace(&self) -> Option<&[RuleTrace]> {
        match self {
            EvaluationResult::Completed { trace, .. }
            | EvaluationResult::Rejected { trace, .. } => Some(trace),
            EvaluationResult::Failed { .. } => None,
        }
    }
}
