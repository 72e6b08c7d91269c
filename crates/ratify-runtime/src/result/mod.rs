//! Evaluation result and trace types

pub mod result;
pub mod trace;

pub use result::EvaluationResult;
pub use trace::{ConditionTrace, RuleTrace};
