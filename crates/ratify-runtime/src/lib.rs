//! Ratify Runtime - Rule evaluation engine
//!
//! This crate evaluates declaratively-defined business rules (field-path
//! conditions plus ordered actions) against a runtime data record:
//! deterministic rule ordering, action composition on a working copy of
//! the record, rejection short-circuit and per-rule tracing.

pub mod collaborators;
pub mod condition;
pub mod engine;
pub mod error;
pub mod executor;
pub mod matcher;
pub mod path;
pub mod result;
pub mod service;

// Re-export main types
pub use collaborators::{FieldCatalog, InMemoryRuleStore, RuleStore, TelemetrySink};
pub use condition::evaluate_condition;
pub use engine::{EngineConfig, RuleEngine};
pub use error::{Result, RuntimeError};
pub use executor::{apply_action, ActionOutcome};
pub use matcher::{match_rule, match_rule_with_trace};
pub use path::{get_path, set_path, FieldPath, Segment};
pub use result::{ConditionTrace, EvaluationResult, RuleTrace};
pub use service::{EvaluationReport, EvaluationService};
