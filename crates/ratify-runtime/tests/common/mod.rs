//! Shared helpers for integration tests

use ratify_core::Record;
use ratify_runtime::EvaluationResult;

/// Build a record from a JSON literal
pub fn record(json: &str) -> Record {
    serde_json::from_str(json).expect("test record must be valid JSON")
}

/// Unwrap a Completed result into its record, panicking otherwise
pub fn completed_record(result: EvaluationResult) -> Record {
    match result {
        EvaluationResult::Completed { record, .. } => record,
        other => panic!("expected Completed, got {:?}", other),
    }
}
