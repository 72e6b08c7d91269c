//! Evaluation service
//!
//! Thin async seam between the pure engine and its collaborators: fetch
//! the active-rule snapshot once per call, run the engine, and ship the
//! report to the telemetry sink.

use crate::collaborators::{FieldCatalog, RuleStore, TelemetrySink};
use crate::engine::RuleEngine;
use crate::result::EvaluationResult;
use ratify_core::{Record, Rule};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// One evaluation's report: the engine result plus request metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Unique id for correlating logs and telemetry
    pub request_id: String,

    /// Product line that was evaluated
    pub product_line: String,

    /// Wall-clock duration of the call in milliseconds
    pub elapsed_ms: u64,

    /// The engine outcome
    pub result: EvaluationResult,
}

/// Wires a rule store, optional field catalog and optional telemetry
/// sink to a `RuleEngine`.
pub struct EvaluationService {
    engine: RuleEngine,
    store: Arc<dyn RuleStore>,
    catalog: Option<Arc<dyn FieldCatalog>>,
    telemetry: Option<Arc<dyn TelemetrySink>>,
}

impl EvaluationService {
    /// Create a service over a rule store with a default engine
    pub fn new(store: Arc<dyn RuleStore>) -> Self {
        Self {
            engine: RuleEngine::new(),
            store,
            catalog: None,
            telemetry: None,
        }
    }

    /// Use a specific engine configuration
    pub fn with_engine(mut self, engine: RuleEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Attach a field catalog for pre-flight path validation
    pub fn with_catalog(mut self, catalog: Arc<dyn FieldCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Attach a telemetry sink
    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = Some(telemetry);
        self
    }

    /// Generate a unique request ID
    /// Format: eval_YYYYMMDDHHmmss_xxxxxx
    fn generate_request_id() -> String {
        use chrono::Utc;
        use rand::Rng;

        let datetime = Utc::now().format("%Y%m%d%H%M%S");
        let random: u32 = rand::thread_rng().gen_range(0..0xFFFFFF);
        format!("eval_{}_{:06x}", datetime, random)
    }

    /// Evaluate one record for a product line.
    ///
    /// Errors here are transport-level only (the rule store failing);
    /// rule-level problems surface inside the report's result.
    pub async fn evaluate(
        &self,
        product_line: &str,
        input: Record,
    ) -> anyhow::Result<EvaluationReport> {
        let request_id = Self::generate_request_id();
        let started = Instant::now();

        let rules = self.store.active_rules(product_line).await?;
        tracing::debug!(
            %request_id,
            product_line,
            rules = rules.len(),
            "fetched rule snapshot"
        );

        if let Some(catalog) = &self.catalog {
            Self::check_fields(catalog.as_ref(), &rules, &request_id);
        }

        let result = self.engine.evaluate(product_line, &rules, &input);

        let report = EvaluationReport {
            request_id,
            product_line: product_line.to_string(),
            elapsed_ms: started.elapsed().as_millis() as u64,
            result,
        };

        if let Some(sink) = &self.telemetry {
            sink.record(&report).await;
        }

        Ok(report)
    }

    fn check_fields(catalog: &dyn FieldCatalog, rules: &[Rule], request_id: &str) {
        for rule in rules {
            for condition in &rule.conditions {
                if !catalog.is_known_field(&condition.field_path) {
                    tracing::warn!(
                        request_id,
                        rule_id = %rule.id,
                        field = %condition.field_path,
                        "condition references a field not in the catalog"
                    );
                }
            }
            for action in &rule.actions {
                if !action.target_field.is_empty() && !catalog.is_known_field(&action.target_field)
                {
                    tracing::warn!(
                        request_id,
                        rule_id = %rule.id,
                        field = %action.target_field,
                        "action targets a field not in the catalog"
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::InMemoryRuleStore;
    use ratify_core::{Action, ActionType, Rule, Value};
    use std::sync::Mutex;

    struct CapturingSink {
        reports: Mutex<Vec<EvaluationReport>>,
    }

    #[async_trait::async_trait]
    impl TelemetrySink for CapturingSink {
        async fn record(&self, report: &EvaluationReport) {
            self.reports.lock().unwrap().push(report.clone());
        }
    }

    fn record(json: &str) -> Record {
        serde_json::from_str(json).unwrap()
    }

    #[tokio::test]
    async fn test_service_end_to_end() {
        let store = Arc::new(InMemoryRuleStore::new(vec![Rule::new("r1", "Surcharge")
            .add_action(Action::new(
                ActionType::Surcharge,
                "premium",
                Value::Number(10.0),
            ))]));
        let sink = Arc::new(CapturingSink {
            reports: Mutex::new(Vec::new()),
        });

        let service = EvaluationService::new(store).with_telemetry(sink.clone());
        let report = service
            .evaluate("auto", record(r#"{"premium": 100}"#))
            .await
            .unwrap();

        assert!(report.request_id.starts_with("eval_"));
        assert_eq!(
            report.result.record().unwrap().get("premium"),
            Some(&Value::Number(110.0))
        );
        assert_eq!(sink.reports.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_request_ids_are_unique() {
        let a = EvaluationService::generate_request_id();
        let b = EvaluationService::generate_request_id();
        // Same-second ids still differ in the random suffix (collision
        // probability 1 in 2^24 per pair)
        assert_ne!(a, b);
    }
}
