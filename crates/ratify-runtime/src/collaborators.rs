//! Collaborator interfaces
//!
//! The engine itself is pure; everything that touches storage or the
//! outside world sits behind these traits and is supplied by the host
//! service. The engine only ever reads from the rule store and only ever
//! produces telemetry, never depending on its delivery.

use crate::service::EvaluationReport;
use async_trait::async_trait;
use ratify_core::Rule;

/// Supplies the current active-rule snapshot for a product line.
#[async_trait]
pub trait RuleStore: Send + Sync {
    async fn active_rules(&self, product_line: &str) -> anyhow::Result<Vec<Rule>>;
}

/// Optional pre-flight validation of field paths against a known-field
/// catalog. Unknown fields stay legal (missing reads as null, writes
/// auto-create), so failures here are warnings, never errors.
pub trait FieldCatalog: Send + Sync {
    fn is_known_field(&self, path: &str) -> bool;
}

/// Receives evaluation reports for observability; fire-and-forget.
#[async_trait]
pub trait TelemetrySink: Send + Sync {
    async fn record(&self, report: &EvaluationReport);
}

/// In-memory rule store, mainly for tests and embedded use.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRuleStore {
    rules: Vec<Rule>,
}

impl InMemoryRuleStore {
    /// Create a store over a fixed rule snapshot
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }
}

#[async_trait]
impl RuleStore for InMemoryRuleStore {
    async fn active_rules(&self, product_line: &str) -> anyhow::Result<Vec<Rule>> {
        Ok(self
            .rules
            .iter()
            .filter(|rule| rule.is_active() && rule.applies_to(product_line))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratify_core::RuleStatus;

    #[tokio::test]
    async fn test_in_memory_store_filters_status_and_product_line() {
        let store = InMemoryRuleStore::new(vec![
            Rule::new("r1", "Active auto").with_product_line("auto"),
            Rule::new("r2", "Draft").with_status(RuleStatus::Draft),
            Rule::new("r3", "Home only").with_product_line("home"),
            Rule::new("r4", "Global"),
        ]);

        let rules = store.active_rules("auto").await.unwrap();
        let ids: Vec<&str> = rules.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r4"]);
    }
}
