//! Structured strategy produced by the external structuring collaborator.
//!
//! The collaborator converts free-text strategy prose into ordered rule lists
//! and emits them as JSON with camelCase keys. Rule text stays unstructured
//! natural language; the engine interprets it with keyword heuristics rather
//! than a grammar.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredStrategy {
    #[serde(rename = "strategyName")]
    pub name: String,
    pub description: String,
    pub entry_conditions: Vec<String>,
    pub confirmation_signals: Vec<String>,
    pub exit_targets: Vec<String>,
}

impl StructuredStrategy {
    /// Total number of rules across all three lists.
    pub fn rule_count(&self) -> usize {
        self.entry_conditions.len() + self.confirmation_signals.len() + self.exit_targets.len()
    }
}
