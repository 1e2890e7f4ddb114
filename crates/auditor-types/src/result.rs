use serde::{Deserialize, Serialize};

use crate::risk::RiskLevel;

/// A catalog rule whose predicate held for the classified input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchedRule {
    pub rule_id: String,
    pub category: String,
    pub reason: String,
    /// Legal reference, e.g. "Annex III, 4".
    pub reference: String,
}

/// Outcome of one classification.
///
/// Built fresh per call and never mutated afterwards; persistence belongs
/// to the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub risk_level: RiskLevel,
    /// Confidence in [0, 1].
    pub risk_score: f64,
    pub justification: Vec<String>,
    pub matched_rules: Vec<MatchedRule>,
    /// Ordered, deduplicated obligation strings.
    pub obligations: Vec<String>,
    #[serde(default)]
    pub next_steps: Vec<String>,
}

impl AnalysisResult {
    pub fn has_rule(&self, rule_id: &str) -> bool {
        self.matched_rules.iter().any(|r| r.rule_id == rule_id)
    }
}
