//! Confidence scoring.
//!
//! `min(1, base(tier) + 0.05 * min(extra, 3) + 0.10 * completeness)`, rounded
//! to two decimals. `extra` counts corroborating rules of the winning tier
//! beyond the first. The score is monotone in both inputs.

use auditor_types::{ContextCompleteness, RiskLevel};

const CORROBORATION_STEP: f64 = 0.05;
const MAX_CORROBORATION: usize = 3;
const CONTEXT_WEIGHT: f64 = 0.10;

fn base(level: RiskLevel) -> f64 {
    match level {
        RiskLevel::Prohibited => 0.90,
        RiskLevel::High => 0.70,
        RiskLevel::Limited => 0.55,
        RiskLevel::Minimal => 0.40,
    }
}

/// Score a classification from the number of winning-tier matches and the
/// completeness of the input's context.
pub fn confidence_score(
    level: RiskLevel,
    winning_matches: usize,
    completeness: ContextCompleteness,
) -> f64 {
    let extra = winning_matches.saturating_sub(1).min(MAX_CORROBORATION);
    let raw = base(level)
        + CORROBORATION_STEP * extra as f64
        + CONTEXT_WEIGHT * completeness.ratio();
    (raw.min(1.0) * 100.0).round() / 100.0
}
