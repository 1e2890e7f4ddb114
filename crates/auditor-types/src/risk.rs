use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Risk tier of an AI system under the AI Act.
///
/// Tiers are totally ordered by severity; [`RiskLevel::PRECEDENCE`] lists
/// them in the order the classification engine evaluates them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Article 5 practice: must not be placed on the market.
    #[serde(rename = "Prohibited")]
    Prohibited,
    /// Annex I safety component or Annex III use case.
    #[serde(rename = "High Risk")]
    High,
    /// Article 50 transparency obligations.
    #[serde(rename = "Limited Risk")]
    Limited,
    /// Everything else.
    #[serde(rename = "Minimal Risk")]
    Minimal,
}

impl RiskLevel {
    /// Tiers in descending precedence.
    pub const PRECEDENCE: [RiskLevel; 4] = [
        RiskLevel::Prohibited,
        RiskLevel::High,
        RiskLevel::Limited,
        RiskLevel::Minimal,
    ];

    /// Severity rank, 3 for Prohibited down to 0 for Minimal.
    pub fn severity(&self) -> u8 {
        match self {
            RiskLevel::Prohibited => 3,
            RiskLevel::High => 2,
            RiskLevel::Limited => 1,
            RiskLevel::Minimal => 0,
        }
    }

    /// Canonical English label, identical to the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Prohibited => "Prohibited",
            RiskLevel::High => "High Risk",
            RiskLevel::Limited => "Limited Risk",
            RiskLevel::Minimal => "Minimal Risk",
        }
    }
}

impl PartialOrd for RiskLevel {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RiskLevel {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.severity().cmp(&other.severity())
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a label names none of the four tiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown risk level: {0}")]
pub struct ParseRiskLevelError(pub String);

impl FromStr for RiskLevel {
    type Err = ParseRiskLevelError;

    /// Accepts wire labels ("High Risk"), path-style labels ("high_risk",
    /// "high-risk") and short forms ("high"), case-insensitively.
    /// "unacceptable" is the legacy name of the prohibited tier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == '_' || c == '-' { ' ' } else { c })
            .collect();

        match normalized.as_str() {
            "prohibited" | "unacceptable" => Ok(RiskLevel::Prohibited),
            "high" | "high risk" => Ok(RiskLevel::High),
            "limited" | "limited risk" => Ok(RiskLevel::Limited),
            "minimal" | "minimal risk" => Ok(RiskLevel::Minimal),
            _ => Err(ParseRiskLevelError(s.to_string())),
        }
    }
}
