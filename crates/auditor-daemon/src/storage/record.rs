//! Audit history records

use std::collections::BTreeMap;

use auditor_types::{AISystemInput, AnalysisResult, RiskLevel};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::StorageError;
use crate::storage::StorageResult;

/// Window counted by [`AuditStats::recent_count`].
const RECENT_WINDOW_DAYS: i64 = 7;

/// Domain bucket for records without a domain.
const UNKNOWN_DOMAIN: &str = "Unknown";

/// One saved assessment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub input: AISystemInput,
    pub result: AnalysisResult,
}

impl AuditRecord {
    pub fn new(input: AISystemInput, result: AnalysisResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            input,
            result,
        }
    }

    /// Extract `(input, result)` pairs from an export document.
    ///
    /// Accepts an array of records or a single record. Entries without a
    /// well-formed `input` and `result` are skipped; ids and timestamps are
    /// ignored.
    pub fn parse_import(document: serde_json::Value) -> StorageResult<Vec<(AISystemInput, AnalysisResult)>> {
        #[derive(Deserialize)]
        struct Entry {
            input: AISystemInput,
            result: AnalysisResult,
        }

        let items = match document {
            serde_json::Value::Array(items) => items,
            item @ serde_json::Value::Object(_) => vec![item],
            _ => {
                return Err(StorageError::InvalidData(
                    "expected an array of audit records or a single record".to_string(),
                ))
            }
        };

        let total = items.len();
        let entries: Vec<_> = items
            .into_iter()
            .filter_map(|item| serde_json::from_value::<Entry>(item).ok())
            .map(|entry| (entry.input, entry.result))
            .collect();

        debug!(total, valid = entries.len(), "parsed audit import");
        Ok(entries)
    }
}

/// Aggregates over the stored history.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AuditStats {
    pub total: usize,
    pub by_risk_level: BTreeMap<String, usize>,
    pub by_domain: BTreeMap<String, usize>,
    /// Records from the last seven days.
    pub recent_count: usize,
}

impl AuditStats {
    pub fn from_records(records: &[AuditRecord], now: DateTime<Utc>) -> Self {
        let cutoff = now - Duration::days(RECENT_WINDOW_DAYS);
        let mut stats = Self {
            total: records.len(),
            ..Self::default()
        };

        for level in RiskLevel::PRECEDENCE {
            stats.by_risk_level.insert(level.as_str().to_string(), 0);
        }

        for record in records {
            *stats
                .by_risk_level
                .entry(record.result.risk_level.as_str().to_string())
                .or_insert(0) += 1;

            let domain = record.input.domain.trim();
            let domain = if domain.is_empty() { UNKNOWN_DOMAIN } else { domain };
            *stats.by_domain.entry(domain.to_string()).or_insert(0) += 1;

            if record.timestamp > cutoff {
                stats.recent_count += 1;
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn result(level: RiskLevel) -> AnalysisResult {
        AnalysisResult {
            risk_level: level,
            risk_score: 0.5,
            justification: vec![],
            matched_rules: vec![],
            obligations: vec![],
            next_steps: vec![],
        }
    }

    #[test]
    fn test_stats_buckets() {
        let now = Utc::now();
        let mut old = AuditRecord::new(
            AISystemInput::default().with_domain("Retail"),
            result(RiskLevel::High),
        );
        old.timestamp = now - Duration::days(30);
        let fresh = AuditRecord::new(AISystemInput::default(), result(RiskLevel::Minimal));

        let stats = AuditStats::from_records(&[fresh, old], now);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.recent_count, 1);
        assert_eq!(stats.by_domain.get("Retail"), Some(&1));
        assert_eq!(stats.by_domain.get("Unknown"), Some(&1));
        assert_eq!(stats.by_risk_level.get(RiskLevel::High.as_str()), Some(&1));
        assert_eq!(stats.by_risk_level.get(RiskLevel::Prohibited.as_str()), Some(&0));
    }

    #[test]
    fn test_parse_import_skips_malformed() {
        let good = AuditRecord::new(AISystemInput::default(), result(RiskLevel::Limited));
        let doc = json!([
            serde_json::to_value(&good).unwrap(),
            {"input": {}},
            {"foo": "bar"},
        ]);
        let entries = AuditRecord::parse_import(doc).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].1.risk_level, RiskLevel::Limited);
    }

    #[test]
    fn test_parse_import_keeps_null_fields() {
        let mut entry = serde_json::to_value(AuditRecord::new(
            AISystemInput::default(),
            result(RiskLevel::Minimal),
        ))
        .unwrap();
        entry["input"]["domain"] = serde_json::Value::Null;
        entry["input"]["data_types"] = serde_json::Value::Null;

        let entries = AuditRecord::parse_import(json!([entry])).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0.domain, "");
    }

    #[test]
    fn test_parse_import_single_object_and_garbage() {
        let good = AuditRecord::new(AISystemInput::default(), result(RiskLevel::High));
        let entries = AuditRecord::parse_import(serde_json::to_value(&good).unwrap()).unwrap();
        assert_eq!(entries.len(), 1);

        assert!(matches!(
            AuditRecord::parse_import(json!("not records")),
            Err(StorageError::InvalidData(_))
        ));
    }
}
