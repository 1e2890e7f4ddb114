use std::collections::BTreeMap;

use auditor_types::RiskLevel;
use serde::Serialize;

use crate::catalog::{
    HIGH_RISK_CHECKLIST, LIMITED_RISK_CHECKLIST, MINIMAL_RISK_CHECKLIST, PROHIBITED_CHECKLIST,
};

/// Urgency of a checklist item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// One actionable compliance item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ChecklistItem {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Legal article reference, e.g. "Article 9".
    pub article: &'static str,
    pub link: &'static str,
    pub category: &'static str,
    pub priority: Priority,
}

/// Aggregate view of a checklist, derived on every call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChecklistStats {
    pub total_items: usize,
    pub categories: BTreeMap<&'static str, usize>,
    pub critical_count: usize,
}

/// The static checklist for a tier, in catalog order.
pub fn checklist(level: RiskLevel) -> &'static [ChecklistItem] {
    match level {
        RiskLevel::Prohibited => PROHIBITED_CHECKLIST,
        RiskLevel::High => HIGH_RISK_CHECKLIST,
        RiskLevel::Limited => LIMITED_RISK_CHECKLIST,
        RiskLevel::Minimal => MINIMAL_RISK_CHECKLIST,
    }
}

/// Group and count the tier's checklist.
pub fn checklist_stats(level: RiskLevel) -> ChecklistStats {
    let items = checklist(level);
    let mut categories = BTreeMap::new();
    for item in items {
        *categories.entry(item.category).or_insert(0) += 1;
    }

    ChecklistStats {
        total_items: items.len(),
        categories,
        critical_count: items
            .iter()
            .filter(|item| item.priority == Priority::Critical)
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_tier_has_items() {
        for level in RiskLevel::PRECEDENCE {
            assert!(!checklist(level).is_empty(), "{} checklist empty", level);
        }
    }

    #[test]
    fn catalog_sizes() {
        assert_eq!(checklist(RiskLevel::Prohibited).len(), 4);
        assert_eq!(checklist(RiskLevel::High).len(), 15);
        assert_eq!(checklist(RiskLevel::Limited).len(), 5);
        assert_eq!(checklist(RiskLevel::Minimal).len(), 4);
    }

    #[test]
    fn ids_are_unique_across_catalogs() {
        let mut seen = HashSet::new();
        for level in RiskLevel::PRECEDENCE {
            for item in checklist(level) {
                assert!(seen.insert(item.id), "duplicate id {}", item.id);
            }
        }
    }

    #[test]
    fn order_is_stable() {
        let first: Vec<_> = checklist(RiskLevel::High).iter().map(|i| i.id).collect();
        let second: Vec<_> = checklist(RiskLevel::High).iter().map(|i| i.id).collect();
        assert_eq!(first, second);
        assert_eq!(first[0], "high-risk-management");
    }

    #[test]
    fn stats_are_derived_from_items() {
        let stats = checklist_stats(RiskLevel::Prohibited);
        assert_eq!(stats.total_items, 4);
        assert_eq!(stats.critical_count, 3);
        assert_eq!(stats.categories.get("Legal Compliance"), Some(&2));
        assert_eq!(stats.categories.values().sum::<usize>(), 4);

        let stats = checklist_stats(RiskLevel::High);
        assert_eq!(stats.critical_count, 7);
        assert_eq!(stats.categories.get("Certification"), Some(&3));
    }

    #[test]
    fn priority_serializes_lowercase() {
        let json = serde_json::to_value(checklist(RiskLevel::Minimal)[3]).unwrap();
        assert_eq!(json["priority"], "low");
        assert_eq!(json["article"], "Article 96");
    }
}
