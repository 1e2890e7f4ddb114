//! Classification Engine.
//!
//! Evaluates every catalog rule against the input, then walks the tiers in
//! precedence order and resolves to the first tier with a match. Matches of
//! lower tiers are still reported; they only miss out on confidence.

use std::sync::Arc;

use auditor_types::{
    AISystemInput, AnalysisResult, ContextCompleteness, Language, MatchedRule, RiskLevel,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::{Rule, RuleCatalog};
use crate::confidence::confidence_score;
use crate::error::RulesResult;
use crate::messages;
use crate::terms::detect_in_input;

/// Rule id reported for an escalated suspicious term.
pub const TERM_RULE_ID: &str = "ART5_TERMS";

/// Engine switches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Treat detected suspicious terms as Prohibited-tier matches.
    #[serde(default)]
    pub escalate_suspicious_terms: bool,
}

/// Rule-based risk classifier. Cheap to clone; the catalog is shared.
#[derive(Clone, Debug)]
pub struct ClassificationEngine {
    catalog: Arc<RuleCatalog>,
    config: EngineConfig,
}

#[derive(Clone, Copy)]
enum Trigger<'a> {
    Rule(&'a Rule),
    Term(&'static str),
}

struct Hit<'a> {
    tier: RiskLevel,
    trigger: Trigger<'a>,
}

impl ClassificationEngine {
    /// Engine over the builtin catalog with default config.
    pub fn builtin() -> RulesResult<Self> {
        Ok(Self::with_catalog(RuleCatalog::builtin()?))
    }

    pub fn with_catalog(catalog: RuleCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config: EngineConfig::default(),
        }
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Classify an input. Total over every input shape.
    pub fn classify(&self, input: &AISystemInput) -> AnalysisResult {
        let lang = Language::resolve(&input.language);
        let hits = self.collect_hits(input);

        let level = RiskLevel::PRECEDENCE
            .into_iter()
            .find(|tier| hits.iter().any(|h| h.tier == *tier))
            .unwrap_or(RiskLevel::Minimal);
        let winning: Vec<&Hit<'_>> = hits.iter().filter(|h| h.tier == level).collect();

        let mut justification = headline(level, &winning, lang);
        if is_health_exempt(input) {
            justification.push(messages::health_exemption(lang));
        }
        if level > RiskLevel::Limited && hits.iter().any(|h| h.tier == RiskLevel::Limited) {
            justification.push(messages::transparency_also_applies(lang));
        }

        let completeness = ContextCompleteness::of(input);
        let risk_score = confidence_score(level, winning.len(), completeness);

        let matched_rules = hits.iter().map(|h| record(h, lang)).collect();

        if level == RiskLevel::Prohibited {
            warn!(
                system = %input.name,
                matches = winning.len(),
                "prohibited practice detected"
            );
        }
        debug!(
            system = %input.name,
            level = %level,
            score = risk_score,
            matches = hits.len(),
            missing_context = completeness.missing(),
            "classified"
        );

        AnalysisResult {
            risk_level: level,
            risk_score,
            justification,
            matched_rules,
            obligations: auditor_obligations::obligations(level, input, lang),
            next_steps: auditor_obligations::next_steps(level, lang),
        }
    }

    fn collect_hits<'a>(&'a self, input: &AISystemInput) -> Vec<Hit<'a>> {
        let mut hits = Vec::new();
        for tier in RiskLevel::PRECEDENCE {
            hits.extend(
                self.catalog
                    .tier(tier)
                    .filter(|rule| rule.matches(input))
                    .map(|rule| Hit {
                        tier,
                        trigger: Trigger::Rule(rule),
                    }),
            );
            if tier == RiskLevel::Prohibited && self.config.escalate_suspicious_terms {
                hits.extend(detect_in_input(input).into_iter().map(|term| Hit {
                    tier,
                    trigger: Trigger::Term(term),
                }));
            }
        }
        hits
    }
}

fn is_health_exempt(input: &AISystemInput) -> bool {
    input.health_domain && input.is_administrative_only && !input.influences_diagnosis
}

fn headline(level: RiskLevel, winning: &[&Hit<'_>], lang: Language) -> Vec<String> {
    match level {
        RiskLevel::Prohibited => winning
            .iter()
            .map(|hit| match hit.trigger {
                Trigger::Rule(rule) => {
                    messages::prohibited_practice(lang, rule.category.get(lang), rule.reference)
                }
                Trigger::Term(term) => messages::prohibited_keyword(lang, term),
            })
            .collect(),
        RiskLevel::High => {
            let mut refs: Vec<&str> = Vec::new();
            for hit in winning {
                if let Trigger::Rule(rule) = hit.trigger {
                    if !refs.contains(&rule.reference) {
                        refs.push(rule.reference);
                    }
                }
            }
            vec![messages::high_risk(lang, &refs.join(", "))]
        }
        RiskLevel::Limited => winning
            .iter()
            .filter_map(|hit| match hit.trigger {
                Trigger::Rule(rule) => Some(messages::limited(lang, rule.category.get(lang))),
                Trigger::Term(_) => None,
            })
            .collect(),
        RiskLevel::Minimal => vec![messages::minimal(lang)],
    }
}

fn record(hit: &Hit<'_>, lang: Language) -> MatchedRule {
    match hit.trigger {
        Trigger::Rule(rule) => MatchedRule {
            rule_id: rule.id.to_string(),
            category: rule.category.get(lang).to_string(),
            reason: rule.reason.get(lang).to_string(),
            reference: rule.reference.to_string(),
        },
        Trigger::Term(term) => MatchedRule {
            rule_id: TERM_RULE_ID.to_string(),
            category: messages::keyword_category(lang).to_string(),
            reason: messages::keyword_reason(lang, term),
            reference: "Article 5".to_string(),
        },
    }
}
