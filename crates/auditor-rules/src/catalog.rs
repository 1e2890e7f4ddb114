//! The rule table.
//!
//! Rules are grouped by tier in descending precedence; within a tier the
//! order is the order matched rules are reported in.

use std::collections::HashSet;
use std::fmt;

use auditor_types::{AISystemInput, Language, RiskLevel};
use tracing::debug;

use crate::error::{RulesError, RulesResult};

/// A string available in every supported output language.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Localized {
    pub en: &'static str,
    pub fr: &'static str,
}

impl Localized {
    pub const fn new(en: &'static str, fr: &'static str) -> Self {
        Self { en, fr }
    }

    pub fn get(&self, lang: Language) -> &'static str {
        match lang {
            Language::En => self.en,
            Language::Fr => self.fr,
        }
    }
}

/// Immutable catalog entry.
#[derive(Clone)]
pub struct Rule {
    pub id: &'static str,
    pub tier: RiskLevel,
    /// Legal reference, e.g. "Annex III, 4".
    pub reference: &'static str,
    pub category: Localized,
    pub reason: Localized,
    predicate: fn(&AISystemInput) -> bool,
}

impl Rule {
    pub fn new(
        id: &'static str,
        tier: RiskLevel,
        reference: &'static str,
        category: Localized,
        reason: Localized,
        predicate: fn(&AISystemInput) -> bool,
    ) -> Self {
        Self {
            id,
            tier,
            reference,
            category,
            reason,
            predicate,
        }
    }

    pub fn matches(&self, input: &AISystemInput) -> bool {
        (self.predicate)(input)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("tier", &self.tier)
            .field("reference", &self.reference)
            .finish_non_exhaustive()
    }
}

/// Validated, read-only set of rules.
#[derive(Clone, Debug)]
pub struct RuleCatalog {
    rules: Vec<Rule>,
}

impl RuleCatalog {
    /// Validate and wrap a rule list.
    ///
    /// The list must be non-empty, have unique ids, be ordered by descending
    /// tier, never target Minimal, and cover Prohibited, High and Limited.
    pub fn new(rules: Vec<Rule>) -> RulesResult<Self> {
        if rules.is_empty() {
            return Err(RulesError::EmptyCatalog);
        }

        let mut ids = HashSet::new();
        let mut previous = RiskLevel::Prohibited;
        for rule in &rules {
            if !ids.insert(rule.id) {
                return Err(RulesError::DuplicateRuleId(rule.id.to_string()));
            }
            if rule.tier == RiskLevel::Minimal {
                return Err(RulesError::MinimalTarget(rule.id.to_string()));
            }
            if rule.tier > previous {
                return Err(RulesError::OutOfOrder {
                    id: rule.id.to_string(),
                    tier: rule.tier,
                });
            }
            previous = rule.tier;
        }

        for tier in [RiskLevel::Prohibited, RiskLevel::High, RiskLevel::Limited] {
            if !rules.iter().any(|r| r.tier == tier) {
                return Err(RulesError::MissingTier(tier));
            }
        }

        debug!(rules = rules.len(), "rule catalog validated");
        Ok(Self { rules })
    }

    /// The AI Act rule set.
    pub fn builtin() -> RulesResult<Self> {
        Self::new(builtin_rules())
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rules of one tier, in catalog order.
    pub fn tier(&self, tier: RiskLevel) -> impl Iterator<Item = &Rule> {
        self.rules.iter().filter(move |r| r.tier == tier)
    }

    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn builtin_rules() -> Vec<Rule> {
    use RiskLevel::{High, Limited, Prohibited};

    vec![
        Rule::new(
            "ART5_1A",
            Prohibited,
            "Article 5(1)(a)",
            Localized::new("Manipulative Techniques", "Techniques manipulatrices"),
            Localized::new(
                "Deploys subliminal, manipulative or deceptive techniques that distort behaviour",
                "Recourt à des techniques subliminales, manipulatrices ou trompeuses qui altèrent le comportement",
            ),
            |i| i.manipulative_techniques,
        ),
        Rule::new(
            "ART5_1B",
            Prohibited,
            "Article 5(1)(b)",
            Localized::new("Exploitation of Vulnerabilities", "Exploitation des vulnérabilités"),
            Localized::new(
                "Exploits vulnerabilities due to age, disability or social or economic situation",
                "Exploite des vulnérabilités liées à l'âge, au handicap ou à la situation sociale ou économique",
            ),
            |i| i.exploits_vulnerabilities,
        ),
        Rule::new(
            "ART5_1C",
            Prohibited,
            "Article 5(1)(c)",
            Localized::new("Social Scoring", "Notation sociale"),
            Localized::new(
                "Evaluates or classifies persons based on social behaviour or personal traits",
                "Évalue ou classe des personnes selon leur comportement social ou leurs caractéristiques personnelles",
            ),
            |i| i.social_scoring,
        ),
        Rule::new(
            "ART5_1H",
            Prohibited,
            "Article 5(1)(h)",
            Localized::new(
                "Real-time Remote Biometric Identification",
                "Identification biométrique à distance en temps réel",
            ),
            Localized::new(
                "Real-time remote biometric identification in publicly accessible spaces",
                "Identification biométrique à distance en temps réel dans des espaces accessibles au public",
            ),
            |i| i.realtime_remote_biometrics,
        ),
        Rule::new(
            "ANNEX_I_SAFETY",
            High,
            "Article 6(1), Annex I",
            Localized::new("Safety Component", "Composant de sécurité"),
            Localized::new(
                "Safety component of a product covered by Annex I harmonisation legislation",
                "Composant de sécurité d'un produit couvert par la législation d'harmonisation de l'annexe I",
            ),
            |i| i.is_safety_component,
        ),
        Rule::new(
            "ANNEX_III_1",
            High,
            "Annex III, 1",
            Localized::new("Biometrics", "Biométrie"),
            Localized::new(
                "Remote biometric identification, categorisation or emotion recognition",
                "Identification biométrique à distance, catégorisation ou reconnaissance des émotions",
            ),
            |i| i.biometrics,
        ),
        Rule::new(
            "ANNEX_III_2",
            High,
            "Annex III, 2",
            Localized::new("Critical Infrastructure", "Infrastructures critiques"),
            Localized::new(
                "Safety component in the management of critical infrastructure",
                "Composant de sécurité dans la gestion d'infrastructures critiques",
            ),
            |i| i.infrastructure,
        ),
        Rule::new(
            "ANNEX_III_3",
            High,
            "Annex III, 3",
            Localized::new("Education and Vocational Training", "Éducation et formation professionnelle"),
            Localized::new(
                "Determines access to education or evaluates learning outcomes",
                "Détermine l'accès à l'éducation ou évalue les acquis d'apprentissage",
            ),
            |i| i.education,
        ),
        Rule::new(
            "ANNEX_III_4",
            High,
            "Annex III, 4",
            Localized::new("Employment and Workers Management", "Emploi et gestion des travailleurs"),
            Localized::new(
                "Recruitment, selection, promotion or monitoring of workers",
                "Recrutement, sélection, promotion ou surveillance de travailleurs",
            ),
            |i| i.employment,
        ),
        Rule::new(
            "ANNEX_III_5",
            High,
            "Annex III, 5",
            Localized::new("Essential Services", "Services essentiels"),
            Localized::new(
                "Evaluates access to essential private or public services and benefits",
                "Évalue l'accès à des services et prestations essentiels, privés ou publics",
            ),
            |i| i.services,
        ),
        Rule::new(
            "ANNEX_III_5_HEALTH",
            High,
            "Annex III, 5(a)",
            Localized::new("Health", "Santé"),
            Localized::new(
                "Influences medical diagnosis or access to healthcare",
                "Influence le diagnostic médical ou l'accès aux soins",
            ),
            |i| i.health_domain && i.influences_diagnosis,
        ),
        Rule::new(
            "ANNEX_III_6",
            High,
            "Annex III, 6",
            Localized::new("Law Enforcement", "Application de la loi"),
            Localized::new(
                "Used by or on behalf of law enforcement authorities",
                "Utilisé par les autorités répressives ou pour leur compte",
            ),
            |i| i.law_enforcement,
        ),
        Rule::new(
            "ANNEX_III_7",
            High,
            "Annex III, 7",
            Localized::new(
                "Migration, Asylum and Border Control",
                "Migration, asile et contrôle aux frontières",
            ),
            Localized::new(
                "Assesses risks or applications in migration, asylum or border control",
                "Évalue des risques ou des demandes en matière de migration, d'asile ou de contrôle aux frontières",
            ),
            |i| i.migration,
        ),
        Rule::new(
            "ANNEX_III_8",
            High,
            "Annex III, 8",
            Localized::new("Administration of Justice", "Administration de la justice"),
            Localized::new(
                "Assists judicial authorities or influences democratic processes",
                "Assiste les autorités judiciaires ou influence des processus démocratiques",
            ),
            |i| i.justice,
        ),
        Rule::new(
            "ART50_1",
            Limited,
            "Article 50(1)",
            Localized::new("Generative AI / Chatbot", "IA générative / Chatbot"),
            Localized::new(
                "Interacts directly with natural persons or generates content",
                "Interagit directement avec des personnes physiques ou génère du contenu",
            ),
            |i| i.is_gen_ai,
        ),
        Rule::new(
            "ART50_2",
            Limited,
            "Article 50(2)",
            Localized::new("Synthetic Content", "Contenu synthétique"),
            Localized::new(
                "Generates synthetic audio, image, video or text content",
                "Génère des contenus audio, image, vidéo ou texte synthétiques",
            ),
            |i| i.generates_synthetic_content,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(id: &'static str, tier: RiskLevel) -> Rule {
        Rule::new(
            id,
            tier,
            "ref",
            Localized::new("c", "c"),
            Localized::new("r", "r"),
            |_| false,
        )
    }

    #[test]
    fn builtin_is_valid() {
        let catalog = RuleCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), 16);
        assert_eq!(catalog.tier(RiskLevel::Prohibited).count(), 4);
        assert_eq!(catalog.tier(RiskLevel::High).count(), 10);
        assert_eq!(catalog.tier(RiskLevel::Limited).count(), 2);
        assert_eq!(catalog.rules()[0].id, "ART5_1A");
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(RuleCatalog::new(vec![]).unwrap_err(), RulesError::EmptyCatalog);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let rules = vec![
            rule("A", RiskLevel::Prohibited),
            rule("A", RiskLevel::High),
            rule("B", RiskLevel::Limited),
        ];
        assert_eq!(
            RuleCatalog::new(rules).unwrap_err(),
            RulesError::DuplicateRuleId("A".into())
        );
    }

    #[test]
    fn rejects_minimal_target() {
        let rules = vec![rule("A", RiskLevel::Prohibited), rule("M", RiskLevel::Minimal)];
        assert!(matches!(
            RuleCatalog::new(rules),
            Err(RulesError::MinimalTarget(id)) if id == "M"
        ));
    }

    #[test]
    fn rejects_missing_tier() {
        let rules = vec![rule("A", RiskLevel::Prohibited), rule("B", RiskLevel::High)];
        assert_eq!(
            RuleCatalog::new(rules).unwrap_err(),
            RulesError::MissingTier(RiskLevel::Limited)
        );
    }

    #[test]
    fn rejects_out_of_order() {
        let rules = vec![
            rule("H", RiskLevel::High),
            rule("P", RiskLevel::Prohibited),
            rule("L", RiskLevel::Limited),
        ];
        assert!(matches!(
            RuleCatalog::new(rules),
            Err(RulesError::OutOfOrder { .. })
        ));
    }

    #[test]
    fn health_rule_needs_both_flags() {
        let catalog = RuleCatalog::builtin().unwrap();
        let health = catalog.get("ANNEX_III_5_HEALTH").unwrap();
        let mut input = AISystemInput::default();
        input.health_domain = true;
        assert!(!health.matches(&input));
        input.influences_diagnosis = true;
        assert!(health.matches(&input));
    }

    #[test]
    fn localized_lookup() {
        let catalog = RuleCatalog::builtin().unwrap();
        let rule = catalog.get("ART5_1C").unwrap();
        assert_eq!(rule.category.get(Language::Fr), "Notation sociale");
        assert_eq!(rule.category.get(Language::En), "Social Scoring");
    }
}
