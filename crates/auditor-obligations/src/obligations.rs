//! Localized obligation strings and next steps.
//!
//! The base list depends on the tier only. Sector and transparency duties
//! are appended afterwards, so base entries always keep their positions.

use auditor_types::{AISystemInput, Language, RiskLevel, Sector};
use tracing::trace;

struct Texts {
    prohibited: &'static [&'static str],
    high: &'static [&'static str],
    limited: &'static [&'static str],
    minimal: &'static [&'static str],
    next_prohibited: &'static [&'static str],
    next_high: &'static [&'static str],
    next_limited: &'static [&'static str],
    next_minimal: &'static [&'static str],
    health_mdr: &'static str,
    financial_supervision: &'static str,
    restricted_database: &'static str,
    rights_impact: &'static str,
    interaction_notice: &'static str,
    synthetic_labelling: &'static str,
    deep_fake_disclosure: &'static str,
}

const EN: Texts = Texts {
    prohibited: &["Prohibited: Do not put on market."],
    high: &[
        "Establish a Risk Management System (Art. 9)",
        "Ensure Data Governance & Quality (Art. 10)",
        "Create Technical Documentation (Art. 11 & Annex IV)",
        "Enable Automatic Record Keeping / Logging (Art. 12)",
        "Ensure Transparency & User Instructions (Art. 13)",
        "Implement Human Oversight measures (Art. 14)",
        "Ensure Accuracy, Robustness & Cybersecurity (Art. 15)",
    ],
    limited: &["Transparency: Inform natural persons they are interacting with an AI system."],
    minimal: &[
        "General Product Safety regulations apply.",
        "Voluntary Code of Conduct recommended.",
    ],
    next_prohibited: &["Stop development immediately and consult legal counsel."],
    next_high: &[
        "Begin FRIA (Fundamental Rights Impact Assessment)",
        "Prepare Technical Documentation",
    ],
    next_limited: &["Implement user notifications in the UI"],
    next_minimal: &["Review standard safety compliance"],
    health_mdr: "Align conformity assessment with the Medical Device Regulation (EU) 2017/745",
    financial_supervision: "Coordinate market surveillance with the financial supervisory authority (Art. 74(6))",
    restricted_database: "Register in the non-public section of the EU database (Art. 49(4))",
    rights_impact: "Perform a Fundamental Rights Impact Assessment before deployment (Art. 27)",
    interaction_notice: "Transparency: Inform natural persons they are interacting with an AI system.",
    synthetic_labelling: "Mark synthetic audio, image, video or text output as artificially generated (Art. 50(2))",
    deep_fake_disclosure: "Disclose that deep-fake content has been artificially generated or manipulated (Art. 50(4))",
};

const FR: Texts = Texts {
    prohibited: &["Interdit : Ne pas mettre sur le marché."],
    high: &[
        "Établir un système de gestion des risques (Art. 9)",
        "Assurer la gouvernance et la qualité des données (Art. 10)",
        "Créer une documentation technique (Art. 11 & Annexe IV)",
        "Permettre la journalisation automatique / enregistrement (Art. 12)",
        "Assurer la transparence et les instructions aux utilisateurs (Art. 13)",
        "Mettre en œuvre des mesures de surveillance humaine (Art. 14)",
        "Assurer la précision, la robustesse et la cybersécurité (Art. 15)",
    ],
    limited: &["Transparence : Informer les personnes physiques qu'elles interagissent avec un système d'IA."],
    minimal: &[
        "Les réglementations générales sur la sécurité des produits s'appliquent.",
        "Code de conduite volontaire recommandé.",
    ],
    next_prohibited: &["Arrêter immédiatement le développement et consulter un conseiller juridique."],
    next_high: &[
        "Commencer l'EIDD (Évaluation d'Impact sur les Droits Fondamentaux)",
        "Préparer la documentation technique",
    ],
    next_limited: &["Mettre en œuvre les notifications utilisateur dans l'UI"],
    next_minimal: &["Réviser la conformité standard à la sécurité"],
    health_mdr: "Aligner l'évaluation de la conformité sur le règlement (UE) 2017/745 relatif aux dispositifs médicaux",
    financial_supervision: "Coordonner la surveillance du marché avec l'autorité de surveillance financière (Art. 74(6))",
    restricted_database: "Enregistrer le système dans la section non publique de la base de données de l'UE (Art. 49(4))",
    rights_impact: "Réaliser une analyse d'impact sur les droits fondamentaux avant le déploiement (Art. 27)",
    interaction_notice: "Transparence : Informer les personnes physiques qu'elles interagissent avec un système d'IA.",
    synthetic_labelling: "Marquer les contenus audio, image, vidéo ou texte synthétiques comme générés artificiellement (Art. 50(2))",
    deep_fake_disclosure: "Indiquer que les hypertrucages ont été générés ou manipulés artificiellement (Art. 50(4))",
};

fn texts(lang: Language) -> &'static Texts {
    match lang {
        Language::En => &EN,
        Language::Fr => &FR,
    }
}

/// The tier's obligations with no input-specific additions.
pub fn base_obligations(level: RiskLevel, lang: Language) -> Vec<String> {
    let t = texts(lang);
    let list = match level {
        RiskLevel::Prohibited => t.prohibited,
        RiskLevel::High => t.high,
        RiskLevel::Limited => t.limited,
        RiskLevel::Minimal => t.minimal,
    };
    list.iter().map(|s| s.to_string()).collect()
}

/// Obligations for a classified input, deduplicated in first-seen order.
pub fn obligations(level: RiskLevel, input: &AISystemInput, lang: Language) -> Vec<String> {
    let t = texts(lang);
    let mut list = base_obligations(level, lang);

    match level {
        RiskLevel::High => {
            for sector in &input.sectors {
                let extra = match sector {
                    Sector::Health => Some(t.health_mdr),
                    Sector::Financial => Some(t.financial_supervision),
                    Sector::LawEnforcement | Sector::Migration => Some(t.restricted_database),
                    Sector::PublicServices => Some(t.rights_impact),
                    _ => None,
                };
                if let Some(extra) = extra {
                    list.push(extra.to_string());
                }
            }
            if input.is_gen_ai || input.generates_synthetic_content {
                list.push(t.interaction_notice.to_string());
            }
            push_content_duties(&mut list, t, input);
        }
        RiskLevel::Limited => push_content_duties(&mut list, t, input),
        RiskLevel::Prohibited | RiskLevel::Minimal => {}
    }

    let before = list.len();
    let list = dedup_in_order(list);
    trace!(
        level = %level,
        count = list.len(),
        dropped = before - list.len(),
        "resolved obligations"
    );
    list
}

fn push_content_duties(list: &mut Vec<String>, t: &Texts, input: &AISystemInput) {
    if !input.generates_synthetic_content {
        return;
    }
    list.push(t.synthetic_labelling.to_string());
    if input.content_types.iter().any(|c| c.is_deep_fake_capable()) {
        list.push(t.deep_fake_disclosure.to_string());
    }
}

fn dedup_in_order(list: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(list.len());
    for item in list {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

/// Immediate actions recommended for the tier.
pub fn next_steps(level: RiskLevel, lang: Language) -> Vec<String> {
    let t = texts(lang);
    let list = match level {
        RiskLevel::Prohibited => t.next_prohibited,
        RiskLevel::High => t.next_high,
        RiskLevel::Limited => t.next_limited,
        RiskLevel::Minimal => t.next_minimal,
    };
    list.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use auditor_types::{ContentType, InputFlag};

    #[test]
    fn high_without_sectors_is_base() {
        let input = AISystemInput::default().with_flag(InputFlag::Biometrics, true);
        let list = obligations(RiskLevel::High, &input, Language::En);
        assert_eq!(list, base_obligations(RiskLevel::High, Language::En));
        assert_eq!(list.len(), 7);
        assert!(list[0].contains("Art. 9"));
    }

    #[test]
    fn high_sector_additions_follow_base() {
        let mut input = AISystemInput::default();
        input.sectors.insert(Sector::Health);
        input.sectors.insert(Sector::LawEnforcement);
        input.sectors.insert(Sector::Migration);
        let list = obligations(RiskLevel::High, &input, Language::En);
        // law enforcement and migration share one duty
        assert_eq!(list.len(), 9);
        assert!(list[7].contains("2017/745"));
        assert!(list[8].contains("Art. 49(4)"));
    }

    #[test]
    fn high_gen_ai_gets_transparency() {
        let mut input = AISystemInput::default().with_flag(InputFlag::IsGenAi, true);
        input.generates_synthetic_content = true;
        input.content_types.insert(ContentType::Video);
        let list = obligations(RiskLevel::High, &input, Language::En);
        assert_eq!(list.len(), 10);
        assert!(list[7].starts_with("Transparency"));
        assert!(list[9].contains("Art. 50(4)"));
    }

    #[test]
    fn limited_text_only_has_no_deep_fake_duty() {
        let mut input = AISystemInput::default();
        input.generates_synthetic_content = true;
        input.content_types.insert(ContentType::Text);
        let list = obligations(RiskLevel::Limited, &input, Language::En);
        assert_eq!(list.len(), 2);
        assert!(list[1].contains("Art. 50(2)"));
    }

    #[test]
    fn sectors_ignored_outside_high() {
        let mut input = AISystemInput::default();
        input.sectors.insert(Sector::Financial);
        for level in [RiskLevel::Prohibited, RiskLevel::Limited, RiskLevel::Minimal] {
            assert_eq!(
                obligations(level, &input, Language::En),
                base_obligations(level, Language::En)
            );
        }
    }

    #[test]
    fn french_texts() {
        let list = base_obligations(RiskLevel::Prohibited, Language::Fr);
        assert_eq!(list, vec!["Interdit : Ne pas mettre sur le marché.".to_string()]);
        let steps = next_steps(RiskLevel::High, Language::Fr);
        assert_eq!(steps.len(), 2);
        assert!(steps[0].starts_with("Commencer"));
    }

    #[test]
    fn dedup_keeps_first() {
        let list = dedup_in_order(vec!["a".into(), "b".into(), "a".into()]);
        assert_eq!(list, vec!["a".to_string(), "b".to_string()]);
    }
}
