//! Justification templates.

use auditor_types::Language;

pub(crate) fn prohibited_practice(lang: Language, practice: &str, reference: &str) -> String {
    match lang {
        Language::En => format!("Detected prohibited practice '{}' ({}).", practice, reference),
        Language::Fr => format!("Pratique interdite détectée '{}' ({}).", practice, reference),
    }
}

pub(crate) fn prohibited_keyword(lang: Language, keyword: &str) -> String {
    match lang {
        Language::En => format!(
            "Detected keyword '{}' related to prohibited practices (Article 5).",
            keyword
        ),
        Language::Fr => format!(
            "Mot-clé détecté '{}' lié à des pratiques prohibées (Article 5).",
            keyword
        ),
    }
}

pub(crate) fn high_risk(lang: Language, refs: &str) -> String {
    match lang {
        Language::En => format!("System classified as High Risk due to matches in: {}.", refs),
        Language::Fr => format!(
            "Système classé à Haut Risque en raison de correspondances dans : {}.",
            refs
        ),
    }
}

pub(crate) fn limited(lang: Language, trigger: &str) -> String {
    match lang {
        Language::En => format!(
            "System involves interaction or content generation ('{}'). Transparency obligations apply.",
            trigger
        ),
        Language::Fr => format!(
            "Le système implique une interaction ou une génération de contenu ('{}'). Des obligations de transparence s'appliquent.",
            trigger
        ),
    }
}

pub(crate) fn minimal(lang: Language) -> String {
    match lang {
        Language::En => "No specific high-risk or prohibited triggers found.".into(),
        Language::Fr => {
            "Aucun déclencheur spécifique de haut risque ou d'interdiction n'a été trouvé.".into()
        }
    }
}

pub(crate) fn health_exemption(lang: Language) -> String {
    match lang {
        Language::En => "Health-domain system limited to administrative tasks without influence on diagnosis: Annex III, 5 does not apply.".into(),
        Language::Fr => "Système du domaine de la santé limité à des tâches administratives sans influence sur le diagnostic : l'annexe III, 5 ne s'applique pas.".into(),
    }
}

pub(crate) fn transparency_also_applies(lang: Language) -> String {
    match lang {
        Language::En => "Article 50 transparency obligations also apply.".into(),
        Language::Fr => "Les obligations de transparence de l'article 50 s'appliquent également.".into(),
    }
}

pub(crate) fn keyword_reason(lang: Language, keyword: &str) -> String {
    match lang {
        Language::En => format!("Keyword match: {}", keyword),
        Language::Fr => format!("Correspondance de mot-clé : {}", keyword),
    }
}

pub(crate) fn keyword_category(lang: Language) -> &'static str {
    match lang {
        Language::En => "Prohibited",
        Language::Fr => "Prohibé",
    }
}
