//! Suspicious-term detection.
//!
//! Plain substring matching against fixed per-language phrase lists. The
//! result is advisory: the engine only consults it when escalation is
//! switched on in [`EngineConfig`](crate::EngineConfig).

use auditor_types::{AISystemInput, Language};
use tracing::debug;

const EN_TERMS: &[&str] = &[
    "social scoring",
    "social credit",
    "citizen scoring",
    "behavior scoring",
    "subliminal",
    "subconscious manipulation",
    "hidden manipulation",
    "exploit vulnerabilities",
    "vulnerable groups",
    "predictive policing",
    "crime prediction",
    "risk profiling",
    "reputation system",
];

const FR_TERMS: &[&str] = &[
    "notation sociale",
    "crédit social",
    "score citoyen",
    "notation comportement",
    "manipulation subliminale",
    "manipulation inconsciente",
    "subliminal",
    "exploiter vulnérabilités",
    "groupes vulnérables",
    "police prédictive",
    "prédiction crime",
    "profilage risque",
    "système réputation",
];

fn terms_for(lang: Language) -> &'static [&'static str] {
    match lang {
        Language::En => EN_TERMS,
        Language::Fr => FR_TERMS,
    }
}

/// Phrases of the locale's list found in `text`, in list order.
///
/// An unsupported locale yields no matches.
pub fn detect_suspicious_terms(text: &str, locale: &str) -> Vec<&'static str> {
    let Some(lang) = Language::from_code(locale) else {
        debug!(locale, "no suspicious-term list for locale");
        return Vec::new();
    };

    let haystack = text.to_lowercase();
    terms_for(lang)
        .iter()
        .copied()
        .filter(|term| haystack.contains(term))
        .collect()
}

/// Scan `description` and `intended_purpose` in the input's language.
///
/// An empty `language` field is read as English.
pub fn detect_in_input(input: &AISystemInput) -> Vec<&'static str> {
    let locale = match input.language.trim() {
        "" => Language::En.code(),
        code => code,
    };
    detect_suspicious_terms(&input.text_corpus(), locale)
}
