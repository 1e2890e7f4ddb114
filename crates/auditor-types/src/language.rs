use serde::{Deserialize, Serialize};

/// Output language for justification, obligation and question strings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    /// Parse an ISO 639-1 code ("en", "fr-FR", "FR").
    ///
    /// Returns `None` for unsupported languages; callers decide whether to
    /// fall back (engine output) or to return nothing (term detection).
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.trim().split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "fr" => Some(Language::Fr),
            _ => None,
        }
    }

    /// Like [`Language::from_code`] but falls back to English.
    pub fn resolve(code: &str) -> Self {
        Self::from_code(code).unwrap_or_default()
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_region_tags() {
        assert_eq!(Language::from_code("fr-FR"), Some(Language::Fr));
        assert_eq!(Language::from_code("EN"), Some(Language::En));
        assert_eq!(Language::from_code("es"), None);
    }

    #[test]
    fn resolve_falls_back_to_english() {
        assert_eq!(Language::resolve("es"), Language::En);
        assert_eq!(Language::resolve(""), Language::En);
        assert_eq!(Language::resolve("fr"), Language::Fr);
    }
}
