use serde::{Deserialize, Serialize};

/// Reader/author language. English is the canonical language: every piece of
/// localized content must exist in English, Portuguese is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Pt,
}

impl Language {
    /// Two-letter code as used in serialized content and URLs.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Pt => "pt",
        }
    }

    pub fn parse(code: &str) -> Option<Language> {
        match code {
            "en" => Some(Language::En),
            "pt" => Some(Language::Pt),
            _ => None,
        }
    }

    /// The other language (used by the EN/PT toggle in both UIs).
    pub fn toggled(&self) -> Language {
        match self {
            Language::En => Language::Pt,
            Language::Pt => Language::En,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrips_code() {
        for lang in [Language::En, Language::Pt] {
            assert_eq!(Language::parse(lang.code()), Some(lang));
        }
    }

    #[test]
    fn parse_rejects_unknown_code() {
        assert_eq!(Language::parse("de"), None);
        assert_eq!(Language::parse(""), None);
        assert_eq!(Language::parse("EN"), None);
    }

    #[test]
    fn toggled_flips_both_ways() {
        assert_eq!(Language::En.toggled(), Language::Pt);
        assert_eq!(Language::Pt.toggled(), Language::En);
    }

    #[test]
    fn serde_uses_lowercase_codes() {
        assert_eq!(serde_json::to_string(&Language::Pt).unwrap(), "\"pt\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::En);
    }
}
