//! Bilingual content resolution.
//!
//! English content is mandatory, Portuguese optional. Resolution is always
//! whole-value: a caller gets either the complete Portuguese value or the
//! complete English one, never a field-by-field mix.

use crate::models::language::Language;

/// Pick the localized value for `lang`, falling back to English.
pub fn pick<'a, T: ?Sized>(lang: Language, en: &'a T, pt: Option<&'a T>) -> &'a T {
    match (lang, pt) {
        (Language::Pt, Some(pt)) => pt,
        _ => en,
    }
}

/// Same as [`pick`] for values that are optional in both languages, such as
/// section headings and chapter summaries. A missing Portuguese value falls
/// back to the English one even when the requested language is Portuguese.
pub fn pick_optional<'a, T: ?Sized>(
    lang: Language,
    en: Option<&'a T>,
    pt: Option<&'a T>,
) -> Option<&'a T> {
    match (lang, pt) {
        (Language::Pt, Some(pt)) => Some(pt),
        _ => en,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pt_present_wins_for_pt() {
        assert_eq!(pick(Language::Pt, "hello", Some("olá")), "olá");
    }

    #[test]
    fn pt_absent_falls_back_to_en() {
        assert_eq!(pick::<str>(Language::Pt, "hello", None), "hello");
    }

    #[test]
    fn en_ignores_translation() {
        assert_eq!(pick(Language::En, "hello", Some("olá")), "hello");
    }

    #[test]
    fn optional_falls_back_through_missing_pt() {
        assert_eq!(
            pick_optional(Language::Pt, Some("heading"), None),
            Some("heading")
        );
        assert_eq!(pick_optional::<str>(Language::Pt, None, None), None);
        assert_eq!(
            pick_optional(Language::Pt, None, Some("título")),
            Some("título")
        );
    }
}
