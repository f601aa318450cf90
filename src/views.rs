use askama::Template;

use crate::history::TranslationRecord;

#[derive(Template)]
#[template(path = "history.txt")]
pub struct SavedTranslations<'a> {
    pub records: &'a [TranslationRecord],
}

#[cfg(test)]
mod tests {
    use chrono::prelude::*;

    use super::*;

    #[test]
    fn empty_history_has_placeholder() {
        let rendered = SavedTranslations { records: &[] }.render().unwrap();
        assert!(rendered.contains("Saved Translations (0)"));
        assert!(rendered.contains("No saved translations yet."));
    }

    #[test]
    fn entries_render_oldest_first() {
        let at = Utc.with_ymd_and_hms(2024, 11, 11, 9, 30, 0).unwrap();
        let records = [
            TranslationRecord::new("Hello", "Bonjour", at),
            TranslationRecord::new("Thank you", "Merci", at),
        ];

        let rendered = SavedTranslations { records: &records }.render().unwrap();

        let first = rendered.find("1. Hello").unwrap();
        let second = rendered.find("2. Thank you").unwrap();
        assert!(first < second);
        assert!(rendered.contains("   Merci"));
        assert!(rendered.contains("Nov 11, 2024"));
        assert!(!rendered.contains("No saved translations yet."));
    }

    #[test]
    fn single_digit_days_are_not_padded() {
        let at = Utc.with_ymd_and_hms(2024, 11, 1, 8, 0, 0).unwrap();
        let records = [TranslationRecord::new("Hello", "Bonjour", at)];

        let rendered = SavedTranslations { records: &records }.render().unwrap();

        assert!(rendered.contains("   Nov 1, 2024"));
        assert!(!rendered.contains("Nov  1"));
    }
}
