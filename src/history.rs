use chrono::prelude::*;
use uuid::Uuid;

/// A completed translation. Fields are fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationRecord {
    id: Uuid,
    original_text: String,
    translated_text: String,
    timestamp: DateTime<Utc>,
}

impl TranslationRecord {
    pub fn new(original_text: &str, translated_text: &str, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            original_text: original_text.to_string(),
            translated_text: translated_text.to_string(),
            timestamp,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    pub fn translated_text(&self) -> &str {
        &self.translated_text
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Session-scoped history, oldest first. Nothing is ever removed.
#[derive(Debug, Default)]
pub struct HistoryStore {
    records: Vec<TranslationRecord>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: TranslationRecord) {
        self.records.push(record);
    }

    pub fn all(&self) -> &[TranslationRecord] {
        &self.records
    }
}
