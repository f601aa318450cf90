use std::fmt;

mod mymemory;

pub use mymemory::{MyMemoryTranslate, TranslationError, MYMEMORY_API_URL};

/// Languages the front-end offers. Translation is always from English.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TargetLanguage {
    #[default]
    French,
    Spanish,
    Italian,
}

impl TargetLanguage {
    /// Accepts a language code or English name. Anything else falls back to French.
    pub fn from_choice(choice: &str) -> Self {
        match choice.trim().to_lowercase().as_str() {
            "es" | "spanish" => Self::Spanish,
            "it" | "italian" => Self::Italian,
            _ => Self::French,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::French => "fr",
            Self::Spanish => "es",
            Self::Italian => "it",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::French => "French",
            Self::Spanish => "Spanish",
            Self::Italian => "Italian",
        }
    }

    pub fn langpair(&self) -> String {
        format!("en|{}", self.code())
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}
