use std::env;

use once_cell::sync::Lazy;
use tracing::Level;

use crate::translate::{TargetLanguage, MYMEMORY_API_URL};

pub static API_URL: Lazy<String> = Lazy::new(|| {
    env::var("TRANSLATE_API_URL").unwrap_or_else(|_| MYMEMORY_API_URL.to_string())
});

pub static LOG_LEVEL: Lazy<Level> = Lazy::new(|| {
    env::var("TRANSLATE_LOG_LEVEL")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(Level::INFO)
});

pub static LANGUAGE: Lazy<TargetLanguage> = Lazy::new(|| {
    env::var("TRANSLATE_LANGUAGE")
        .map(|choice| TargetLanguage::from_choice(&choice))
        .unwrap_or_default()
});
