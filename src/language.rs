/*!
 * Language utilities for the translation session.
 *
 * The translator exposes a fixed set of source languages and a single,
 * non-configurable target language. Tags are ISO 639-1 (2-letter) codes,
 * cross-checked against the isolang database.
 */

use std::fmt;
use std::str::FromStr;

use isolang::Language;
use serde::{Deserialize, Serialize};

use crate::errors::LanguageError;

/// Fixed target language code (ISO 639-1)
pub const TARGET_LANGUAGE: &str = "en";

/// A supported source language for translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceLanguage {
    /// Korean ("ko")
    Korean,
}

impl SourceLanguage {
    /// All source languages the session currently supports
    pub const ALL: &'static [SourceLanguage] = &[SourceLanguage::Korean];

    /// ISO 639-1 code for this language
    pub fn code(&self) -> &'static str {
        match self {
            SourceLanguage::Korean => "ko",
        }
    }

    /// English display name for UI labels
    pub fn display_name(&self) -> &'static str {
        Language::from_639_1(self.code())
            .map(|lang| lang.to_name())
            .unwrap_or("Unknown")
    }
}

impl Default for SourceLanguage {
    fn default() -> Self {
        SourceLanguage::Korean
    }
}

impl fmt::Display for SourceLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for SourceLanguage {
    type Err = LanguageError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let normalized = tag.trim().to_lowercase();

        // Reject anything that is not a real ISO 639-1 code before checking support
        if Language::from_639_1(&normalized).is_none() {
            return Err(LanguageError::Unsupported(format!(
                "'{}' is not an ISO 639-1 language code",
                tag.trim()
            )));
        }

        SourceLanguage::ALL
            .iter()
            .copied()
            .find(|lang| lang.code() == normalized)
            .ok_or_else(|| {
                LanguageError::Unsupported(format!(
                    "'{}' is not in the supported source set",
                    normalized
                ))
            })
    }
}
