use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Language the table resolution falls back to when the requested language is
/// not present.
pub const DEFAULT_LANGUAGE: &str = "EN";

/// The translation table shipped with the crate, covering EN/FR/IT/ES/DE.
const BUILTIN: &str = include_str!("../translations.json");

/// File-backed mapping from language code to a table of invoice label keys.
#[derive(Clone, Debug, Deserialize)]
#[serde(transparent)]
pub struct Translations {
    languages: HashMap<String, HashMap<String, String>>,
}

impl Translations {
    /// Load the translation table bundled with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN)
    }

    /// Parse a translation table from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let translations: Self = serde_json::from_str(json)?;
        debug!(languages = translations.languages.len(), "loaded translation table");
        Ok(translations)
    }

    /// Load a translation table from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The language codes available in this table, in no particular order.
    #[must_use]
    pub fn languages(&self) -> Vec<&str> {
        self.languages.keys().map(String::as_str).collect()
    }

    /// Resolve the table for `language`, falling back to [`DEFAULT_LANGUAGE`].
    ///
    /// Only fails when the fallback table itself is missing.
    pub fn resolve<'a>(&'a self, language: &str) -> Result<LanguageTable<'a>> {
        if let Some(entries) = self.languages.get(language) {
            return Ok(LanguageTable {
                language: language.to_string(),
                entries,
            });
        }
        debug!(%language, fallback = DEFAULT_LANGUAGE, "language not found, using fallback");
        self.languages
            .get(DEFAULT_LANGUAGE)
            .map(|entries| LanguageTable {
                language: DEFAULT_LANGUAGE.to_string(),
                entries,
            })
            .ok_or_else(|| Error::MissingLanguage {
                language: language.to_string(),
                fallback: DEFAULT_LANGUAGE.to_string(),
            })
    }
}

/// The resolved label table for one language.
#[derive(Clone, Debug)]
pub struct LanguageTable<'a> {
    language: String,
    entries: &'a HashMap<String, String>,
}

impl LanguageTable<'_> {
    /// The language this table was resolved to (the fallback language when the
    /// requested one was absent).
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Look up a label by key. A missing key is a hard
    /// [`Error::MissingTranslation`] fault, never an empty label.
    pub fn get(&self, key: &str) -> Result<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| Error::MissingTranslation {
                language: self.language.clone(),
                key: key.to_string(),
            })
    }
}
