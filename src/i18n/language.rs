//! Language type: Validated language selection.
//!
//! A `Language` can only be built from a code the registry knows, so a
//! picker selection never holds an unknown code.

use crate::i18n::LanguageRegistry;
use anyhow::{bail, Result};
use serde::{Serialize, Serializer};
use std::fmt;

/// A validated language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// Locale tag (e.g., "en-GB", "ru-RU")
    code: &'static str,
}

impl Language {
    /// English (Great Britain), the default source language.
    pub const ENGLISH: Language = Language { code: "en-GB" };

    /// Russian, the default target language.
    pub const RUSSIAN: Language = Language { code: "ru-RU" };

    /// Create a Language from a locale tag.
    ///
    /// # Returns
    /// * `Ok(Language)` if the registry contains the code
    /// * `Err` if the code is unknown
    ///
    /// # Example
    /// ```ignore
    /// let french = Language::from_code("fr-FR")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Language> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(entry) => Ok(Language { code: entry.code }),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// The locale tag, used both in the API language pair and as the
    /// speech locale.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Display name (e.g., "English").
    pub fn name(&self) -> &'static str {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .map_or(self.code, |entry| entry.name)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}
