use crate::i18n::Language;
use anyhow::{bail, Context, Result};

pub const DEFAULT_TRANSLATION_API_URL: &str = "https://api.mymemory.translated.net/get";

#[derive(Debug, Clone)]
pub struct Config {
    // Translation API
    pub translation_api_url: String,

    // Picker defaults
    pub default_source_language: Language,
    pub default_target_language: Language,

    // Server
    pub host: String,
    pub port: u16,
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let default_source_language = language_from_env("DEFAULT_SOURCE_LANG", Language::ENGLISH)?;
        let default_target_language = language_from_env("DEFAULT_TARGET_LANG", Language::RUSSIAN)?;

        if default_source_language == default_target_language {
            bail!(
                "DEFAULT_SOURCE_LANG and DEFAULT_TARGET_LANG must differ (both are {})",
                default_source_language
            );
        }

        let port = match std::env::var("PORT") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got '{}'", v))?,
            Err(_) => 8080,
        };

        Ok(Self {
            translation_api_url: std::env::var("TRANSLATION_API_URL")
                .unwrap_or_else(|_| DEFAULT_TRANSLATION_API_URL.to_string()),
            default_source_language,
            default_target_language,
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            static_dir: std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()),
        })
    }

    /// Address the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn language_from_env(var: &str, default: Language) -> Result<Language> {
    match std::env::var(var) {
        Ok(code) => Language::from_code(&code).with_context(|| format!("{} is invalid", var)),
        Err(_) => Ok(default),
    }
}
