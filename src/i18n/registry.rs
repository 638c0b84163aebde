//! Language registry: Single source of truth for the languages offered in
//! both pickers.
//!
//! The table is static and ordered; its order is the order the pickers show.
//! It uses a singleton pattern with `OnceLock` so every caller sees the same
//! instance.

use std::sync::OnceLock;

/// One selectable translation language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageEntry {
    /// Locale tag sent to the translation API and used as the speech locale
    /// (e.g., "en-GB", "ru-RU")
    pub code: &'static str,

    /// Human-readable name shown in the picker (e.g., "English")
    pub name: &'static str,
}

/// Global language registry singleton.
///
/// Initialized once on first access and immutable thereafter.
pub struct LanguageRegistry {
    languages: Vec<LanguageEntry>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// All languages in picker order.
    pub fn list(&self) -> &[LanguageEntry] {
        &self.languages
    }

    /// Get a language entry by its code.
    ///
    /// # Arguments
    /// * `code` - The locale tag (e.g., "en-GB")
    ///
    /// # Returns
    /// * `Some(&LanguageEntry)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageEntry> {
        self.languages.iter().find(|lang| lang.code == code)
    }
}

const fn entry(code: &'static str, name: &'static str) -> LanguageEntry {
    LanguageEntry { code, name }
}

/// Default language table, sorted by display name.
fn default_languages() -> Vec<LanguageEntry> {
    vec![
        entry("sq-AL", "Albanian"),
        entry("am-ET", "Amharic"),
        entry("ar-SA", "Arabic"),
        entry("eu-ES", "Basque"),
        entry("be-BY", "Belarusian"),
        entry("bn-IN", "Bengali"),
        entry("bs-BA", "Bosnian"),
        entry("br-FR", "Breton"),
        entry("my-MM", "Burmese"),
        entry("ca-ES", "Catalan"),
        entry("zh-CN", "Chinese (Simplified)"),
        entry("hr-HR", "Croatian"),
        entry("cs-CZ", "Czech"),
        entry("da-DK", "Danish"),
        entry("nl-NL", "Dutch"),
        entry("en-GB", "English"),
        entry("et-EE", "Estonian"),
        entry("fo-FO", "Faroese"),
        entry("fi-FI", "Finnish"),
        entry("fr-FR", "French"),
        entry("gl-ES", "Galician"),
        entry("de-DE", "German"),
        entry("el-GR", "Greek"),
        entry("gu-IN", "Gujarati"),
        entry("ha-NE", "Hausa"),
        entry("he-IL", "Hebrew"),
        entry("hi-IN", "Hindi"),
        entry("hu-HU", "Hungarian"),
        entry("is-IS", "Icelandic"),
        entry("id-ID", "Indonesian"),
        entry("it-IT", "Italian"),
        entry("ja-JP", "Japanese"),
        entry("kn-IN", "Kannada"),
        entry("kk-KZ", "Kazakh"),
        entry("km-KM", "Khmer"),
        entry("ko-KR", "Korean"),
        entry("ku-TR", "Kurdish"),
        entry("ky-KG", "Kyrgyz"),
        entry("lo-LA", "Lao"),
        entry("la-VA", "Latin"),
        entry("lv-LV", "Latvian"),
        entry("mg-MG", "Malagasy"),
        entry("ms-MY", "Malay"),
        entry("mt-MT", "Maltese"),
        entry("mi-NZ", "Maori"),
        entry("ne-NP", "Nepali"),
        entry("no-NO", "Norwegian"),
        entry("pa-IN", "Panjabi"),
        entry("ps-PK", "Pashto"),
        entry("fa-IR", "Persian"),
        entry("pl-PL", "Polish"),
        entry("pt-PT", "Portuguese"),
        entry("ro-RO", "Romanian"),
        entry("ru-RU", "Russian"),
        entry("sm-WS", "Samoan"),
        entry("sr-RS", "Serbian"),
        entry("si-LK", "Sinhala"),
        entry("sk-SK", "Slovak"),
        entry("so-SO", "Somali"),
        entry("es-ES", "Spanish"),
        entry("sw-SZ", "Swahili"),
        entry("sv-SE", "Swedish"),
        entry("tl-PH", "Tagalog"),
        entry("tg-TJ", "Tajik"),
        entry("ta-LK", "Tamil"),
        entry("te-IN", "Telugu"),
        entry("th-TH", "Thai"),
        entry("bo-CN", "Tibetan"),
        entry("to-TO", "Tongan"),
        entry("tr-TR", "Turkish"),
        entry("tk-TM", "Turkmen"),
        entry("uk-UA", "Ukrainian"),
        entry("ur-PK", "Urdu"),
        entry("uz-UZ", "Uzbek"),
        entry("vi-VN", "Vietnamese"),
        entry("cy-GB", "Welsh"),
        entry("wo-SN", "Wolof"),
        entry("xh-ZA", "Xhosa"),
        entry("yi-YD", "Yiddish"),
        entry("zu-ZA", "Zulu"),
    ]
}
