//! Platform capabilities the widget delegates to.
//!
//! Both are fire-and-forget from the widget's point of view. An error only
//! means the command could not be handed to the platform.

use anyhow::Result;

/// Write access to the system clipboard
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// Text-to-speech
pub trait SpeechSynthesizer: Send + Sync {
    /// Speak `text` with the voice for `locale` (e.g., "ru-RU").
    /// A missing voice is the platform's concern.
    fn speak(&self, text: &str, locale: &str) -> Result<()>;
}
