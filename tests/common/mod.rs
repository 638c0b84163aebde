//! Fakes shared by the integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use text_translator_widget::i18n::Language;
use text_translator_widget::notification::{Notifier, Severity};
use text_translator_widget::platform::{Clipboard, SpeechSynthesizer};
use text_translator_widget::translation::Translator;
use text_translator_widget::widget::{Capabilities, WidgetController};

#[derive(Default)]
pub struct RecordingNotifier {
    pub seen: Mutex<Vec<(Severity, String)>>,
}

impl RecordingNotifier {
    pub fn count(&self, severity: Severity) -> usize {
        self.seen
            .lock()
            .unwrap()
            .iter()
            .filter(|(s, _)| *s == severity)
            .count()
    }

    pub fn total(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        self.seen.lock().unwrap().push((severity, message.to_string()));
    }
}

#[derive(Default)]
pub struct RecordingClipboard {
    pub writes: Mutex<Vec<String>>,
}

impl Clipboard for RecordingClipboard {
    fn write_text(&self, text: &str) -> anyhow::Result<()> {
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct SilentSpeech;

impl SpeechSynthesizer for SilentSpeech {
    fn speak(&self, _text: &str, _locale: &str) -> anyhow::Result<()> {
        Ok(())
    }
}

pub struct Widget {
    pub controller: WidgetController,
    pub notifier: Arc<RecordingNotifier>,
    pub clipboard: Arc<RecordingClipboard>,
}

/// Controller with recording fakes, English -> Russian
pub fn widget(translator: Arc<dyn Translator>) -> Widget {
    let notifier = Arc::new(RecordingNotifier::default());
    let clipboard = Arc::new(RecordingClipboard::default());
    let caps = Capabilities {
        translator,
        notifier: notifier.clone(),
        clipboard: clipboard.clone(),
        speech: Arc::new(SilentSpeech),
    };
    Widget {
        controller: WidgetController::new(caps, Language::ENGLISH, Language::RUSSIAN),
        notifier,
        clipboard,
    }
}
