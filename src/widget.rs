//! Widget controller: owns the widget state and runs the user-triggered
//! operations (submit, exchange, copy, speak) against injected capabilities.

use crate::i18n::{Language, WIDGET_STRINGS};
use crate::notification::{Notifier, Severity};
use crate::platform::{Clipboard, SpeechSynthesizer};
use crate::translation::{TranslationError, TranslationRequest, TranslationResult, Translator};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Which half of the widget a control belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Source,
    Target,
}

/// Submit lifecycle. `Success` and `Failed` are transient and settle back
/// to `Idle` inside `finish_submit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitPhase {
    Idle,
    Loading,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetState {
    pub source_language: Language,
    pub target_language: Language,
    pub input: String,
    pub output: String,
    pub submit_label: &'static str,
    pub phase: SubmitPhase,
}

impl WidgetState {
    pub fn new(source_language: Language, target_language: Language) -> Self {
        Self {
            source_language,
            target_language,
            input: String::new(),
            output: String::new(),
            submit_label: WIDGET_STRINGS.submit_idle,
            phase: SubmitPhase::Idle,
        }
    }

    pub fn text(&self, side: Side) -> &str {
        match side {
            Side::Source => &self.input,
            Side::Target => &self.output,
        }
    }

    pub fn language(&self, side: Side) -> Language {
        match side {
            Side::Source => self.source_language,
            Side::Target => self.target_language,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    #[error("input is empty")]
    EmptyInput,

    #[error("a translation is already in flight")]
    InFlight,

    #[error("translation failed: {0}")]
    Translation(#[from] TranslationError),
}

/// External services the controller calls into
#[derive(Clone)]
pub struct Capabilities {
    pub translator: Arc<dyn Translator>,
    pub notifier: Arc<dyn Notifier>,
    pub clipboard: Arc<dyn Clipboard>,
    pub speech: Arc<dyn SpeechSynthesizer>,
}

pub struct WidgetController {
    state: WidgetState,
    caps: Capabilities,
}

impl WidgetController {
    pub fn new(caps: Capabilities, source_language: Language, target_language: Language) -> Self {
        Self {
            state: WidgetState::new(source_language, target_language),
            caps,
        }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    /// Shared handle to the translator, for callers that drive the request
    /// themselves between `begin_submit` and `finish_submit`.
    pub fn translator(&self) -> Arc<dyn Translator> {
        Arc::clone(&self.caps.translator)
    }

    /// Replace the contents of the editable input area.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.state.input = text.into();
    }

    pub fn select_language(&mut self, side: Side, language: Language) {
        match side {
            Side::Source => self.state.source_language = language,
            Side::Target => self.state.target_language = language,
        }
    }

    /// Run one full submit: validate, translate, apply the outcome.
    ///
    /// Every error is already reported to the user through the notifier
    /// when this returns.
    pub async fn submit(&mut self) -> Result<(), WidgetError> {
        let request = self.begin_submit()?;
        let translator = self.translator();
        let outcome = translator.translate(&request).await;
        self.finish_submit(outcome)
    }

    /// `Idle -> Loading`. Captures the request from the current state.
    pub fn begin_submit(&mut self) -> Result<TranslationRequest, WidgetError> {
        if self.state.phase == SubmitPhase::Loading {
            debug!("Submit ignored: translation already in flight");
            return Err(WidgetError::InFlight);
        }

        let source_text = trim_input(&self.state.input);
        if source_text.is_empty() {
            self.caps
                .notifier
                .notify(Severity::Warning, WIDGET_STRINGS.empty_input_warning);
            return Err(WidgetError::EmptyInput);
        }

        let request = TranslationRequest {
            source_text: source_text.to_string(),
            source_language: self.state.source_language,
            target_language: self.state.target_language,
        };

        self.state.phase = SubmitPhase::Loading;
        self.state.submit_label = WIDGET_STRINGS.submit_loading;
        info!("Translating {}", request.lang_pair());

        Ok(request)
    }

    /// `Loading -> Success | Failed -> Idle`. The label is restored on
    /// both paths; the output only changes on success.
    pub fn finish_submit(
        &mut self,
        outcome: Result<TranslationResult, TranslationError>,
    ) -> Result<(), WidgetError> {
        self.state.phase = SubmitPhase::Idle;
        self.state.submit_label = WIDGET_STRINGS.submit_idle;

        match outcome {
            Ok(result) => {
                self.state.output = result.translated_text;
                Ok(())
            }
            Err(e) => {
                error!("Translation failed: {}", e);
                self.caps
                    .notifier
                    .notify(Severity::Danger, WIDGET_STRINGS.translation_failed);
                Err(WidgetError::Translation(e))
            }
        }
    }

    /// Swap both buffers and both language selections. Self-inverse.
    pub fn exchange(&mut self) {
        let state = &mut self.state;
        std::mem::swap(&mut state.input, &mut state.output);
        std::mem::swap(&mut state.source_language, &mut state.target_language);
    }

    /// Copy one side's buffer to the clipboard. Success is always reported.
    pub fn copy(&self, side: Side) {
        if let Err(e) = self.caps.clipboard.write_text(self.state.text(side)) {
            warn!("Clipboard write failed: {:#}", e);
        }
        self.caps
            .notifier
            .notify(Severity::Success, WIDGET_STRINGS.copy_success);
    }

    /// Speak one side's buffer in that side's language.
    pub fn speak(&self, side: Side) {
        let locale = self.state.language(side).code();
        if let Err(e) = self.caps.speech.speak(self.state.text(side), locale) {
            debug!("Speech request failed for {}: {:#}", locale, e);
        }
    }
}

/// Strips whitespace and byte order marks from both ends.
fn trim_input(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}
