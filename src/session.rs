//! One WebSocket connection bound to one widget controller.
//!
//! The page renders; this side owns the state. Notifications, clipboard
//! writes and speech requests are forwarded to the page as commands.

use crate::i18n::{Language, LanguageEntry, LanguageRegistry, WidgetStrings, WIDGET_STRINGS};
use crate::notification::{Notifier, Severity};
use crate::platform::{Clipboard, SpeechSynthesizer};
use crate::server::AppState;
use crate::translation::{TranslationError, TranslationResult};
use crate::widget::{Capabilities, Side, WidgetController, WidgetState};
use anyhow::Result;
use axum::extract::ws::{Message, WebSocket};
use futures::future::BoxFuture;
use futures::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Events sent by the page
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ClientEvent {
    Input { text: String },
    SelectLanguage { side: Side, code: String },
    Submit,
    Exchange,
    Copy { side: Side },
    Speak { side: Side },
}

/// Commands and state pushed to the page
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ServerEvent {
    Init {
        languages: Vec<LanguageItem>,
        strings: WidgetStrings,
        state: WidgetState,
    },
    State {
        state: WidgetState,
    },
    Notify {
        severity: Severity,
        message: String,
    },
    ClipboardWrite {
        text: String,
    },
    Speak {
        text: String,
        lang: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageItem {
    pub code: &'static str,
    pub name: &'static str,
}

impl From<&LanguageEntry> for LanguageItem {
    fn from(entry: &LanguageEntry) -> Self {
        Self {
            code: entry.code,
            name: entry.name,
        }
    }
}

impl From<Language> for LanguageItem {
    fn from(language: Language) -> Self {
        Self {
            code: language.code(),
            name: language.name(),
        }
    }
}

pub fn language_items() -> Vec<LanguageItem> {
    LanguageRegistry::get().list().iter().map(LanguageItem::from).collect()
}

type Outbox = mpsc::UnboundedSender<ServerEvent>;

/// Forwards notifications to the page
struct PageNotifier(Outbox);

impl Notifier for PageNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        let _ = self.0.send(ServerEvent::Notify {
            severity,
            message: message.to_string(),
        });
    }
}

/// Asks the page to write to its clipboard
struct PageClipboard(Outbox);

impl Clipboard for PageClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        self.0
            .send(ServerEvent::ClipboardWrite {
                text: text.to_string(),
            })
            .map_err(|_| anyhow::anyhow!("page connection closed"))
    }
}

/// Asks the page to speak through its speech synthesizer
struct PageSpeech(Outbox);

impl SpeechSynthesizer for PageSpeech {
    fn speak(&self, text: &str, locale: &str) -> Result<()> {
        self.0
            .send(ServerEvent::Speak {
                text: text.to_string(),
                lang: locale.to_string(),
            })
            .map_err(|_| anyhow::anyhow!("page connection closed"))
    }
}

type PendingTranslation = BoxFuture<'static, Result<TranslationResult, TranslationError>>;

/// Build a controller whose notifier, clipboard and speech write to `outbox`.
pub fn page_controller(state: &AppState, outbox: Outbox) -> WidgetController {
    let caps = Capabilities {
        translator: Arc::clone(&state.translator),
        notifier: Arc::new(PageNotifier(outbox.clone())),
        clipboard: Arc::new(PageClipboard(outbox.clone())),
        speech: Arc::new(PageSpeech(outbox)),
    };
    WidgetController::new(
        caps,
        state.config.default_source_language,
        state.config.default_target_language,
    )
}

/// Apply one page event. Returns the translation to start, if the event was
/// an accepted submit.
pub fn apply_event(controller: &mut WidgetController, event: ClientEvent) -> Option<PendingTranslation> {
    match event {
        ClientEvent::Input { text } => controller.set_input(text),
        ClientEvent::SelectLanguage { side, code } => match Language::from_code(&code) {
            Ok(language) => controller.select_language(side, language),
            Err(e) => warn!("Ignoring language selection: {}", e),
        },
        ClientEvent::Submit => {
            // Rejections are already reported by the controller
            if let Ok(request) = controller.begin_submit() {
                let translator = controller.translator();
                return Some(Box::pin(async move { translator.translate(&request).await }));
            }
        }
        ClientEvent::Exchange => controller.exchange(),
        ClientEvent::Copy { side } => controller.copy(side),
        ClientEvent::Speak { side } => controller.speak(side),
    }
    None
}

/// Resolves with the in-flight translation, or never if there is none.
async fn settle(pending: &mut Option<PendingTranslation>) -> Result<TranslationResult, TranslationError> {
    match pending.as_mut() {
        Some(fut) => fut.await,
        None => std::future::pending().await,
    }
}

pub async fn run(socket: WebSocket, state: AppState) {
    let session_id = Uuid::new_v4();
    info!("New widget session: {}", session_id);

    let (mut sink, mut stream) = socket.split();
    let (outbox, mut inbox) = mpsc::unbounded_channel::<ServerEvent>();

    let writer = tokio::spawn(async move {
        while let Some(event) = inbox.recv().await {
            let text = match serde_json::to_string(&event) {
                Ok(text) => text,
                Err(e) => {
                    error!("Failed to encode server event: {}", e);
                    continue;
                }
            };
            if sink.send(Message::Text(text)).await.is_err() {
                break;
            }
        }
    });

    let mut controller = page_controller(&state, outbox.clone());
    let _ = outbox.send(ServerEvent::Init {
        languages: language_items(),
        strings: WIDGET_STRINGS,
        state: controller.state().clone(),
    });

    let mut pending: Option<PendingTranslation> = None;

    loop {
        tokio::select! {
            msg = stream.next() => {
                let text = match msg {
                    Some(Ok(Message::Text(text))) => text,
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => continue,
                    Some(Err(e)) => {
                        warn!("WebSocket error in session {}: {}", session_id, e);
                        break;
                    }
                };

                let event: ClientEvent = match serde_json::from_str(&text) {
                    Ok(event) => event,
                    Err(e) => {
                        warn!("Unknown message in session {}: {}", session_id, e);
                        continue;
                    }
                };
                debug!("Session {} event: {:?}", session_id, event);

                if let Some(translation) = apply_event(&mut controller, event) {
                    pending = Some(translation);
                }
                let _ = outbox.send(ServerEvent::State { state: controller.state().clone() });
            }
            outcome = settle(&mut pending) => {
                pending = None;
                // Failures are reported and logged by the controller
                let _ = controller.finish_submit(outcome);
                let _ = outbox.send(ServerEvent::State { state: controller.state().clone() });
            }
        }
    }

    drop(controller);
    drop(outbox);
    if let Err(e) = writer.await {
        error!("Session {} writer task failed: {}", session_id, e);
    }
    info!("Closed widget session: {}", session_id);
}
