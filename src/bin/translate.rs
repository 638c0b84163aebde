//! One-shot translation through the widget controller.
//!
//! Usage:
//!   cargo run --bin translate -- en-GB ru-RU Hello world
//!
//! Optional:
//! - TRANSLATION_API_URL (defaults to the public MyMemory endpoint)

use anyhow::{bail, Context, Result};
use std::sync::Arc;
use text_translator_widget::config::DEFAULT_TRANSLATION_API_URL;
use text_translator_widget::i18n::Language;
use text_translator_widget::notification::LogNotifier;
use text_translator_widget::platform::{Clipboard, SpeechSynthesizer};
use text_translator_widget::translation::MyMemoryClient;
use text_translator_widget::widget::{Capabilities, WidgetController};

/// Clipboard and speech have no terminal counterpart
struct Unavailable;

impl Clipboard for Unavailable {
    fn write_text(&self, _text: &str) -> Result<()> {
        bail!("clipboard is not available from the command line")
    }
}

impl SpeechSynthesizer for Unavailable {
    fn speak(&self, _text: &str, _locale: &str) -> Result<()> {
        bail!("speech is not available from the command line")
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("text_translator_widget=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 3 {
        bail!("Usage: translate <source-code> <target-code> <text...>");
    }

    let source = Language::from_code(&args[0]).context("Invalid source language")?;
    let target = Language::from_code(&args[1]).context("Invalid target language")?;
    let text = args[2..].join(" ");

    let api_url = std::env::var("TRANSLATION_API_URL")
        .unwrap_or_else(|_| DEFAULT_TRANSLATION_API_URL.to_string());

    let caps = Capabilities {
        translator: Arc::new(MyMemoryClient::new(reqwest::Client::new(), api_url)),
        notifier: Arc::new(LogNotifier),
        clipboard: Arc::new(Unavailable),
        speech: Arc::new(Unavailable),
    };

    let mut controller = WidgetController::new(caps, source, target);
    controller.set_input(text);
    controller.submit().await?;

    println!("{}", controller.state().output);
    Ok(())
}
