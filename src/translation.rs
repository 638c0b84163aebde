use crate::i18n::Language;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

/// Text plus language pair for one translation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub source_text: String,
    pub source_language: Language,
    pub target_language: Language,
}

impl TranslationRequest {
    /// Language pair in the API's `source|target` form
    pub fn lang_pair(&self) -> String {
        format!(
            "{}|{}",
            self.source_language.code(),
            self.target_language.code()
        )
    }
}

/// Translated text as returned by the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    pub translated_text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("failed to send translation request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("translation API error ({status}): {body}")]
    Status { status: StatusCode, body: String },

    #[error("malformed translation response: {0}")]
    Malformed(String),
}

/// Remote translation capability.
///
/// Implementations perform no input validation; callers pass non-empty,
/// trimmed text.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslationError>;
}

/// MyMemory response envelope
#[derive(Debug, Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseData")]
    response_data: Option<ResponseData>,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

/// Translator backed by the MyMemory `get` endpoint
#[derive(Debug, Clone)]
pub struct MyMemoryClient {
    client: reqwest::Client,
    api_url: String,
}

impl MyMemoryClient {
    pub fn new(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
        }
    }
}

#[async_trait]
impl Translator for MyMemoryClient {
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslationError> {
        let lang_pair = request.lang_pair();
        debug!(
            "Requesting translation {} ({} chars)",
            lang_pair,
            request.source_text.chars().count()
        );

        let response = self
            .client
            .get(&self.api_url)
            .query(&[("q", request.source_text.as_str()), ("langpair", lang_pair.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            return Err(TranslationError::Status { status, body });
        }

        let body = response.text().await?;
        let envelope: MyMemoryResponse = serde_json::from_str(&body)
            .map_err(|e| TranslationError::Malformed(format!("invalid JSON: {}", e)))?;

        let translated_text = envelope
            .response_data
            .and_then(|data| data.translated_text)
            .ok_or_else(|| {
                TranslationError::Malformed("missing responseData.translatedText".to_string())
            })?;

        Ok(TranslationResult { translated_text })
    }
}
