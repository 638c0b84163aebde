use crate::config::Config;
use crate::session::{self, language_items, LanguageItem};
use crate::translation::{MyMemoryClient, Translator};
use axum::{
    extract::{State, WebSocketUpgrade},
    response::Response,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub translator: Arc<dyn Translator>,
}

impl AppState {
    pub fn new(config: Config, translator: Arc<dyn Translator>) -> Self {
        Self {
            config: Arc::new(config),
            translator,
        }
    }

    /// State backed by the MyMemory client at the configured URL
    pub fn from_config(config: Config) -> Self {
        let client = MyMemoryClient::new(reqwest::Client::new(), config.translation_api_url.clone());
        Self::new(config, Arc::new(client))
    }
}

#[derive(Debug, Serialize)]
struct LanguagesResponse {
    languages: Vec<LanguageItem>,
    default_source: LanguageItem,
    default_target: LanguageItem,
}

pub fn router(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/ws", get(websocket_handler))
        .route("/api/health", get(health_check))
        .route("/api/languages", get(languages))
        .fallback_service(static_dir)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn websocket_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(|socket| session::run(socket, state))
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn languages(State(state): State<AppState>) -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        languages: language_items(),
        default_source: state.config.default_source_language.into(),
        default_target: state.config.default_target_language.into(),
    })
}
