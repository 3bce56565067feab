pub mod analysis;
pub mod api;
pub mod config;
pub mod error;
pub mod gemini;
pub mod generation;
pub mod logging;
pub mod persona;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::config::{AppConfig, API_KEY_VAR};
use crate::gemini::GeminiClient;
use crate::generation::Generator;

pub use crate::config::DEFAULT_MODEL_ID;

/// Shared, read-only state. `generator` is `None` when no credential was configured.
#[derive(Clone)]
pub struct AppState {
    pub generator: Option<Arc<dyn Generator>>,
    pub model_id: String,
}

impl AppState {
    pub fn new(generator: Arc<dyn Generator>, model_id: impl Into<String>) -> Self {
        Self {
            generator: Some(generator),
            model_id: model_id.into(),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            generator: None,
            model_id: DEFAULT_MODEL_ID.to_string(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.generator.is_some()
    }
}

/// Builds the Gemini client once. Failures leave the gateway inactive for the process lifetime.
pub fn app_state_from_config(config: &AppConfig) -> AppState {
    let Some(api_key) = config.api_key.as_deref() else {
        tracing::warn!(
            variable = API_KEY_VAR,
            "credential not found; AI endpoints will answer 503"
        );
        return AppState {
            generator: None,
            model_id: config.model_id.clone(),
        };
    };

    match GeminiClient::new(api_key, config.base_url.as_str(), config.timeout_ms) {
        Ok(client) => {
            tracing::info!(model = %config.model_id, "Gemini client initialized");
            AppState::new(Arc::new(client), config.model_id.clone())
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to initialize Gemini client");
            AppState {
                generator: None,
                model_id: config.model_id.clone(),
            }
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api::router(state).layer(cors)
}

pub async fn run_server(app: Router, port: u16) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(addr = %listener.local_addr()?, "tutor gateway listening");
    axum::serve(listener, app).await
}
