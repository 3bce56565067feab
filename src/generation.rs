use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// How the generation service should shape its output.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateOptions {
    /// Freeform text steered by a system-level directive.
    Text {
        system_instruction: String,
        temperature: f32,
    },
    /// Output constrained to a declared JSON shape.
    Json {
        response_mime_type: String,
        response_schema: Value,
    },
}

impl GenerateOptions {
    pub fn text(system_instruction: impl Into<String>, temperature: f32) -> Self {
        Self::Text {
            system_instruction: system_instruction.into(),
            temperature,
        }
    }

    pub fn json(response_schema: Value) -> Self {
        Self::Json {
            response_mime_type: "application/json".to_string(),
            response_schema,
        }
    }
}

#[derive(Debug, Error)]
pub enum GenerationError {
    /// The service answered with an error payload (auth, quota, model fault).
    #[error("{status} {code}: {message}")]
    Api {
        code: u16,
        status: String,
        message: String,
    },
    #[error("generation request timed out after {0} ms")]
    Timeout(u64),
    #[error("failed to reach generation service: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("generation service returned invalid JSON: {0}")]
    Decode(String),
    #[error("generation service returned no text")]
    EmptyResponse,
    #[error("API key is not a valid header value")]
    InvalidApiKey,
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl GenerationError {
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }
}

/// External text-generation capability, shared read-only across requests.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(
        &self,
        model_id: &str,
        content: &str,
        options: GenerateOptions,
    ) -> Result<String, GenerationError>;
}
