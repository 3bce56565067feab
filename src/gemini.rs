use std::time::Instant;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::time::{timeout, Duration};

use crate::generation::{GenerateOptions, GenerationError, Generator};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// `Generator` backed by the Gemini `generateContent` REST endpoint.
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    timeout_ms: u64,
}

impl GeminiClient {
    pub fn new(
        api_key: &str,
        base_url: impl Into<String>,
        timeout_ms: u64,
    ) -> Result<Self, GenerationError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut key =
            HeaderValue::from_str(api_key).map_err(|_| GenerationError::InvalidApiKey)?;
        key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(GenerationError::Client)?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_ms,
        })
    }

    fn endpoint(&self, model_id: &str) -> String {
        format!("{}/v1beta/models/{model_id}:generateContent", self.base_url)
    }

    async fn call(
        &self,
        url: &str,
        body: &GenerateContentRequest<'_>,
    ) -> Result<String, GenerationError> {
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(GenerationError::Transport)?;

        let status = response.status();
        let text = response.text().await.map_err(GenerationError::Transport)?;

        if !status.is_success() {
            return Err(api_error(status, &text));
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&text).map_err(|e| GenerationError::Decode(e.to_string()))?;
        parsed.into_text().ok_or(GenerationError::EmptyResponse)
    }
}

#[async_trait]
impl Generator for GeminiClient {
    async fn generate(
        &self,
        model_id: &str,
        content: &str,
        options: GenerateOptions,
    ) -> Result<String, GenerationError> {
        let url = self.endpoint(model_id);
        let body = GenerateContentRequest::new(content, &options);
        let started = Instant::now();

        let result = timeout(Duration::from_millis(self.timeout_ms), self.call(&url, &body))
            .await
            .map_err(|_| GenerationError::Timeout(self.timeout_ms))?;

        tracing::debug!(
            model = model_id,
            latency_ms = started.elapsed().as_millis() as u64,
            success = result.is_ok(),
            "generation call finished"
        );
        result
    }
}

fn api_error(status: reqwest::StatusCode, body: &str) -> GenerationError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => GenerationError::Api {
            code: envelope.error.code.unwrap_or(status.as_u16()),
            status: envelope.error.status,
            message: envelope.error.message,
        },
        Err(_) => GenerationError::Api {
            code: status.as_u16(),
            status: status.canonical_reason().unwrap_or("UNKNOWN").to_string(),
            message: body.trim().to_string(),
        },
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content<'a>>,
    generation_config: GenerationConfig<'a>,
}

impl<'a> GenerateContentRequest<'a> {
    fn new(content: &'a str, options: &'a GenerateOptions) -> Self {
        let user = Content {
            role: Some("user"),
            parts: vec![Part { text: content }],
        };

        match options {
            GenerateOptions::Text {
                system_instruction,
                temperature,
            } => Self {
                contents: vec![user],
                system_instruction: Some(Content {
                    role: None,
                    parts: vec![Part {
                        text: system_instruction.as_str(),
                    }],
                }),
                generation_config: GenerationConfig {
                    temperature: Some(*temperature),
                    ..GenerationConfig::default()
                },
            },
            GenerateOptions::Json {
                response_mime_type,
                response_schema,
            } => Self {
                contents: vec![user],
                system_instruction: None,
                generation_config: GenerationConfig {
                    response_mime_type: Some(response_mime_type.as_str()),
                    response_schema: Some(response_schema),
                    ..GenerationConfig::default()
                },
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<&'a Value>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Joins the text parts of the first candidate, as the SDKs' `.text` does.
    fn into_text(self) -> Option<String> {
        let parts = self.candidates.into_iter().next()?.content?.parts;
        let text: String = parts.into_iter().filter_map(|part| part.text).collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: Option<u16>,
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}
