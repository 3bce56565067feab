use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::api::{AnalysisErrorResponse, AnalysisUnavailableResponse, SolveResponse};
use crate::generation::GenerationError;

/// Failures of `/api/solve`. Every variant renders as `{"solution": ...}`.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("No problem provided.")]
    Validation,
    #[error("The Math Agent is not active. The API key is not configured correctly on the server.")]
    ServiceUnavailable,
    #[error("Math Agent API error. Check the key and the model. Details: {0}")]
    Upstream(String),
    #[error("An unexpected error occurred on the server: {0}")]
    Unexpected(String),
}

impl SolveError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation => StatusCode::BAD_REQUEST,
            Self::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Upstream(_) | Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<GenerationError> for SolveError {
    fn from(err: GenerationError) -> Self {
        if err.is_api() {
            Self::Upstream(err.to_string())
        } else {
            Self::Unexpected(err.to_string())
        }
    }
}

impl IntoResponse for SolveError {
    fn into_response(self) -> Response {
        let status = self.status();
        (
            status,
            Json(SolveResponse {
                solution: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Failures of `/api/analyze_mistake`.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Invalid request: JSON body missing or malformed.")]
    Validation,
    #[error("The Math Agent is not active.")]
    ServiceUnavailable,
    #[error("The model did not return clean JSON. Please retry.")]
    MalformedJson,
    #[error("Analysis error: {0}")]
    Failed(String),
}

impl AnalysisError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation => StatusCode::BAD_REQUEST,
            Self::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::MalformedJson | Self::Failed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<GenerationError> for AnalysisError {
    fn from(err: GenerationError) -> Self {
        let message = err.to_string();
        if message.contains("JSON") {
            Self::MalformedJson
        } else {
            Self::Failed(message)
        }
    }
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::ServiceUnavailable => (
                status,
                Json(AnalysisUnavailableResponse {
                    analysis: self.to_string(),
                }),
            )
                .into_response(),
            _ => (
                status,
                Json(AnalysisErrorResponse {
                    error: self.to_string(),
                    status: "error",
                }),
            )
                .into_response(),
        }
    }
}
