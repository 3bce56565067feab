use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::analysis::{analysis_prompt, mistake_schema};
use crate::error::{AnalysisError, SolveError};
use crate::generation::GenerateOptions;
use crate::persona::Persona;
use crate::AppState;

use super::models::{
    ErrorResponse, MistakeAnalysisRequest, MistakeAnalysisResponse, SolveRequest, SolveResponse,
};

/// Low temperature keeps tutoring output consistent between calls.
pub const SOLVE_TEMPERATURE: f32 = 0.3;

pub const INDEX_MESSAGE: &str =
    "MathHub Server Running. Access index.html directly if running locally.";

/// Parses the body as JSON whatever its content-type.
pub async fn solve(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SolveResponse>, SolveError> {
    let payload: SolveRequest = serde_json::from_slice(&body).map_err(|err| {
        tracing::debug!(error = %err, "unreadable solve body");
        SolveError::Validation
    })?;

    let problem = payload.problem.trim();
    if problem.is_empty() {
        return Err(SolveError::Validation);
    }

    let generator = state
        .generator
        .as_ref()
        .ok_or(SolveError::ServiceUnavailable)?;

    let persona = Persona::from_mode(payload.mode());
    let options = GenerateOptions::text(persona.instruction(), SOLVE_TEMPERATURE);

    let solution = generator
        .generate(&state.model_id, problem, options)
        .await
        .map_err(|err| {
            tracing::error!(endpoint = "solve", %persona, error = %err, "generation failed");
            SolveError::from(err)
        })?;

    Ok(Json(SolveResponse { solution }))
}

pub async fn analyze_mistake(
    State(state): State<AppState>,
    payload: Result<Json<MistakeAnalysisRequest>, JsonRejection>,
) -> Result<Json<MistakeAnalysisResponse>, AnalysisError> {
    let generator = state
        .generator
        .as_ref()
        .ok_or(AnalysisError::ServiceUnavailable)?;

    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "unreadable analysis body");
        AnalysisError::Validation
    })?;

    let prompt = analysis_prompt(
        payload.problem.as_deref(),
        payload.student_answer.as_deref(),
    );

    let analysis_data = generator
        .generate(&state.model_id, &prompt, GenerateOptions::json(mistake_schema()))
        .await
        .map_err(|err| {
            tracing::error!(endpoint = "analyze_mistake", error = %err, "generation failed");
            AnalysisError::from(err)
        })?;

    Ok(Json(MistakeAnalysisResponse {
        analysis_data,
        status: "success",
    }))
}

pub async fn index() -> &'static str {
    INDEX_MESSAGE
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "route not found".to_string(),
        }),
    )
        .into_response()
}
