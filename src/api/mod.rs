mod handlers;
mod models;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub use handlers::{analyze_mistake, index, not_found, solve, INDEX_MESSAGE, SOLVE_TEMPERATURE};
pub use models::{
    AnalysisErrorResponse, AnalysisUnavailableResponse, ErrorResponse, MistakeAnalysisRequest,
    MistakeAnalysisResponse, SolveRequest, SolveResponse,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/solve", post(solve))
        .route("/api/analyze_mistake", post(analyze_mistake))
        .fallback(not_found)
        .with_state(state)
}
