use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct SolveRequest {
    #[serde(default)]
    pub problem: String,
    #[serde(default)]
    pub mode: Option<Value>,
}

impl SolveRequest {
    /// Non-string modes read as absent.
    pub fn mode(&self) -> Option<&str> {
        self.mode.as_ref().and_then(Value::as_str)
    }
}

/// Success and failure bodies of `/api/solve` share this shape.
#[derive(Debug, Serialize)]
pub struct SolveResponse {
    pub solution: String,
}

#[derive(Debug, Deserialize)]
pub struct MistakeAnalysisRequest {
    #[serde(default)]
    pub problem: Option<String>,
    #[serde(default)]
    pub student_answer: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MistakeAnalysisResponse {
    /// Raw JSON text from the model, passed through unparsed.
    pub analysis_data: String,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct AnalysisErrorResponse {
    pub error: String,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct AnalysisUnavailableResponse {
    pub analysis: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
