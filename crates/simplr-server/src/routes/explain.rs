use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ExplainRequest {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct ExplainResponse {
    pub explanation: String,
}

/// Forward a prompt to the generative text API unchanged.
pub async fn explain_algorithm(
    State(state): State<AppState>,
    Json(req): Json<ExplainRequest>,
) -> Result<Json<ExplainResponse>, ApiError> {
    let explanation = state.gemini.generate(&req.prompt).await?;
    Ok(Json(ExplainResponse { explanation }))
}
