use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use crate::application::services::DispatchError;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct PromptRequest {
    #[serde(default)]
    pub input: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PromptResponse {
    pub input: String,
    pub recommendation: String,
}

#[tracing::instrument(skip(state, payload))]
pub async fn prompt_handler(
    State(state): State<AppState>,
    payload: Result<Json<PromptRequest>, JsonRejection>,
) -> Result<Json<PromptResponse>, ApiError> {
    let input = match payload {
        Ok(Json(request)) => request.input,
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "Unreadable prompt body");
            None
        }
    }
    .ok_or(DispatchError::MissingInput)?;

    tracing::debug!(input = %sanitize_prompt(&input), "Processing prompt");

    let recommendation = state.dispatch_service.advise_from_text(&input).await?;

    tracing::info!(
        chars = recommendation.text.len(),
        "Prompt recommendation returned"
    );

    Ok(Json(PromptResponse {
        input,
        recommendation: recommendation.text,
    }))
}
