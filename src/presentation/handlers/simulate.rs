use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use crate::presentation::state::AppState;

use super::error::ApiError;

#[derive(Debug, Default, Deserialize)]
pub struct SimulateParams {
    #[serde(default)]
    pub scenario: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SimulateResponse {
    pub scenario: String,
    pub recommendation: String,
}

#[tracing::instrument(skip(state, params))]
pub async fn simulate_handler(
    State(state): State<AppState>,
    params: Result<Query<SimulateParams>, QueryRejection>,
) -> Result<Json<SimulateResponse>, ApiError> {
    let params = params.map(|Query(p)| p).unwrap_or_default();
    let key = params.scenario.unwrap_or_default();

    let recommendation = state.dispatch_service.advise_from_catalog(&key)?;

    tracing::info!(scenario = %recommendation.scenario.text(), "Catalog scenario served");

    Ok(Json(SimulateResponse {
        scenario: recommendation.scenario.text().to_string(),
        recommendation: recommendation.text,
    }))
}
