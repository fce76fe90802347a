use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Serialize)]
pub struct ScenariosResponse {
    pub scenarios: Vec<String>,
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

/// Keys accepted by `/simulate`, sorted.
pub async fn scenarios_handler(State(state): State<AppState>) -> Json<ScenariosResponse> {
    let scenarios = state
        .dispatch_service
        .catalog()
        .keys()
        .into_iter()
        .map(String::from)
        .collect();

    Json(ScenariosResponse { scenarios })
}
