use std::time::Duration;

use axum::Router;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::routing::post;

use dispatch_advisor::application::ports::{TranscriptionEngine, TranscriptionError};
use dispatch_advisor::domain::AudioPayload;
use dispatch_advisor::infrastructure::audio::AzureWhisperEngine;

use crate::helpers::start_mock_server;

fn azure_router(response_status: u16, response_body: &'static str) -> Router {
    Router::new().route(
        "/openai/deployments/my-deployment/audio/transcriptions",
        post(move |headers: HeaderMap| async move {
            if headers.get("api-key").and_then(|v| v.to_str().ok()) != Some("test-key") {
                return (axum::http::StatusCode::UNAUTHORIZED, "missing api-key").into_response();
            }
            let status = axum::http::StatusCode::from_u16(response_status).unwrap();
            (status, response_body).into_response()
        }),
    )
}

fn engine(base_url: &str) -> AzureWhisperEngine {
    AzureWhisperEngine::new(
        base_url,
        "my-deployment",
        "test-key",
        "2024-02-01",
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn given_valid_audio_bytes_when_azure_transcribes_then_returns_text() {
    let (base_url, shutdown_tx) =
        start_mock_azure(200, r#"{"text": "Hello from Azure Whisper"}"#).await;

    let result = engine(&base_url)
        .transcribe(&AudioPayload::new(b"fake audio bytes".to_vec()))
        .await;

    assert_eq!(result.unwrap(), "Hello from Azure Whisper");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_azure_api_returns_error_status_when_transcribing_then_returns_api_error() {
    let (base_url, shutdown_tx) = start_mock_azure(
        400,
        r#"{"error": {"code": "InvalidRequest", "message": "bad audio"}}"#,
    )
    .await;

    let result = engine(&base_url)
        .transcribe(&AudioPayload::new(b"bad audio".to_vec()))
        .await;

    assert!(matches!(
        result,
        Err(TranscriptionError::ApiRequestFailed(message))
            if message == "status 400 Bad Request: bad audio"
    ));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_trailing_slash_in_base_url_when_transcribing_then_still_reaches_deployment() {
    let (base_url, shutdown_tx) = start_mock_azure(200, r#"{"text": "ok"}"#).await;

    let result = engine(&format!("{}/", base_url))
        .transcribe(&AudioPayload::new(b"audio".to_vec()))
        .await;

    assert_eq!(result.unwrap(), "ok");
    shutdown_tx.send(()).ok();
}

async fn start_mock_azure(
    status: u16,
    body: &'static str,
) -> (String, tokio::sync::oneshot::Sender<()>) {
    start_mock_server(azure_router(status, body)).await
}
