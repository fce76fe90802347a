use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::Multipart;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;

use dispatch_advisor::application::ports::{TranscriptionEngine, TranscriptionError};
use dispatch_advisor::domain::AudioPayload;
use dispatch_advisor::infrastructure::audio::{
    DEFAULT_CONTENT_TYPE, DEFAULT_FILE_NAME, OpenAiWhisperEngine,
};

use crate::helpers::start_mock_server;

#[derive(Debug, Default, Clone)]
struct Upload {
    auth: Option<String>,
    model: Option<String>,
    response_format: Option<String>,
    file: Vec<u8>,
    file_name: Option<String>,
    content_type: Option<String>,
}

fn whisper_router(status: u16, body: &'static str, captured: Arc<Mutex<Upload>>) -> Router {
    Router::new().route(
        "/audio/transcriptions",
        post(move |headers: HeaderMap, mut multipart: Multipart| {
            let captured = Arc::clone(&captured);
            async move {
                let mut upload = Upload {
                    auth: headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .map(String::from),
                    ..Upload::default()
                };
                while let Some(field) = multipart.next_field().await.unwrap() {
                    let name = field.name().unwrap_or_default().to_string();
                    if name == "file" {
                        upload.file_name = field.file_name().map(String::from);
                        upload.content_type = field.content_type().map(String::from);
                    }
                    let data = field.bytes().await.unwrap();
                    match name.as_str() {
                        "model" => upload.model = Some(String::from_utf8_lossy(&data).into()),
                        "response_format" => {
                            upload.response_format = Some(String::from_utf8_lossy(&data).into())
                        }
                        "file" => upload.file = data.to_vec(),
                        _ => {}
                    }
                }
                *captured.lock().unwrap() = upload;
                (StatusCode::from_u16(status).unwrap(), body).into_response()
            }
        }),
    )
}

fn engine(base_url: String) -> OpenAiWhisperEngine {
    OpenAiWhisperEngine::new(
        "sk-test".to_string(),
        Some(base_url),
        "whisper-large-v3".to_string(),
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn given_valid_audio_when_transcribing_then_uploads_bytes_and_returns_text() {
    let captured = Arc::new(Mutex::new(Upload::default()));
    let (base_url, shutdown_tx) = start_mock_server(whisper_router(
        200,
        r#"{"text": " There is a fire on the third floor. "}"#,
        Arc::clone(&captured),
    ))
    .await;

    let result = engine(base_url)
        .transcribe(&AudioPayload::new(b"RIFF fake wav".to_vec()))
        .await;

    assert_eq!(result.unwrap(), "There is a fire on the third floor.");
    let upload = captured.lock().unwrap().clone();
    assert_eq!(upload.auth.as_deref(), Some("Bearer sk-test"));
    assert_eq!(upload.model.as_deref(), Some("whisper-large-v3"));
    assert_eq!(upload.response_format.as_deref(), Some("json"));
    assert_eq!(upload.file, b"RIFF fake wav");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_mp3_upload_when_transcribing_then_forwards_its_file_name_and_content_type() {
    let captured = Arc::new(Mutex::new(Upload::default()));
    let (base_url, shutdown_tx) = start_mock_server(whisper_router(
        200,
        r#"{"text": "Smoke in the stairwell."}"#,
        Arc::clone(&captured),
    ))
    .await;
    let audio = AudioPayload::new(b"ID3\x03 mp3 frames".to_vec())
        .with_file_name("call.mp3")
        .with_content_type("audio/mpeg");

    let result = engine(base_url).transcribe(&audio).await;

    assert_eq!(result.unwrap(), "Smoke in the stairwell.");
    let upload = captured.lock().unwrap().clone();
    assert_eq!(upload.file_name.as_deref(), Some("call.mp3"));
    assert_eq!(upload.content_type.as_deref(), Some("audio/mpeg"));
    assert_eq!(upload.file, b"ID3\x03 mp3 frames");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_upload_without_metadata_when_transcribing_then_labels_it_as_wav() {
    let captured = Arc::new(Mutex::new(Upload::default()));
    let (base_url, shutdown_tx) =
        start_mock_server(whisper_router(200, r#"{"text": "ok"}"#, Arc::clone(&captured))).await;

    let result = engine(base_url)
        .transcribe(&AudioPayload::new(b"RIFF".to_vec()))
        .await;

    assert_eq!(result.unwrap(), "ok");
    let upload = captured.lock().unwrap().clone();
    assert_eq!(upload.file_name.as_deref(), Some(DEFAULT_FILE_NAME));
    assert_eq!(upload.content_type.as_deref(), Some(DEFAULT_CONTENT_TYPE));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unparseable_content_type_when_transcribing_then_falls_back_to_wav_type() {
    let captured = Arc::new(Mutex::new(Upload::default()));
    let (base_url, shutdown_tx) =
        start_mock_server(whisper_router(200, r#"{"text": "ok"}"#, Arc::clone(&captured))).await;
    let audio = AudioPayload::new(b"OggS".to_vec())
        .with_file_name("call.ogg")
        .with_content_type("not a mime type");

    let result = engine(base_url).transcribe(&audio).await;

    assert_eq!(result.unwrap(), "ok");
    let upload = captured.lock().unwrap().clone();
    assert_eq!(upload.file_name.as_deref(), Some("call.ogg"));
    assert_eq!(upload.content_type.as_deref(), Some(DEFAULT_CONTENT_TYPE));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_empty_audio_when_transcribing_then_fails_without_request() {
    let captured = Arc::new(Mutex::new(Upload::default()));
    let (base_url, shutdown_tx) =
        start_mock_server(whisper_router(200, r#"{"text": "x"}"#, Arc::clone(&captured))).await;

    let result = engine(base_url)
        .transcribe(&AudioPayload::new(Vec::new()))
        .await;

    assert!(matches!(result, Err(TranscriptionError::EmptyAudio)));
    assert!(captured.lock().unwrap().auth.is_none());
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unsupported_media_status_when_transcribing_then_returns_unsupported_format() {
    let (base_url, shutdown_tx) = start_mock_server(whisper_router(
        415,
        "Invalid file format.",
        Arc::default(),
    ))
    .await;

    let result = engine(base_url)
        .transcribe(&AudioPayload::new(b"garbage".to_vec()))
        .await;

    assert!(matches!(
        result,
        Err(TranscriptionError::UnsupportedFormat(body)) if body == "Invalid file format."
    ));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_server_error_when_transcribing_then_returns_api_error() {
    let (base_url, shutdown_tx) =
        start_mock_server(whisper_router(500, "upstream exploded", Arc::default())).await;

    let result = engine(base_url)
        .transcribe(&AudioPayload::new(b"RIFF".to_vec()))
        .await;

    assert!(matches!(
        result,
        Err(TranscriptionError::ApiRequestFailed(message)) if message.contains("500")
    ));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_body_without_text_field_when_transcribing_then_returns_invalid_response() {
    let (base_url, shutdown_tx) =
        start_mock_server(whisper_router(200, r#"{"transcript": "x"}"#, Arc::default())).await;

    let result = engine(base_url)
        .transcribe(&AudioPayload::new(b"RIFF".to_vec()))
        .await;

    assert!(matches!(result, Err(TranscriptionError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}
