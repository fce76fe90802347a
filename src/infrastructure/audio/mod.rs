mod azure_whisper_engine;
mod mock_transcription_engine;
mod openai_whisper_engine;
mod transcription_engine_factory;

use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::TranscriptionError;
use crate::domain::AudioPayload;
use crate::infrastructure::observability::sanitize_upstream_error;

pub use azure_whisper_engine::AzureWhisperEngine;
pub use mock_transcription_engine::{MockTranscriptionEngine, SCAFFOLD_TRANSCRIPT};
pub use openai_whisper_engine::OpenAiWhisperEngine;
pub use transcription_engine_factory::TranscriptionEngineFactory;

pub const DEFAULT_FILE_NAME: &str = "audio.wav";
pub const DEFAULT_CONTENT_TYPE: &str = "audio/wav";

#[derive(Deserialize)]
struct TranscriptionResponse {
    text: String,
}

/// Whisper infers the container from the file name, so the caller's name and
/// MIME type are forwarded as-is. A MIME type reqwest cannot parse falls back
/// to the default.
fn file_part(audio: &AudioPayload) -> Result<multipart::Part, TranscriptionError> {
    let file_name = audio
        .file_name()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(DEFAULT_FILE_NAME)
        .to_string();
    let content_type = audio.content_type().unwrap_or(DEFAULT_CONTENT_TYPE);

    let part = || multipart::Part::bytes(audio.data().to_vec()).file_name(file_name.clone());

    match part().mime_str(content_type) {
        Ok(part) => Ok(part),
        Err(e) => {
            tracing::debug!(content_type, error = %e, "Unparseable content type, using default");
            part()
                .mime_str(DEFAULT_CONTENT_TYPE)
                .map_err(|e| TranscriptionError::ApiRequestFailed(format!("mime: {}", e)))
        }
    }
}

fn map_send_error(e: reqwest::Error) -> TranscriptionError {
    if e.is_timeout() {
        TranscriptionError::Timeout
    } else {
        TranscriptionError::ApiRequestFailed(format!("request: {}", e))
    }
}

async fn read_transcript(
    response: reqwest::Response,
) -> Result<TranscriptionResponse, TranscriptionError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = sanitize_upstream_error(&body);
        if status == reqwest::StatusCode::UNSUPPORTED_MEDIA_TYPE {
            return Err(TranscriptionError::UnsupportedFormat(message));
        }
        return Err(TranscriptionError::ApiRequestFailed(format!(
            "status {}: {}",
            status, message
        )));
    }

    response
        .json()
        .await
        .map_err(|e| TranscriptionError::InvalidResponse(format!("parse response: {}", e)))
}
