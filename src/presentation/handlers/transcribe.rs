use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use serde::Serialize;

use crate::application::services::DispatchError;
use crate::domain::AudioPayload;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::error::ApiError;

pub const AUDIO_FIELD: &str = "audio";

#[derive(Debug, Serialize)]
pub struct TranscribeResponse {
    pub transcript: String,
    pub recommendation: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<TranscribeResponse>, ApiError> {
    let mut multipart = multipart.map_err(|rejection| {
        tracing::debug!(reason = %rejection.body_text(), "Request is not multipart");
        DispatchError::MissingAudio
    })?;

    let audio = read_audio_field(&mut multipart).await?;

    let recommendation = state.dispatch_service.advise_from_audio(audio).await?;

    tracing::debug!(
        transcript = %sanitize_prompt(recommendation.scenario.text()),
        "Transcribed scenario"
    );

    Ok(Json(TranscribeResponse {
        transcript: recommendation.scenario.text().to_string(),
        recommendation: recommendation.text,
    }))
}

/// Reads the whole `audio` part into memory, skipping any other fields.
async fn read_audio_field(multipart: &mut Multipart) -> Result<AudioPayload, DispatchError> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Err(DispatchError::MissingAudio),
            Err(e) => return Err(read_failure(e)),
        };

        if field.name() != Some(AUDIO_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(String::from);
        let content_type = field.content_type().map(String::from);

        let data = field
            .bytes()
            .await
            .map_err(read_failure)?;

        tracing::debug!(bytes = data.len(), "Audio upload received");

        let mut payload = AudioPayload::new(data.to_vec());
        if let Some(name) = file_name {
            payload = payload.with_file_name(name);
        }
        if let Some(content_type) = content_type {
            payload = payload.with_content_type(content_type);
        }
        return Ok(payload);
    }
}

/// Keeps the upload limit distinguishable from a malformed body.
fn read_failure(error: MultipartError) -> DispatchError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        DispatchError::AudioTooLarge(error.body_text())
    } else {
        DispatchError::UnreadableAudio(error.body_text())
    }
}
