use async_trait::async_trait;

use crate::domain::AudioPayload;

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(&self, audio: &AudioPayload) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("audio payload is empty")]
    EmptyAudio,
    #[error("empty transcript")]
    EmptyTranscript,
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("request timed out")]
    Timeout,
    #[error("missing credentials: {0}")]
    MissingCredentials(String),
}
