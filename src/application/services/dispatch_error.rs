use crate::application::ports::TranscriptionError;

use super::RecommendationError;

/// Coarse classification that decides how a failure is surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    PayloadTooLarge,
    NotFound,
    Backend,
    BackendTimeout,
    Unexpected,
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("No input text provided.")]
    MissingInput,
    #[error("No audio file provided.")]
    MissingAudio,
    #[error("Failed to read audio file: {0}")]
    UnreadableAudio(String),
    #[error("Audio file too large: {0}")]
    AudioTooLarge(String),
    #[error("Scenario not found.")]
    ScenarioNotFound,
    #[error("Audio transcription failed: {0}")]
    Transcription(TranscriptionError),
    #[error("Recommendation failed: {0}")]
    Recommendation(#[from] RecommendationError),
}

impl DispatchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DispatchError::MissingInput
            | DispatchError::MissingAudio
            | DispatchError::UnreadableAudio(_)
            | DispatchError::Transcription(TranscriptionError::EmptyAudio) => ErrorKind::Validation,
            DispatchError::AudioTooLarge(_) => ErrorKind::PayloadTooLarge,
            DispatchError::ScenarioNotFound => ErrorKind::NotFound,
            DispatchError::Transcription(TranscriptionError::Timeout) => ErrorKind::BackendTimeout,
            DispatchError::Recommendation(e) if e.is_timeout() => ErrorKind::BackendTimeout,
            DispatchError::Transcription(_) | DispatchError::Recommendation(_) => {
                ErrorKind::Backend
            }
        }
    }
}
