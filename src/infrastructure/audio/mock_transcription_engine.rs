use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::AudioPayload;

pub const SCAFFOLD_TRANSCRIPT: &str = "Caller reports a person collapsed and is not breathing.";

/// Offline stand-in used in scaffold mode. Returns a fixed transcript for any
/// non-empty payload.
pub struct MockTranscriptionEngine {
    delay: Duration,
}

impl MockTranscriptionEngine {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl TranscriptionEngine for MockTranscriptionEngine {
    async fn transcribe(&self, audio: &AudioPayload) -> Result<String, TranscriptionError> {
        if audio.is_empty() {
            return Err(TranscriptionError::EmptyAudio);
        }
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(SCAFFOLD_TRANSCRIPT.to_string())
    }
}
