use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::AudioPayload;

use super::{TranscriptionResponse, file_part, map_send_error, read_transcript};

/// Whisper hosted as an Azure OpenAI deployment. The model is implied by the
/// deployment name.
pub struct AzureWhisperEngine {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl AzureWhisperEngine {
    pub fn new(
        base_url: &str,
        deployment: &str,
        api_key: &str,
        api_version: &str,
        timeout: Duration,
    ) -> Result<Self, TranscriptionError> {
        let endpoint = format!(
            "{}/openai/deployments/{}/audio/transcriptions?api-version={}",
            base_url.trim_end_matches('/'),
            deployment,
            api_version,
        );
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("client build: {}", e)))?;

        Ok(Self {
            client,
            endpoint,
            api_key: api_key.to_string(),
        })
    }
}

#[async_trait]
impl TranscriptionEngine for AzureWhisperEngine {
    async fn transcribe(&self, audio: &AudioPayload) -> Result<String, TranscriptionError> {
        if audio.is_empty() {
            return Err(TranscriptionError::EmptyAudio);
        }

        let form = multipart::Form::new().part("file", file_part(audio)?);

        tracing::debug!(endpoint = %self.endpoint, "Sending audio to Azure OpenAI Whisper");

        let response = self
            .client
            .post(&self.endpoint)
            .header("api-key", &self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(map_send_error)?;

        let TranscriptionResponse { text } = read_transcript(response).await?;

        tracing::info!(
            chars = text.len(),
            "Azure OpenAI Whisper transcription completed"
        );

        Ok(text.trim().to_string())
    }
}
