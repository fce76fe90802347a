use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::presentation::config::{TranscriptionProviderSetting, TranscriptionSettings};

use super::azure_whisper_engine::AzureWhisperEngine;
use super::openai_whisper_engine::OpenAiWhisperEngine;

pub struct TranscriptionEngineFactory;

impl TranscriptionEngineFactory {
    pub fn create(
        settings: &TranscriptionSettings,
    ) -> Result<Arc<dyn TranscriptionEngine>, TranscriptionError> {
        let timeout = Duration::from_secs(settings.timeout_secs);
        let api_key = settings.api_key.expose();
        if api_key.is_empty() {
            tracing::warn!(provider = ?settings.provider, "Transcription API key is empty");
        }

        match settings.provider {
            TranscriptionProviderSetting::OpenAi => {
                let engine = OpenAiWhisperEngine::new(
                    api_key.to_string(),
                    Some(settings.base_url.clone()),
                    settings.model.clone(),
                    timeout,
                )?;
                Ok(Arc::new(engine))
            }
            TranscriptionProviderSetting::Azure => {
                let deployment = settings.azure_deployment.as_deref().ok_or_else(|| {
                    TranscriptionError::MissingCredentials(
                        "transcription.azure_deployment is required for Azure".to_string(),
                    )
                })?;
                let engine = AzureWhisperEngine::new(
                    &settings.base_url,
                    deployment,
                    api_key,
                    &settings.azure_api_version,
                    timeout,
                )?;
                Ok(Arc::new(engine))
            }
        }
    }
}
