use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{LlmClientError, TranscriptionEngine, TranscriptionError};
use crate::domain::{AudioPayload, ProtocolCatalog, Recommendation, ScenarioInput, ScenarioSource};

use super::{DispatchError, RecommendationEngine, RecommendationError};

/// Upper bounds for each backend call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendTimeouts {
    pub completion: Duration,
    pub transcription: Duration,
}

impl Default for BackendTimeouts {
    fn default() -> Self {
        Self {
            completion: Duration::from_secs(30),
            transcription: Duration::from_secs(60),
        }
    }
}

/// Routes each intake mode into the recommendation pipeline.
///
/// Every backend call is bounded by [`BackendTimeouts`]; the first failure
/// short-circuits the request and nothing is retried.
pub struct DispatchService {
    recommendation_engine: RecommendationEngine,
    transcription_engine: Arc<dyn TranscriptionEngine>,
    catalog: Arc<ProtocolCatalog>,
    timeouts: BackendTimeouts,
}

impl DispatchService {
    pub fn new(
        recommendation_engine: RecommendationEngine,
        transcription_engine: Arc<dyn TranscriptionEngine>,
        catalog: Arc<ProtocolCatalog>,
        timeouts: BackendTimeouts,
    ) -> Self {
        Self {
            recommendation_engine,
            transcription_engine,
            catalog,
            timeouts,
        }
    }

    pub fn catalog(&self) -> &ProtocolCatalog {
        &self.catalog
    }

    pub async fn advise_from_text(&self, input: &str) -> Result<Recommendation, DispatchError> {
        let scenario = ScenarioInput::new(input, ScenarioSource::FreeText)
            .map_err(|_| DispatchError::MissingInput)?;

        self.recommend(scenario).await
    }

    pub async fn advise_from_audio(
        &self,
        audio: AudioPayload,
    ) -> Result<Recommendation, DispatchError> {
        if audio.is_empty() {
            return Err(DispatchError::Transcription(TranscriptionError::EmptyAudio));
        }

        tracing::debug!(
            bytes = audio.len(),
            file_name = audio.file_name().unwrap_or("unknown"),
            content_type = audio.content_type().unwrap_or("unknown"),
            "Transcribing audio payload"
        );

        let transcript = bounded(
            self.timeouts.transcription,
            self.transcription_engine.transcribe(&audio),
            TranscriptionError::Timeout,
        )
        .await
        .map_err(DispatchError::Transcription)?;

        let scenario = ScenarioInput::new(transcript, ScenarioSource::TranscribedAudio)
            .map_err(|_| DispatchError::Transcription(TranscriptionError::EmptyTranscript))?;

        tracing::info!(chars = scenario.text().len(), "Audio transcribed");

        self.recommend(scenario).await
    }

    /// Looks up a canned recommendation. Never touches a backend.
    pub fn advise_from_catalog(&self, key: &str) -> Result<Recommendation, DispatchError> {
        let normalized = key.to_lowercase();

        let text = self
            .catalog
            .lookup(&normalized)
            .ok_or(DispatchError::ScenarioNotFound)?;

        let scenario = ScenarioInput::new(normalized, ScenarioSource::CatalogKey)
            .map_err(|_| DispatchError::ScenarioNotFound)?;

        Ok(Recommendation::new(scenario, text.to_string()))
    }

    async fn recommend(&self, scenario: ScenarioInput) -> Result<Recommendation, DispatchError> {
        let text = bounded(
            self.timeouts.completion,
            self.recommendation_engine.recommend(&scenario),
            RecommendationError::Completion(LlmClientError::Timeout),
        )
        .await?;

        Ok(Recommendation::new(scenario, text))
    }
}

async fn bounded<T, E>(
    limit: Duration,
    call: impl Future<Output = Result<T, E>>,
    on_timeout: E,
) -> Result<T, E> {
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(timeout_ms = limit.as_millis() as u64, "Backend call timed out");
            Err(on_timeout)
        }
    }
}
