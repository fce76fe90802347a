use std::sync::Arc;

use crate::application::ports::{CompletionRequest, LlmClient, LlmClientError};
use crate::domain::{PromptTurn, ScenarioInput};

pub const SYSTEM_INSTRUCTION: &str = "You are an expert emergency dispatcher assistant.";

/// Builds the two-turn prompt for a scenario. The scenario text is embedded
/// verbatim.
pub fn build_prompt(scenario_text: &str) -> Vec<PromptTurn> {
    vec![
        PromptTurn::system(SYSTEM_INSTRUCTION),
        PromptTurn::user(format!(
            "Based on the scenario: '{}', provide evidence-based recommendations.",
            scenario_text
        )),
    ]
}

pub struct RecommendationEngine {
    llm_client: Arc<dyn LlmClient>,
    model: String,
    max_tokens: u32,
}

impl RecommendationEngine {
    pub fn new(llm_client: Arc<dyn LlmClient>, model: String, max_tokens: u32) -> Self {
        Self {
            llm_client,
            model,
            max_tokens,
        }
    }

    pub fn completion_request(&self, scenario_text: &str) -> CompletionRequest {
        CompletionRequest {
            model: self.model.clone(),
            turns: build_prompt(scenario_text),
            max_tokens: self.max_tokens,
        }
    }

    #[tracing::instrument(skip(self, scenario), fields(source = %scenario.source(), model = %self.model))]
    pub async fn recommend(&self, scenario: &ScenarioInput) -> Result<String, RecommendationError> {
        let request = self.completion_request(scenario.text());

        let content = self.llm_client.complete(&request).await?;
        let recommendation = content.trim();

        if recommendation.is_empty() {
            tracing::warn!("Completion backend returned blank content");
            return Err(RecommendationError::EmptyCompletion);
        }

        tracing::debug!(chars = recommendation.len(), "Recommendation generated");
        Ok(recommendation.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    #[error("completion: {0}")]
    Completion(#[from] LlmClientError),
    #[error("completion returned no content")]
    EmptyCompletion,
}

impl RecommendationError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, RecommendationError::Completion(LlmClientError::Timeout))
    }
}
