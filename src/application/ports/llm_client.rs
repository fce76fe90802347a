use async_trait::async_trait;

use crate::domain::PromptTurn;

/// Everything the completion backend needs for one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub model: String,
    pub turns: Vec<PromptTurn>,
    pub max_tokens: u32,
}

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Returns the content of the first choice, untrimmed.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("request timed out")]
    Timeout,
}
