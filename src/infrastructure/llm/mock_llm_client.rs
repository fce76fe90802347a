use std::time::Duration;

use crate::application::ports::{CompletionRequest, LlmClient, LlmClientError};
use crate::domain::MessageRole;

/// Offline stand-in used in scaffold mode. Echoes the user turn back.
pub struct MockLlmClient {
    delay: Duration,
}

impl MockLlmClient {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmClientError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let user_turn = request
            .turns
            .iter()
            .rev()
            .find(|t| t.role == MessageRole::User)
            .map(|t| t.content.as_str())
            .unwrap_or_default();

        Ok(format!("Scaffold recommendation. {}", user_turn))
    }
}
