use std::sync::Arc;
use std::sync::Mutex;

use dispatch_advisor::application::ports::{CompletionRequest, LlmClient, LlmClientError};
use dispatch_advisor::application::services::{
    RecommendationEngine, RecommendationError, SYSTEM_INSTRUCTION, build_prompt,
};
use dispatch_advisor::domain::{MessageRole, ScenarioInput, ScenarioSource};

struct FixedLlmClient {
    reply: Result<String, ()>,
    seen: Mutex<Option<CompletionRequest>>,
}

impl FixedLlmClient {
    fn replying(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            seen: Mutex::new(None),
        }
    }

    fn rate_limited() -> Self {
        Self {
            reply: Err(()),
            seen: Mutex::new(None),
        }
    }
}

#[async_trait::async_trait]
impl LlmClient for FixedLlmClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmClientError> {
        *self.seen.lock().unwrap() = Some(request.clone());
        self.reply.clone().map_err(|_| LlmClientError::RateLimited)
    }
}

fn scenario(text: &str) -> ScenarioInput {
    ScenarioInput::new(text, ScenarioSource::FreeText).unwrap()
}

#[test]
fn given_scenario_text_when_building_prompt_then_returns_system_and_user_turns() {
    let turns = build_prompt("Toddler fell into a pool");

    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0].role, MessageRole::System);
    assert_eq!(turns[0].content, SYSTEM_INSTRUCTION);
    assert_eq!(turns[1].role, MessageRole::User);
    assert_eq!(
        turns[1].content,
        "Based on the scenario: 'Toddler fell into a pool', provide evidence-based recommendations."
    );
}

#[test]
fn given_same_text_when_building_prompt_twice_then_results_are_equal() {
    let text = "Caller says 'help', then the line drops";

    assert_eq!(build_prompt(text), build_prompt(text));
    assert!(build_prompt(text)[1].content.contains(text));
}

#[tokio::test]
async fn given_padded_completion_when_recommending_then_returns_trimmed_text() {
    let client = Arc::new(FixedLlmClient::replying("\n  Apply direct pressure to the wound.  \n"));
    let engine = RecommendationEngine::new(client.clone(), "gpt-3.5-turbo".to_string(), 150);

    let result = engine.recommend(&scenario("Deep cut on the arm")).await.unwrap();

    assert_eq!(result, "Apply direct pressure to the wound.");
    let seen = client.seen.lock().unwrap().clone().unwrap();
    assert_eq!(seen, engine.completion_request("Deep cut on the arm"));
    assert_eq!(seen.max_tokens, 150);
    assert_eq!(seen.model, "gpt-3.5-turbo");
}

#[tokio::test]
async fn given_blank_completion_when_recommending_then_returns_empty_completion_error() {
    let engine = RecommendationEngine::new(
        Arc::new(FixedLlmClient::replying("   ")),
        "gpt-3.5-turbo".to_string(),
        150,
    );

    let result = engine.recommend(&scenario("Dog bite")).await;

    assert!(matches!(result, Err(RecommendationError::EmptyCompletion)));
}

#[tokio::test]
async fn given_backend_error_when_recommending_then_wraps_it() {
    let engine = RecommendationEngine::new(
        Arc::new(FixedLlmClient::rate_limited()),
        "gpt-3.5-turbo".to_string(),
        150,
    );

    let result = engine.recommend(&scenario("Dog bite")).await;

    match result {
        Err(error @ RecommendationError::Completion(LlmClientError::RateLimited)) => {
            assert_eq!(error.to_string(), "completion: rate limited");
            assert!(!error.is_timeout());
        }
        other => panic!("unexpected result: {:?}", other),
    }
}
