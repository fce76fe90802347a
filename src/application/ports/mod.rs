mod llm_client;
mod transcription_engine;

pub use llm_client::{CompletionRequest, LlmClient, LlmClientError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
