mod audio_payload;
mod message_role;
mod prompt_turn;
mod protocol_catalog;
mod recommendation;
mod scenario;

pub use audio_payload::AudioPayload;
pub use message_role::MessageRole;
pub use prompt_turn::PromptTurn;
pub use protocol_catalog::ProtocolCatalog;
pub use recommendation::Recommendation;
pub use scenario::{ScenarioInput, ScenarioInputError, ScenarioSource};
