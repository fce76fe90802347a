mod error;
mod index;
mod prompt;
mod simulate;
mod status;
mod transcribe;

pub use error::{ApiError, ErrorResponse, UNEXPECTED_ERROR_MESSAGE, handle_panic};
pub use index::index_handler;
pub use prompt::{PromptRequest, PromptResponse, prompt_handler};
pub use simulate::{SimulateParams, SimulateResponse, simulate_handler};
pub use status::{health_handler, scenarios_handler};
pub use transcribe::{AUDIO_FIELD, TranscribeResponse, transcribe_handler};
