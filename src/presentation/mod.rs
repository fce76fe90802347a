pub mod config;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::{
    ApiKey, Environment, LlmSettings, LoggingSettings, ScaffoldConfig, ServerSettings, Settings,
    SettingsError, TranscriptionProviderSetting, TranscriptionSettings,
};
pub use router::create_router;
pub use state::AppState;
