mod environment;
mod scaffold;
mod settings;

pub use environment::Environment;
pub use scaffold::ScaffoldConfig;
pub use settings::{
    ApiKey, LlmSettings, LoggingSettings, ServerSettings, Settings, SettingsError,
    TranscriptionProviderSetting, TranscriptionSettings,
};
