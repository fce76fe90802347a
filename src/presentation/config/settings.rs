use std::fmt;
use std::net::SocketAddr;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid environment: {0}")]
    InvalidEnvironment(String),
    #[error("configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("invalid server address: {0}")]
    InvalidAddress(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub transcription: TranscriptionSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
}

impl ServerSettings {
    pub fn socket_addr(&self) -> Result<SocketAddr, SettingsError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| {
                SettingsError::InvalidAddress(format!("{}:{} ({})", self.host, self.port, e))
            })
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub base_url: String,
    #[serde(default)]
    pub api_key: ApiKey,
    pub chat_model: String,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub provider: TranscriptionProviderSetting,
    pub base_url: String,
    #[serde(default)]
    pub api_key: ApiKey,
    pub model: String,
    #[serde(default)]
    pub azure_deployment: Option<String>,
    pub azure_api_version: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptionProviderSetting {
    #[serde(rename = "openai")]
    OpenAi,
    Azure,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

/// Backend credential. Never printed by `Debug`.
#[derive(Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("ApiKey([EMPTY])")
        } else {
            f.write_str("ApiKey([REDACTED])")
        }
    }
}

impl Settings {
    /// Built-in defaults, before any file or environment overrides.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, SettingsError> {
        let builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.max_upload_mb", 25)?
            .set_default("llm.base_url", "https://api.openai.com/v1")?
            .set_default("llm.chat_model", "gpt-3.5-turbo")?
            .set_default("llm.max_tokens", 150)?
            .set_default("llm.timeout_secs", 30)?
            .set_default("transcription.provider", "openai")?
            .set_default("transcription.base_url", "https://api.openai.com/v1")?
            .set_default("transcription.model", "whisper-large-v3")?
            .set_default("transcription.azure_api_version", "2024-02-01")?
            .set_default("transcription.timeout_secs", 60)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?;
        Ok(builder)
    }

    /// Loads settings for `environment`: defaults, then
    /// `appsettings.{env}.toml` if present, then `APP__SECTION__KEY`
    /// environment variables.
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        let builder = Self::defaults()?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::from_builder(builder)
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, SettingsError> {
        let settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }
}
