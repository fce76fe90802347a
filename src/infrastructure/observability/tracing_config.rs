use crate::presentation::config::{Environment, LoggingSettings};

/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: Environment,
    pub json_format: bool,
    pub default_level: String,
}

impl TracingConfig {
    pub fn new(environment: Environment, logging: &LoggingSettings) -> Self {
        let json_override = std::env::var("LOG_FORMAT")
            .ok()
            .map(|v| v.eq_ignore_ascii_case("json"));

        Self {
            environment,
            json_format: json_override.unwrap_or(logging.enable_json),
            default_level: logging.level.clone(),
        }
    }

    /// Filter used when `RUST_LOG` is unset.
    pub fn default_filter(&self) -> String {
        format!(
            "{},dispatch_advisor=debug,tower_http=debug",
            self.default_level
        )
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Local,
            json_format: false,
            default_level: "info".to_string(),
        }
    }
}
