use std::fmt;

/// Where the text of a scenario came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenarioSource {
    FreeText,
    TranscribedAudio,
    CatalogKey,
}

impl ScenarioSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioSource::FreeText => "free_text",
            ScenarioSource::TranscribedAudio => "transcribed_audio",
            ScenarioSource::CatalogKey => "catalog_key",
        }
    }
}

impl fmt::Display for ScenarioSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScenarioInputError {
    #[error("scenario text is blank")]
    Blank,
}

/// The normalized subject of a recommendation request.
///
/// The text is kept verbatim; only its emptiness is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioInput {
    text: String,
    source: ScenarioSource,
}

impl ScenarioInput {
    pub fn new(text: impl Into<String>, source: ScenarioSource) -> Result<Self, ScenarioInputError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ScenarioInputError::Blank);
        }
        Ok(Self { text, source })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source(&self) -> ScenarioSource {
        self.source
    }
}
