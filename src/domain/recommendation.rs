use super::ScenarioInput;

/// Advisory text paired with the scenario it was produced for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub scenario: ScenarioInput,
    pub text: String,
}

impl Recommendation {
    pub fn new(scenario: ScenarioInput, text: String) -> Self {
        Self { scenario, text }
    }
}
