use super::MessageRole;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTurn {
    pub role: MessageRole,
    pub content: String,
}

impl PromptTurn {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}
