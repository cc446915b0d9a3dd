use serde::Serialize;

/// Role of a message in the remote conversational context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single message in the accumulated prompt history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMessage {
    pub role: Role,
    pub content: String,
}

impl ContextMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Opaque remote-side conversational context.
///
/// Configured once, at creation, with a fixed model identifier and system
/// instruction. The history grows by one completed exchange at a time and
/// is what makes replies context-aware. Never persisted; dies with the
/// process.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    model: String,
    history: Vec<ContextMessage>,
}

impl SessionHandle {
    /// Creates a fresh context seeded with the system instruction.
    pub fn new(model: impl Into<String>, system_instruction: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            history: vec![ContextMessage::system(system_instruction)],
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn history(&self) -> &[ContextMessage] {
        &self.history
    }

    /// Records a completed user/assistant exchange into the history.
    ///
    /// Only called for exchanges that ran to completion; a failed stream
    /// leaves the context exactly as it was.
    pub fn record_exchange(&mut self, utterance: &str, reply: &str) {
        self.history.push(ContextMessage::user(utterance));
        self.history.push(ContextMessage::assistant(reply));
    }
}
