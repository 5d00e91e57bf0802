use crate::llm::LLMClient;
use crate::types::{AppError, Message, MessageRole, Result};
use crate::utils::toml_config::ConversationConfig;
use std::fmt::Write as _;

use super::{DEFAULT_HISTORY_CAP, MIN_HISTORY_CAP};

/// Bounded, append-only conversation context.
///
/// Index 0 always holds the system message given at construction. Once the
/// buffer grows past its capacity the oldest non-system message (index 1) is
/// evicted, so the system message is never dropped and recent turns win.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationBuffer {
    messages: Vec<Message>,
    capacity: usize,
}

impl ConversationBuffer {
    /// Start a conversation with the default history cap.
    pub fn new(initial_context: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::system(initial_context)],
            capacity: DEFAULT_HISTORY_CAP,
        }
    }

    /// Start a conversation that keeps at most `capacity` messages.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if `capacity` cannot hold the system
    /// message plus the latest turn.
    pub fn with_capacity(initial_context: impl Into<String>, capacity: usize) -> Result<Self> {
        if capacity < MIN_HISTORY_CAP {
            return Err(AppError::InvalidInput(format!(
                "history cap must be at least {} (got {})",
                MIN_HISTORY_CAP, capacity
            )));
        }

        Ok(Self {
            messages: vec![Message::system(initial_context)],
            capacity,
        })
    }

    /// Build a buffer from the `[conversation]` config section.
    pub fn from_config(config: &ConversationConfig) -> Result<Self> {
        Self::with_capacity(config.initial_context.clone(), config.history_cap)
    }

    /// Append a message and evict the oldest non-system entries past capacity.
    pub fn append(&mut self, role: MessageRole, content: impl Into<String>) {
        self.messages.push(Message::new(role, content));
        self.trim_if_needed();
    }

    fn trim_if_needed(&mut self) {
        while self.messages.len() > self.capacity {
            let evicted = self.messages.remove(1);
            tracing::debug!(
                role = %evicted.role,
                capacity = self.capacity,
                "evicted oldest message from context"
            );
        }
    }

    /// Send `prompt` with the full context and record the reply.
    ///
    /// The user turn is appended before the request, so a failed request
    /// leaves it in the context. Errors from the client are returned as-is.
    pub async fn ask(&mut self, client: &dyn LLMClient, prompt: &str) -> Result<String> {
        self.append(MessageRole::User, prompt);

        tracing::debug!(
            model = client.model_name(),
            context_len = self.messages.len(),
            "requesting completion"
        );

        let response = client.generate_with_history(&self.messages).await?;

        if response.is_truncated() {
            tracing::warn!(model = client.model_name(), "reply was cut off by the length limit");
        }

        self.append(MessageRole::Assistant, response.content.clone());
        Ok(response.content)
    }

    /// Non-assistant messages with their position in the context.
    ///
    /// Each call yields a fresh iterator over the current state.
    pub fn context_entries(&self) -> impl Iterator<Item = (usize, &Message)> + '_ {
        self.messages
            .iter()
            .enumerate()
            .filter(|(_, message)| message.role != MessageRole::Assistant)
    }

    /// Render [`context_entries`](Self::context_entries) one per line as
    /// `index - role - content`.
    pub fn format_context(&self) -> String {
        let mut out = String::new();
        for (index, message) in self.context_entries() {
            let _ = writeln!(out, "{} - {} - {}", index, message.role, message.content);
        }
        out
    }

    /// The full context in request order, system message first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The system message; index 0 always holds it and is never evicted.
    pub fn system_message(&self) -> &Message {
        &self.messages[0]
    }

    /// Number of messages, system message included.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always false: the system message is never removed.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Maximum number of messages kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
