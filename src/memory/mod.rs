//! Conversation memory for a single chat session.
//!
//! The [`ConversationBuffer`] owns the ordered message log that is sent with
//! every request. It is purely in-memory and lives as long as the session;
//! nothing is persisted across runs.

mod buffer;

pub use buffer::ConversationBuffer;

/// Default number of messages kept in context, system message included.
pub const DEFAULT_HISTORY_CAP: usize = 20;

/// Smallest usable cap: the system message plus the latest turn.
pub const MIN_HISTORY_CAP: usize = 2;

/// Default personality given to the assistant as the system message.
pub const DEFAULT_INITIAL_CONTEXT: &str =
    "You are a helpful, polite, polymath. Answer the user prompt being kindly.";
