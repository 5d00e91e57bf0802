//! # ares-chat - Interactive LLM Chat Client
//!
//! A small command-line chat client for hosted large-language-model APIs.
//! Each prompt is sent together with a rolling window of the conversation,
//! so the model keeps context across turns.
//!
//! ## Overview
//!
//! ares-chat can be used in two ways:
//!
//! 1. **As a CLI** - Run the `ares-chat` binary
//! 2. **As a library** - Drive a [`ConversationBuffer`] with any [`LLMClient`]
//!
//! ### Basic Example
//!
//! ```rust,ignore
//! use ares_chat::{ChatConfig, ConversationBuffer, Provider};
//!
//! #[tokio::main]
//! async fn main() -> ares_chat::Result<()> {
//!     let config = ChatConfig::load_or_default("chat.toml")?;
//!     let client = Provider::from_config(&config)?.create_client();
//!
//!     let mut conversation = ConversationBuffer::from_config(&config.conversation)?;
//!     let reply = conversation.ask(client.as_ref(), "What is 2+2?").await?;
//!     println!("{}", reply);
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`memory`] - The bounded conversation buffer
//! - [`llm`] - LLM client trait and provider implementations
//! - [`cli`] - Argument parsing, output helpers, and the chat loop
//! - [`utils`] - TOML configuration
//! - [`types`] - Messages and error handling

#![cfg_attr(docsrs, feature(doc_cfg))]

/// Command-line interface and interactive loop.
pub mod cli;
/// LLM provider clients and abstractions.
pub mod llm;
/// Conversation memory and context management.
pub mod memory;
/// Core types (messages, errors).
pub mod types;
/// Configuration utilities (TOML).
pub mod utils;

// Re-export commonly used types
pub use llm::{LLMClient, LLMResponse, Provider};
pub use memory::ConversationBuffer;
pub use types::{AppError, Message, MessageRole, Result};
pub use utils::toml_config::{ChatConfig, ConfigError};
