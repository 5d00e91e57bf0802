//! LLM Provider Clients and Abstractions
//!
//! This module provides the completion collaborator used by the conversation
//! buffer. Provider-specific HTTP details are hidden behind a common trait,
//! so the rest of the application works with any supported backend.
//!
//! # Architecture
//!
//! - [`LLMClient`] - The core trait that all providers implement
//! - [`Provider`] - Runtime provider selection, built from [`ChatConfig`](crate::ChatConfig)
//!
//! # Example
//!
//! ```ignore
//! use ares_chat::llm::Provider;
//!
//! let provider = Provider::from_config(&config)?;
//! let client = provider.create_client();
//!
//! let reply = client.generate("What is 2+2?").await?;
//! println!("{}", reply);
//! ```

/// Core LLM client trait and provider selection.
pub mod client;
/// Ollama `/api/chat` client.
pub mod ollama;
/// OpenAI Chat Completions client.
pub mod openai;

pub use client::{LLMClient, LLMResponse, Provider};
