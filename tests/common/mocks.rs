//! Mock implementations for testing.
//!
//! This module provides a mock LLM client that can be used across different
//! test files without duplication.

use ares_chat::llm::{LLMClient, LLMResponse};
use ares_chat::types::{AppError, Message, MessageRole, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

enum Behavior {
    /// Always reply with the same text
    Fixed(String),
    /// Reply with `ECHO:` followed by the last user message
    Echo,
    /// Always fail
    Failing,
    /// Pop one scripted outcome per call
    Scripted(Mutex<VecDeque<std::result::Result<String, String>>>),
}

/// Mock LLM client for testing with configurable responses.
///
/// Every call records the exact message sequence it received, so tests can
/// check what was sent to the completion collaborator.
///
/// # Examples
///
/// ```ignore
/// // Create a client that returns a simple response
/// let client = MockLLMClient::new("Hello, world!");
///
/// // Echo the latest user message back
/// let client = MockLLMClient::echo();
///
/// // Create a client that always fails
/// let client = MockLLMClient::failing();
/// ```
pub struct MockLLMClient {
    behavior: Behavior,
    requests: Mutex<Vec<Vec<Message>>>,
}

impl MockLLMClient {
    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a new mock client that returns the given response.
    pub fn new(response: &str) -> Self {
        Self::with_behavior(Behavior::Fixed(response.to_string()))
    }

    /// Create a mock client that answers `ECHO:<last user content>`.
    pub fn echo() -> Self {
        Self::with_behavior(Behavior::Echo)
    }

    /// Create a mock client that always returns an error.
    pub fn failing() -> Self {
        Self::with_behavior(Behavior::Failing)
    }

    /// Create a mock client that plays back the given outcomes in order.
    /// `Err` entries become [`AppError::LLM`] failures.
    pub fn scripted(outcomes: Vec<std::result::Result<&str, &str>>) -> Self {
        let queue = outcomes
            .into_iter()
            .map(|o| o.map(str::to_string).map_err(str::to_string))
            .collect();
        Self::with_behavior(Behavior::Scripted(Mutex::new(queue)))
    }

    /// All message sequences received so far, oldest first.
    pub fn requests(&self) -> Vec<Vec<Message>> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl LLMClient for MockLLMClient {
    async fn generate_with_history(&self, messages: &[Message]) -> Result<LLMResponse> {
        self.requests.lock().unwrap().push(messages.to_vec());

        match &self.behavior {
            Behavior::Fixed(response) => Ok(LLMResponse::new(response.clone())),
            Behavior::Echo => {
                let last_user = messages
                    .iter()
                    .rev()
                    .find(|m| m.role == MessageRole::User)
                    .map(|m| m.content.as_str())
                    .unwrap_or_default();
                Ok(LLMResponse::new(format!("ECHO:{}", last_user)))
            }
            Behavior::Failing => Err(AppError::LLM("Mock LLM failure".to_string())),
            Behavior::Scripted(queue) => match queue.lock().unwrap().pop_front() {
                Some(Ok(reply)) => Ok(LLMResponse::new(reply)),
                Some(Err(e)) => Err(AppError::LLM(e)),
                None => Err(AppError::LLM("Mock script exhausted".to_string())),
            },
        }
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
