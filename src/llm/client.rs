//! LLM Client abstractions and provider management
//!
//! This module provides a unified interface for the completion collaborator
//! that answers each turn of the conversation:
//! - **OpenAI**: Chat Completions API (and compatible endpoints)
//! - **Ollama**: Local inference through the `/api/chat` endpoint

use crate::types::{AppError, Message, Result};
use crate::utils::toml_config::{ChatConfig, ConfigError, ProviderConfig};
use async_trait::async_trait;

/// Generic LLM client trait for provider abstraction
///
/// All LLM providers implement this trait, allowing for easy swapping
/// between providers without changing application code.
#[async_trait]
pub trait LLMClient: Send + Sync {
    /// Generate a reply for an ordered conversation history
    ///
    /// The messages are sent exactly as given; the client never reorders,
    /// drops, or adds entries.
    async fn generate_with_history(&self, messages: &[Message]) -> Result<LLMResponse>;

    /// Generate a completion from a single prompt
    async fn generate(&self, prompt: &str) -> Result<String> {
        let response = self
            .generate_with_history(&[Message::user(prompt)])
            .await?;
        Ok(response.content)
    }

    /// Get the model name/identifier
    fn model_name(&self) -> &str;
}

/// Response from an LLM generation request
#[derive(Debug, Clone, PartialEq)]
pub struct LLMResponse {
    /// The text content of the response
    pub content: String,
    /// The reason generation stopped (e.g., "stop", "length"), if reported
    pub finish_reason: Option<String>,
}

impl LLMResponse {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            finish_reason: None,
        }
    }

    /// True when the provider cut the reply short because of a length limit
    pub fn is_truncated(&self) -> bool {
        self.finish_reason.as_deref() == Some("length")
    }
}

/// Provider enum for runtime selection
///
/// | Provider | Endpoint | Credential |
/// |----------|----------|------------|
/// | OpenAI | `{api_base}/chat/completions` | Bearer API key |
/// | Ollama | `{base_url}/api/chat` | none |
#[derive(Debug, Clone)]
pub enum Provider {
    /// OpenAI API provider (including Azure OpenAI and compatible APIs)
    ///
    /// # Example
    /// ```rust,ignore
    /// let provider = Provider::OpenAI {
    ///     api_key: "sk-...".to_string(),
    ///     api_base: "https://api.openai.com/v1".to_string(),
    ///     model: "gpt-3.5-turbo-0613".to_string(),
    ///     temperature: 0.0,
    /// };
    /// ```
    OpenAI {
        api_key: String,
        api_base: String,
        model: String,
        temperature: f32,
    },

    /// Ollama local LLM provider
    Ollama {
        base_url: String,
        model: String,
        temperature: f32,
    },
}

impl Provider {
    /// Resolve the provider described by the configuration
    ///
    /// The model identifier is chosen by the configured tier, and the OpenAI
    /// API key is read from the environment variable the configuration names.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if the credential is not set.
    pub fn from_config(config: &ChatConfig) -> std::result::Result<Self, ConfigError> {
        let model = config.model_id().to_string();
        let temperature = config.model.temperature;

        match &config.provider {
            ProviderConfig::OpenAI {
                api_key_env,
                api_base,
            } => Ok(Provider::OpenAI {
                api_key: config.resolve_api_key(api_key_env)?,
                api_base: api_base.clone(),
                model,
                temperature,
            }),
            ProviderConfig::Ollama { base_url } => Ok(Provider::Ollama {
                base_url: base_url.clone(),
                model,
                temperature,
            }),
        }
    }

    /// Create a client instance for this provider
    pub fn create_client(&self) -> Box<dyn LLMClient> {
        match self {
            Provider::OpenAI {
                api_key,
                api_base,
                model,
                temperature,
            } => Box::new(
                super::openai::OpenAIClient::new(api_key.clone(), api_base.clone(), model.clone())
                    .with_temperature(*temperature),
            ),
            Provider::Ollama {
                base_url,
                model,
                temperature,
            } => Box::new(
                super::ollama::OllamaClient::new(base_url.clone(), model.clone())
                    .with_temperature(*temperature),
            ),
        }
    }

    /// Get a human-readable name for this provider
    pub fn name(&self) -> &'static str {
        match self {
            Provider::OpenAI { .. } => "OpenAI",
            Provider::Ollama { .. } => "Ollama",
        }
    }

    /// Model identifier this provider will request
    pub fn model(&self) -> &str {
        match self {
            Provider::OpenAI { model, .. } | Provider::Ollama { model, .. } => model,
        }
    }
}

/// Map a failed HTTP exchange into an [`AppError::LLM`]
///
/// Providers report errors as `{"error": {"message": ...}}` or
/// `{"error": "..."}`; anything else is passed through verbatim.
pub(crate) fn http_error(provider: &str, status: reqwest::StatusCode, body: &str) -> AppError {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            let error = json.get("error")?;
            error
                .get("message")
                .and_then(|m| m.as_str())
                .or_else(|| error.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string());

    AppError::LLM(format!("{} request failed ({}): {}", provider, status, detail))
}
