//! TOML-based configuration for ares-chat
//!
//! Configuration is read from `chat.toml` (or the path given with `--config`).
//! Every field has a default, so an absent default file simply yields the
//! built-in configuration. Secrets are never stored in the file; the file
//! names the environment variable that holds them.
//!
//! ```toml
//! log_level = "warn"
//!
//! [conversation]
//! initial_context = "You are a helpful, polite, polymath. Answer the user prompt being kindly."
//! history_cap = 20
//!
//! [model]
//! higher_tier = false
//! lower_tier_model = "gpt-3.5-turbo-0613"
//! higher_tier_model = "gpt-4-0613"
//! temperature = 0.0
//!
//! [provider]
//! type = "openai"
//! api_key_env = "OPENAI_API_KEY"
//! api_base = "https://api.openai.com/v1"
//! ```

use crate::memory::{DEFAULT_HISTORY_CAP, DEFAULT_INITIAL_CONTEXT, MIN_HISTORY_CAP};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "chat.toml";

/// Root configuration structure loaded from chat.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub conversation: ConversationConfig,

    #[serde(default)]
    pub model: ModelConfig,

    #[serde(default)]
    pub provider: ProviderConfig,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            conversation: ConversationConfig::default(),
            model: ModelConfig::default(),
            provider: ProviderConfig::default(),
        }
    }
}

// ============= Conversation Configuration =============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationConfig {
    /// Personality/instruction text used as the fixed system message
    #[serde(default = "default_initial_context")]
    pub initial_context: String,

    /// Maximum number of messages kept in the context, system message included
    #[serde(default = "default_history_cap")]
    pub history_cap: usize,
}

fn default_initial_context() -> String {
    DEFAULT_INITIAL_CONTEXT.to_string()
}

fn default_history_cap() -> usize {
    DEFAULT_HISTORY_CAP
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            initial_context: default_initial_context(),
            history_cap: default_history_cap(),
        }
    }
}

// ============= Model Configuration =============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Use the higher-tier model instead of the lower-tier one
    #[serde(default)]
    pub higher_tier: bool,

    #[serde(default = "default_lower_tier_model")]
    pub lower_tier_model: String,

    #[serde(default = "default_higher_tier_model")]
    pub higher_tier_model: String,

    #[serde(default)]
    pub temperature: f32,
}

fn default_lower_tier_model() -> String {
    "gpt-3.5-turbo-0613".to_string()
}

fn default_higher_tier_model() -> String {
    "gpt-4-0613".to_string()
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            higher_tier: false,
            lower_tier_model: default_lower_tier_model(),
            higher_tier_model: default_higher_tier_model(),
            temperature: 0.0,
        }
    }
}

// ============= Provider Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProviderConfig {
    OpenAI {
        /// Environment variable containing API key
        #[serde(default = "default_api_key_env")]
        api_key_env: String,
        #[serde(default = "default_openai_base")]
        api_base: String,
    },
    Ollama {
        #[serde(default = "default_ollama_url")]
        base_url: String,
    },
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

fn default_openai_base() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_ollama_url() -> String {
    "http://localhost:11434".to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig::OpenAI {
            api_key_env: default_api_key_env(),
            api_base: default_openai_base(),
        }
    }
}

// ============= Configuration Loading & Validation =============

/// Errors that can occur during configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Environment variable '{0}' is not set")]
    MissingEnvVar(String),
}

impl ChatConfig {
    /// Load configuration from a TOML file that must exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults when absent
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            let config = Self::default();
            config.validate()?;
            Ok(config)
        }
    }

    /// Parse and validate configuration text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ChatConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration for internal consistency
    ///
    /// Credentials are checked separately by [`ChatConfig::resolve_api_key`],
    /// so `config` can be inspected without an API key in the environment.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.conversation.history_cap < MIN_HISTORY_CAP {
            return Err(ConfigError::ValidationError(format!(
                "history_cap must be at least {} (got {})",
                MIN_HISTORY_CAP, self.conversation.history_cap
            )));
        }

        if !(0.0..=2.0).contains(&self.model.temperature) {
            return Err(ConfigError::ValidationError(format!(
                "temperature must be between 0.0 and 2.0 (got {})",
                self.model.temperature
            )));
        }

        if self.model.lower_tier_model.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "lower_tier_model must not be empty".to_string(),
            ));
        }
        if self.model.higher_tier_model.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "higher_tier_model must not be empty".to_string(),
            ));
        }

        match &self.provider {
            ProviderConfig::OpenAI {
                api_key_env,
                api_base,
            } => {
                if api_key_env.trim().is_empty() {
                    return Err(ConfigError::ValidationError(
                        "provider.api_key_env must not be empty".to_string(),
                    ));
                }
                if api_base.trim().is_empty() {
                    return Err(ConfigError::ValidationError(
                        "provider.api_base must not be empty".to_string(),
                    ));
                }
            }
            ProviderConfig::Ollama { base_url } => {
                if base_url.trim().is_empty() {
                    return Err(ConfigError::ValidationError(
                        "provider.base_url must not be empty".to_string(),
                    ));
                }
            }
        }

        Ok(())
    }

    /// Model identifier selected by the tier flag
    pub fn model_id(&self) -> &str {
        if self.model.higher_tier {
            &self.model.higher_tier_model
        } else {
            &self.model.lower_tier_model
        }
    }

    /// Read an API key from the named environment variable
    ///
    /// An empty value is treated the same as an unset one.
    pub fn resolve_api_key(&self, env_name: &str) -> Result<String, ConfigError> {
        std::env::var(env_name)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(env_name.to_string()))
    }
}
