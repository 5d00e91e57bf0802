//! CLI module for ares-chat
//!
//! Provides command-line interface parsing for the ares-chat binary.
//! Uses clap for argument parsing and owo-colors for colored terminal output.

pub mod chat;
pub mod output;

use crate::utils::toml_config::{ChatConfig, ConfigError, DEFAULT_CONFIG_FILE};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ares-chat - interactive chat with a hosted LLM
///
/// Keeps a rolling conversation context and sends it with every prompt.
#[derive(Parser, Debug)]
#[command(
    name = "ares-chat",
    author = "Dirmacs <build@dirmacs.com>",
    version,
    about = "ares-chat - interactive chat with a hosted LLM",
    long_about = "Interactive command-line chat client for a hosted large-language-model API.\n\
                  Each prompt is sent together with the recent conversation history.\n\n\
                  The API key is read from the environment (OPENAI_API_KEY by default).\n\
                  Type 'quit' to leave the session.",
    after_help = "EXAMPLES:\n    \
                  ares-chat                       # Start chatting (reads chat.toml if present)\n    \
                  ares-chat --higher-tier         # Use the higher-tier model\n    \
                  ares-chat --config my.toml      # Use a custom config file\n    \
                  ares-chat config                # Show the resolved configuration"
)]
pub struct Cli {
    /// Path to the configuration file (defaults to ./chat.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Model identifier to use (overrides the configured tier model)
    #[arg(short, long, global = true)]
    pub model: Option<String>,

    /// Use the higher-tier model
    #[arg(long, global = true)]
    pub higher_tier: bool,

    /// Print the non-assistant context before every request
    #[arg(long, global = true)]
    pub show_context: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Start an interactive chat session (default)
    Chat,

    /// Show the resolved configuration
    Config,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Load the configuration file and apply command-line overrides
    ///
    /// An explicit `--config` path must exist; the default `chat.toml` is
    /// optional.
    pub fn load_config(&self) -> Result<ChatConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => ChatConfig::load(path)?,
            None => ChatConfig::load_or_default(DEFAULT_CONFIG_FILE)?,
        };

        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Apply `--higher-tier` and `--model` on top of a loaded configuration
    pub fn apply_overrides(&self, config: &mut ChatConfig) {
        if self.higher_tier {
            config.model.higher_tier = true;
        }

        if let Some(model) = &self.model {
            if config.model.higher_tier {
                config.model.higher_tier_model = model.clone();
            } else {
                config.model.lower_tier_model = model.clone();
            }
        }
    }
}
