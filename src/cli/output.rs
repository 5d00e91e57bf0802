//! Colored output helpers for CLI
//!
//! Status and diagnostic output for ares-chat. The conversation transcript
//! itself is written by [`chat`](super::chat) so it stays free of styling.

use crate::utils::toml_config::{ChatConfig, ProviderConfig};
use owo_colors::OwoColorize;

/// Output style configuration
pub struct Output {
    /// Whether to use colored output
    pub colored: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create a new output helper with colors enabled
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Create a new output helper with colors disabled
    pub fn no_color() -> Self {
        Self { colored: false }
    }

    /// Print the session banner with the active model
    pub fn banner(&self, model: &str) {
        if self.colored {
            println!(
                "  {} {} {}",
                "ares-chat".bright_cyan().bold(),
                format!("v{}", env!("CARGO_PKG_VERSION")).dimmed(),
                format!("({})", model).dimmed()
            );
        } else {
            println!("  ares-chat v{} ({})", env!("CARGO_PKG_VERSION"), model);
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "•".blue(), message);
        } else {
            println!("  [INFO] {}", message);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        if self.colored {
            eprintln!("  {} {}", "✗".red().bold(), message.red());
        } else {
            eprintln!("  [ERROR] {}", message);
        }
    }

    /// Print a header for a section
    pub fn header(&self, title: &str) {
        if self.colored {
            println!("\n  {}", title.bright_white().bold().underline());
        } else {
            println!("\n  === {} ===", title);
        }
    }

    /// Print a key-value pair
    pub fn kv(&self, key: &str, value: &str) {
        if self.colored {
            println!("    {}: {}", key.dimmed(), value.bright_white());
        } else {
            println!("    {}: {}", key, value);
        }
    }

    /// Print a hint/tip message
    pub fn hint(&self, message: &str) {
        if self.colored {
            println!("\n  {} {}", "💡".dimmed(), message.dimmed().italic());
        } else {
            println!("\n  [TIP] {}", message);
        }
    }

    /// Print the resolved configuration for the `config` subcommand
    pub fn config_summary(&self, config: &ChatConfig) {
        self.header("Conversation");
        self.kv("initial_context", &config.conversation.initial_context);
        self.kv("history_cap", &config.conversation.history_cap.to_string());

        self.header("Model");
        self.kv("selected", config.model_id());
        self.kv(
            "tier",
            if config.model.higher_tier {
                "higher"
            } else {
                "lower"
            },
        );
        self.kv("temperature", &config.model.temperature.to_string());

        self.header("Provider");
        match &config.provider {
            ProviderConfig::OpenAI {
                api_key_env,
                api_base,
            } => {
                self.kv("type", "openai");
                self.kv("api_base", api_base);
                let key_state = if config.resolve_api_key(api_key_env).is_ok() {
                    "set"
                } else {
                    "not set"
                };
                self.kv("api_key_env", &format!("{} ({})", api_key_env, key_state));
            }
            ProviderConfig::Ollama { base_url } => {
                self.kv("type", "ollama");
                self.kv("base_url", base_url);
            }
        }

        self.kv("log_level", &config.log_level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_new() {
        let output = Output::new();
        assert!(output.colored);
    }

    #[test]
    fn test_output_no_color() {
        let output = Output::no_color();
        assert!(!output.colored);
    }

    #[test]
    fn test_output_methods_no_panic() {
        let output = Output::no_color();

        output.banner("gpt-3.5-turbo-0613");
        output.info("test info");
        output.error("test error");
        output.header("Test Header");
        output.kv("key", "value");
        output.hint("hint message");
        output.config_summary(&ChatConfig::default());
    }

    #[test]
    fn test_output_methods_colored_no_panic() {
        let output = Output::new();

        output.banner("gpt-4-0613");
        output.info("test info");
        output.error("test error");
        output.header("Test Header");
        output.kv("key", "value");
        output.hint("hint message");
        output.config_summary(&ChatConfig::default());
    }
}
