//! Interactive chat loop.
//!
//! Reads one prompt per line, sends it through the [`ConversationBuffer`],
//! and writes the reply. The loop ends on `quit` (any case) or end of input.

use super::output::Output;
use crate::llm::LLMClient;
use crate::memory::ConversationBuffer;
use crate::types::Result;
use std::io::{BufRead, Write};

pub const PROMPT: &str = "Please enter your prompt: ";
pub const QUIT_COMMAND: &str = "quit";
pub const EXIT_MESSAGE: &str = "Exiting...";

/// Indentation placed before every reply
const REPLY_PREFIX: &str = "  ";

/// Options for a chat session
#[derive(Debug, Clone, Copy, Default)]
pub struct ChatOptions {
    /// Write the non-assistant context before each request
    pub show_context: bool,
}

/// Counters reported when the session ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChatSummary {
    pub replies: usize,
    pub failures: usize,
}

/// Only an exact, case-insensitive `quit` ends the session; padded input is a prompt.
pub fn is_quit(input: &str) -> bool {
    input.eq_ignore_ascii_case(QUIT_COMMAND)
}

/// Run the prompt/reply loop until the user quits or input ends.
///
/// A failed request is reported through `output` and the session continues;
/// only I/O errors on `input` or `transcript` end the loop early.
pub async fn run_chat<R, W>(
    buffer: &mut ConversationBuffer,
    client: &dyn LLMClient,
    input: R,
    transcript: &mut W,
    output: &Output,
    options: ChatOptions,
) -> Result<ChatSummary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = ChatSummary::default();
    let mut lines = input.lines();

    loop {
        write!(transcript, "\n{}", PROMPT)?;
        transcript.flush()?;

        let prompt = match lines.next() {
            Some(line) => line?,
            None => {
                // EOF leaves the cursor after the prompt
                writeln!(transcript)?;
                tracing::debug!("input closed");
                break;
            }
        };

        if is_quit(&prompt) {
            break;
        }

        if options.show_context {
            write!(transcript, "{}", buffer.format_context())?;
        }

        match buffer.ask(client, &prompt).await {
            Ok(reply) => {
                summary.replies += 1;
                writeln!(transcript, "{}{}", REPLY_PREFIX, reply)?;
            }
            Err(e) => {
                summary.failures += 1;
                tracing::error!(error = %e, "completion request failed");
                output.error(&e.to_string());
            }
        }
    }

    writeln!(transcript, "{}", EXIT_MESSAGE)?;
    transcript.flush()?;

    tracing::info!(
        replies = summary.replies,
        failures = summary.failures,
        "chat session ended"
    );

    Ok(summary)
}
