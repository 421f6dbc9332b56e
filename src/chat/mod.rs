//! Chatbot widget logic: keyword rules plus the session wrapper the UI
//! drives.

pub mod rules;

use std::time::Duration;

use tracing::debug;

pub use rules::{ReplyResolver, ReplyRule, DEFAULT_KEYWORD};

/// Pause before answering, to read as "thinking" rather than instant.
const DEFAULT_THINKING_DELAY: Duration = Duration::from_millis(600);

/// A chat session over the reply resolver.
///
/// Handles the input hygiene the resolver itself doesn't: trims whitespace
/// and drops blank messages. The resolver stays pure; the session owns the
/// presentational thinking delay.
pub struct ChatSession {
    resolver: ReplyResolver,
    thinking_delay: Duration,
}

impl ChatSession {
    pub fn new(resolver: ReplyResolver) -> Self {
        Self {
            resolver,
            thinking_delay: DEFAULT_THINKING_DELAY,
        }
    }

    /// Override the thinking delay (zero for tests).
    pub fn with_thinking_delay(mut self, delay: Duration) -> Self {
        self.thinking_delay = delay;
        self
    }

    /// Respond to one visitor message.
    ///
    /// Returns `None` for blank input (the UI sends nothing in that case).
    pub async fn respond(&self, input: &str) -> Option<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            debug!("Ignoring blank chat input");
            return None;
        }

        if !self.thinking_delay.is_zero() {
            tokio::time::sleep(self.thinking_delay).await;
        }

        Some(self.resolver.resolve(trimmed).to_string())
    }

    pub fn resolver(&self) -> &ReplyResolver {
        &self.resolver
    }
}
