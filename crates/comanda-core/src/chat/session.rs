//! Turn engine for a single chat session.
//!
//! `ChatSession` owns the transcript and the provider handle for one
//! conversation. A turn appends the user message, streams the reply,
//! and only commits the assembled assistant message when the stream
//! completes. A failure at any point, including mid-stream, rolls the
//! just-added user message back so the failed turn leaves no residue.
//!
//! `send` takes `&mut self`, so the borrow checker serializes turns:
//! there is no way to issue a second `send` against the same transcript
//! while one is in flight.

use std::time::Instant;

use futures_util::StreamExt;
use thiserror::Error;
use tracing::{debug, warn};

use comanda_types::llm::{CompletionRequest, LlmError, StopReason, StreamEvent, Usage};

use crate::llm::provider::LlmProvider;

use super::transcript::{Transcript, UndoOutcome};

/// Errors surfaced from a conversation turn.
///
/// All of these are recoverable: the transcript has already been rolled
/// back and the session accepts the next turn.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("{0}")]
    Remote(#[from] LlmError),
}

/// A completed assistant reply with its metadata.
#[derive(Debug, Clone)]
pub struct TurnReply {
    pub content: String,
    pub usage: Usage,
    pub stop_reason: StopReason,
    pub response_ms: u64,
}

/// Result of a `send` call.
#[derive(Debug)]
pub enum SendOutcome {
    /// Empty input; nothing was sent and the transcript is unchanged.
    Ignored,
    /// The turn completed and both messages are in the transcript.
    Replied(TurnReply),
}

/// Sampling settings for the session's completion requests.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

/// One user's conversation with the ordering assistant.
pub struct ChatSession<P: LlmProvider> {
    provider: P,
    transcript: Transcript,
    system_prompt: String,
    settings: SessionSettings,
}

impl<P: LlmProvider> ChatSession<P> {
    /// Start a session: seed the transcript with the system prompt.
    pub fn start(provider: P, system_prompt: String, settings: SessionSettings) -> Self {
        Self {
            provider,
            transcript: Transcript::seeded(system_prompt.clone()),
            system_prompt,
            settings,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Send one user turn and stream the reply.
    ///
    /// Each text fragment is handed to `on_fragment` as it arrives, for
    /// progressive rendering; the assembled assistant message is only
    /// appended once the stream finishes. On failure the partial reply is
    /// discarded, the user message is rolled back, and the error is
    /// returned for inline display.
    pub async fn send<F>(
        &mut self,
        user_text: &str,
        mut on_fragment: F,
    ) -> Result<SendOutcome, SessionError>
    where
        F: FnMut(&str),
    {
        if user_text.is_empty() {
            return Ok(SendOutcome::Ignored);
        }

        self.transcript.push_user(user_text.to_string());

        let request = CompletionRequest {
            model: self.settings.model.clone(),
            messages: self.transcript.messages().to_vec(),
            max_tokens: self.settings.max_tokens,
            temperature: Some(self.settings.temperature),
            stream: true,
        };

        let started = Instant::now();
        let mut stream = self.provider.stream(request);

        let mut content = String::new();
        let mut usage = Usage::default();
        let mut stop_reason = StopReason::EndTurn;

        while let Some(event) = stream.next().await {
            match event {
                Ok(StreamEvent::TextDelta { text }) => {
                    on_fragment(&text);
                    content.push_str(&text);
                }
                Ok(StreamEvent::Usage(u)) => usage = u,
                Ok(StreamEvent::MessageDelta { stop_reason: sr }) => stop_reason = sr,
                Ok(StreamEvent::Done) => break,
                Ok(StreamEvent::Connected) => {}
                Err(e) => {
                    warn!(provider = self.provider.name(), error = %e, "turn failed; rolling back user message");
                    self.transcript.rollback_user();
                    return Err(e.into());
                }
            }
        }

        self.transcript.push_assistant(content.clone());
        let response_ms = started.elapsed().as_millis() as u64;
        debug!(
            provider = self.provider.name(),
            output_tokens = usage.output_tokens,
            response_ms,
            "turn completed"
        );

        Ok(SendOutcome::Replied(TurnReply {
            content,
            usage,
            stop_reason,
            response_ms,
        }))
    }

    /// Discard all history and reseed the transcript.
    pub fn reset(&mut self) {
        self.transcript.reset(self.system_prompt.clone());
    }

    /// Remove the last user/assistant pair, if any.
    pub fn undo(&mut self) -> UndoOutcome {
        self.transcript.undo_pair()
    }
}
