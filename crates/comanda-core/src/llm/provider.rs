//! LlmProvider trait definition.
//!
//! The seam between the session engine and the remote completion API.
//! The concrete implementation lives in comanda-infra
//! (`OpenAiCompatibleProvider`); tests substitute a mock that replays a
//! fixed fragment sequence.

use std::pin::Pin;

use futures_util::Stream;

use comanda_types::llm::{CompletionRequest, LlmError, StreamEvent};

/// Boxed stream of provider events.
pub type EventStream = Pin<Box<dyn Stream<Item = Result<StreamEvent, LlmError>> + Send + 'static>>;

/// Trait for remote completion backends.
///
/// `stream` returns a boxed stream rather than an RPITIT future so the
/// provider stays object-safe behind generic session engines.
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "deepseek").
    fn name(&self) -> &str;

    /// Send a streaming completion request. The returned stream yields
    /// incremental events terminating in `Done`, or an error.
    fn stream(&self, request: CompletionRequest) -> EventStream;
}
