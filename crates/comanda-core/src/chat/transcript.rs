//! Ordered transcript of role-tagged messages.
//!
//! Invariants: exactly one system message, always first, never shown to
//! the user; after it, roles alternate user/assistant, except that the
//! last entry may transiently be an un-replied user message while a turn
//! is in flight. Messages are never mutated, only appended or removed
//! whole (rollback, undo, reset).

use comanda_types::llm::{Message, MessageRole};

/// Result of an undo request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoOutcome {
    /// The last user/assistant pair was removed.
    Removed,
    /// Only the system message remained; nothing to remove.
    NothingToRemove,
}

/// One conversation's ordered message sequence.
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Create a transcript seeded with exactly one system message.
    pub fn seeded(system_prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::system(system_prompt)],
        }
    }

    /// All messages, system message first. This is what goes on the wire.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The displayable transcript: everything after the system message.
    pub fn without_system(&self) -> &[Message] {
        &self.messages[1..]
    }

    /// Number of completed user/assistant pairs.
    pub fn pair_count(&self) -> usize {
        self.without_system()
            .iter()
            .filter(|m| m.role == MessageRole::Assistant)
            .count()
    }

    pub(crate) fn push_user(&mut self, content: String) {
        self.messages.push(Message::user(content));
    }

    pub(crate) fn push_assistant(&mut self, content: String) {
        self.messages.push(Message::assistant(content));
    }

    /// Remove the trailing user message of a failed turn.
    ///
    /// Only ever called by the session engine after a remote failure, so
    /// the transcript returns to its pre-turn state with no residue.
    pub(crate) fn rollback_user(&mut self) {
        debug_assert!(
            self.messages
                .last()
                .is_some_and(|m| m.role == MessageRole::User)
        );
        self.messages.pop();
    }

    /// Discard all history and reseed with a fresh system message.
    pub fn reset(&mut self, system_prompt: impl Into<String>) {
        self.messages.clear();
        self.messages.push(Message::system(system_prompt));
    }

    /// Remove exactly the last assistant and last user message, if a
    /// completed pair exists beyond the system message.
    pub fn undo_pair(&mut self) -> UndoOutcome {
        let is_complete_pair = self.messages.len() >= 3
            && self
                .messages
                .last()
                .is_some_and(|m| m.role == MessageRole::Assistant);
        if !is_complete_pair {
            return UndoOutcome::NothingToRemove;
        }
        self.messages.pop();
        self.messages.pop();
        UndoOutcome::Removed
    }
}
