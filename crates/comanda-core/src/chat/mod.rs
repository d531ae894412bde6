//! Conversation session: transcript bookkeeping and the turn engine.

pub mod session;
pub mod transcript;

pub use session::{ChatSession, SendOutcome, SessionError, TurnReply};
pub use transcript::{Transcript, UndoOutcome};
