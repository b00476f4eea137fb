//! Chat entry types.
//!
//! A transcript line is a piece of text tagged with who produced it. Entries
//! are immutable once created; the only thing a view ever does with them is
//! append them to a [`Transcript`](crate::Transcript) and display them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Who produced a chat entry.
///
/// The tag exists for display purposes only — there is no behavioral
/// difference between the two once an entry is in the transcript.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// Typed by the local user.
    User,
    /// Received from the assistant end of the socket.
    Ai,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Ai => write!(f, "ai"),
        }
    }
}

/// One line of the chat transcript.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    /// Raw message text, exactly as typed or received.
    pub text: String,
    /// Who produced it.
    pub sender: Sender,
}

impl ChatEntry {
    /// Create an entry for text the local user sent.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
        }
    }

    /// Create an entry for text received from the assistant.
    #[must_use]
    pub fn ai(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Ai,
        }
    }

    /// Returns `true` if this entry came from the local user.
    #[must_use]
    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
