//! The chat session — one view's worth of state, explicitly owned.
//!
//! Transcript, pending input, and the connection handle live in one struct
//! with the lifecycle of the view. All mutation happens here, on the single
//! task that drives the session; the socket tasks only ever talk to it
//! through the event channel.

use parley_core::{ChatEntry, Draft, Transcript};
use tracing::{debug, info};

use crate::connection::ChatConnection;
use crate::event::ConnectionEvent;

/// Owns the transcript, the pending input, and the connection handle.
pub struct ChatSession {
    transcript: Transcript,
    draft: Draft,
    connection: ChatConnection,
}

impl ChatSession {
    /// Create a session around a connection handle.
    ///
    /// The transcript starts empty and is reset only by dropping the whole
    /// session and making a new one.
    #[must_use]
    pub fn new(connection: ChatConnection) -> Self {
        Self {
            transcript: Transcript::new(),
            draft: Draft::new(),
            connection,
        }
    }

    /// Replace the pending input unconditionally. No validation, no limit.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.draft.set(text);
    }

    /// The current pending input.
    #[must_use]
    pub fn input(&self) -> &str {
        self.draft.as_str()
    }

    /// Submit the pending input.
    ///
    /// No-op (returning `false`) when the input is empty or no open
    /// connection exists. On a successful send the transcript gains one
    /// user entry with the submitted text and the pending input is cleared.
    pub fn submit(&mut self) -> bool {
        if self.draft.is_empty() {
            debug!("ignoring submit of empty input");
            return false;
        }
        if !self.connection.send(self.draft.as_str()) {
            return false;
        }
        self.transcript.push(ChatEntry::user(self.draft.as_str()));
        self.draft.clear();
        true
    }

    /// Apply one connection event.
    ///
    /// Inbound messages append an ai entry in receipt order; open/close are
    /// diagnostic notices with no user-visible state change.
    pub fn apply(&mut self, event: ConnectionEvent) {
        match event {
            ConnectionEvent::Opened => info!("assistant connected"),
            ConnectionEvent::Message(text) => self.transcript.push(ChatEntry::ai(text)),
            ConnectionEvent::Closed => info!("assistant disconnected"),
        }
    }

    /// The transcript, in order.
    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// The pending-input cell.
    #[must_use]
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Whether the underlying connection is open.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connection.is_open()
    }

    /// Release the underlying connection. Idempotent; also happens on drop.
    pub fn release(&self) {
        self.connection.release();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
