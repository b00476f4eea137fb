//! Connection lifecycle state machine.
//!
//! A handle moves `Unopened → Open → Closed` and never back. `Closed` is
//! terminal: the remote end dropping us, a socket error, and an explicit
//! release all land in the same state, and a new handle is only ever made by
//! building a whole new session.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

/// Lifecycle state of one connection handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionState {
    /// Created but the handshake has not completed.
    Unopened,
    /// Handshake done; frames can flow.
    Open,
    /// Gone, for any reason. Terminal.
    Closed,
}

impl ConnectionState {
    /// Whether frames can be sent in this state.
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Whether the handle is in its terminal state.
    #[must_use]
    pub fn is_closed(self) -> bool {
        matches!(self, Self::Closed)
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unopened => write!(f, "unopened"),
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

/// Shared state cell, written by the socket tasks and read by the handle.
#[derive(Clone, Debug)]
pub(crate) struct StateCell(Arc<Mutex<ConnectionState>>);

impl StateCell {
    /// New cell in the `Unopened` state.
    pub(crate) fn new() -> Self {
        Self(Arc::new(Mutex::new(ConnectionState::Unopened)))
    }

    /// Current state.
    pub(crate) fn get(&self) -> ConnectionState {
        *self.0.lock()
    }

    /// Whether frames can currently be sent.
    pub(crate) fn is_open(&self) -> bool {
        self.get().is_open()
    }

    /// Transition `Unopened → Open`. Returns `false` from any other state.
    pub(crate) fn mark_open(&self) -> bool {
        let mut state = self.0.lock();
        if *state == ConnectionState::Unopened {
            *state = ConnectionState::Open;
            true
        } else {
            false
        }
    }

    /// Transition to `Closed`. Returns `false` if already closed.
    pub(crate) fn mark_closed(&self) -> bool {
        let mut state = self.0.lock();
        if state.is_closed() {
            false
        } else {
            *state = ConnectionState::Closed;
            true
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
