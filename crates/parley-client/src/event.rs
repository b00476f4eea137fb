//! Events delivered from the socket tasks to the session.
//!
//! Open/close callbacks and inbound frames from the transport all arrive
//! through one channel, in delivery order, so the consumer never has to
//! reason about interleaving.

/// A notification from the connection's socket tasks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConnectionEvent {
    /// The handshake completed and the socket is ready. Diagnostic only.
    Opened,
    /// One inbound text frame, payload verbatim.
    Message(String),
    /// The socket is gone — remote close or error. Diagnostic only; no
    /// reconnect follows.
    Closed,
}

impl ConnectionEvent {
    /// Whether this event carries a chat message.
    #[must_use]
    pub fn is_message(&self) -> bool {
        matches!(self, Self::Message(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_carries_payload() {
        let evt = ConnectionEvent::Message("hello".into());
        assert!(evt.is_message());
        assert_eq!(evt, ConnectionEvent::Message("hello".into()));
    }

    #[test]
    fn lifecycle_events_are_not_messages() {
        assert!(!ConnectionEvent::Opened.is_message());
        assert!(!ConnectionEvent::Closed.is_message());
    }
}
