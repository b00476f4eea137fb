//! Client error types.

use thiserror::Error;
use tokio_tungstenite::tungstenite;

/// Errors from establishing the chat connection.
///
/// This is the only fallible surface of the crate. Everything after a
/// successful handshake — a dropped socket, a send on a dead handle — is
/// deliberately not an error: those are logged and ignored, matching the
/// no-retry, no-surfacing contract of the UI.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The WebSocket handshake with the endpoint failed (connection refused,
    /// bad URL, protocol error).
    #[error("handshake with {url} failed: {source}")]
    Handshake {
        /// Endpoint we tried to reach.
        url: String,
        /// Underlying handshake failure.
        #[source]
        source: tungstenite::Error,
    },
}

impl ClientError {
    /// Create a handshake error for the given endpoint.
    #[must_use]
    pub fn handshake(url: impl Into<String>, source: tungstenite::Error) -> Self {
        Self::Handshake {
            url: url.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_endpoint() {
        let err = ClientError::handshake(
            "ws://127.0.0.1:8000/ws",
            tungstenite::Error::ConnectionClosed,
        );
        let msg = err.to_string();
        assert!(msg.contains("ws://127.0.0.1:8000/ws"));
        assert!(msg.contains("handshake"));
    }

    #[test]
    fn source_is_preserved() {
        let err = ClientError::handshake("ws://x/ws", tungstenite::Error::AttackAttempt);
        let source = std::error::Error::source(&err);
        assert!(source.is_some());
    }

    #[test]
    fn is_std_error() {
        let err = ClientError::handshake("ws://x/ws", tungstenite::Error::ConnectionClosed);
        let _: &dyn std::error::Error = &err;
    }
}
