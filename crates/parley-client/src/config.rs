//! Client configuration.

use serde::{Deserialize, Serialize};

/// The assistant endpoint. Fixed by design — there is no runtime
/// configuration surface for it.
pub const DEFAULT_ENDPOINT: &str = "ws://127.0.0.1:8000/ws";

/// Configuration for the chat connection.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClientConfig {
    /// WebSocket endpoint URL.
    pub endpoint: String,
    /// Capacity of the inbound event channel.
    pub event_buffer: usize,
    /// Capacity of the outbound frame channel.
    pub outbound_buffer: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            event_buffer: 256,
            outbound_buffer: 64,
        }
    }
}

impl ClientConfig {
    /// Config pointing at a different endpoint, with default buffers.
    ///
    /// Used by tests to target an in-process peer; the shipped binary always
    /// uses [`ClientConfig::default`].
    #[must_use]
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }
}
