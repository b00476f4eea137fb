//! The chat connection — one WebSocket, owned for the life of the session.
//!
//! [`connect`] performs the handshake, then hands the socket halves to two
//! background tasks: a reader that forwards inbound frames as
//! [`ConnectionEvent`]s, and a writer that drains the outbound channel. The
//! [`ChatConnection`] handle left with the caller only touches channels and
//! the shared state cell, never the socket itself.

use futures::stream::{SplitSink, SplitStream};
use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::errors::ClientError;
use crate::event::ConnectionEvent;
use crate::state::{ConnectionState, StateCell};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Handle to the one live transport resource.
///
/// At most one exists per session; it is released (not reconnected) when the
/// session is torn down. Sending is fire-and-forget: a frame that cannot be
/// handed to the writer task is dropped with a debug log, never queued for
/// retry.
#[derive(Debug)]
pub struct ChatConnection {
    state: StateCell,
    outbound: mpsc::Sender<String>,
    cancel: CancellationToken,
}

impl ChatConnection {
    pub(crate) fn new(
        state: StateCell,
        outbound: mpsc::Sender<String>,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            state,
            outbound,
            cancel,
        }
    }

    /// A handle that never opened.
    ///
    /// Used when the handshake fails: the session keeps running, every send
    /// is silently skipped, and the returned event receiver yields nothing.
    #[must_use]
    pub fn detached() -> (Self, mpsc::Receiver<ConnectionEvent>) {
        let (_event_tx, event_rx) = mpsc::channel(1);
        let (outbound_tx, _outbound_rx) = mpsc::channel(1);
        let conn = Self::new(StateCell::new(), outbound_tx, CancellationToken::new());
        (conn, event_rx)
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> ConnectionState {
        self.state.get()
    }

    /// Whether frames can currently be sent.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Send a text frame, fire-and-forget.
    ///
    /// Returns `false` — and does nothing else — when the text is empty, the
    /// connection is not open, or the outbound channel cannot take the frame.
    /// No error is surfaced and nothing is queued for later.
    pub fn send(&self, text: &str) -> bool {
        if text.is_empty() {
            debug!("skipping send of empty message");
            return false;
        }
        if !self.state.is_open() {
            debug!(state = %self.state.get(), "skipping send, connection is not open");
            return false;
        }
        if self.outbound.try_send(text.to_owned()).is_err() {
            debug!("skipping send, outbound channel full or closed");
            return false;
        }
        true
    }

    /// Close the connection. Idempotent — releasing an already-closed handle
    /// does nothing.
    pub fn release(&self) {
        if self.state.mark_closed() {
            info!("chat connection released");
        }
        self.cancel.cancel();
    }
}

impl Drop for ChatConnection {
    fn drop(&mut self) {
        self.release();
    }
}

/// Open the WebSocket to the configured endpoint.
///
/// Returns the connection handle and the event channel carrying
/// [`ConnectionEvent::Opened`], inbound messages in delivery order, and
/// [`ConnectionEvent::Closed`]. There is no retry, timeout, or backoff: the
/// one handshake either succeeds or the caller gets the error to log.
pub async fn connect(
    config: &ClientConfig,
) -> Result<(ChatConnection, mpsc::Receiver<ConnectionEvent>), ClientError> {
    let (ws, _response) = connect_async(config.endpoint.as_str())
        .await
        .map_err(|source| ClientError::handshake(&config.endpoint, source))?;

    let (sink, stream) = ws.split();

    let state = StateCell::new();
    let _ = state.mark_open();
    info!(endpoint = %config.endpoint, "chat connection open");

    let (event_tx, event_rx) = mpsc::channel(config.event_buffer);
    let (outbound_tx, outbound_rx) = mpsc::channel(config.outbound_buffer);
    let cancel = CancellationToken::new();

    // Queued before the reader starts so it is always the first event out.
    let _ = event_tx.try_send(ConnectionEvent::Opened);

    drop(tokio::spawn(write_loop(
        sink,
        outbound_rx,
        state.clone(),
        cancel.clone(),
    )));
    drop(tokio::spawn(read_loop(
        stream,
        event_tx,
        state.clone(),
        cancel.clone(),
    )));

    Ok((ChatConnection::new(state, outbound_tx, cancel), event_rx))
}

/// Drain the outbound channel into the socket; send a close frame on release.
async fn write_loop(
    mut sink: SplitSink<WsStream, Message>,
    mut outbound: mpsc::Receiver<String>,
    state: StateCell,
    cancel: CancellationToken,
) {
    loop {
        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                let _ = sink.send(Message::Close(None)).await;
                break;
            }
            frame = outbound.recv() => match frame {
                Some(text) => {
                    if let Err(error) = sink.send(Message::text(text)).await {
                        debug!(%error, "outbound frame dropped, socket is gone");
                        let _ = state.mark_closed();
                        break;
                    }
                }
                None => break,
            },
        }
    }
}

/// Forward inbound frames as events until the socket dies or the handle is
/// released. Release stops the loop without emitting anything further.
async fn read_loop(
    mut stream: SplitStream<WsStream>,
    events: mpsc::Sender<ConnectionEvent>,
    state: StateCell,
    cancel: CancellationToken,
) {
    loop {
        // Biased so a released handle never forwards another frame.
        tokio::select! {
            biased;
            () = cancel.cancelled() => break,
            frame = stream.next() => match frame {
                Some(Ok(Message::Text(text))) => {
                    if events.send(ConnectionEvent::Message(text.to_string())).await.is_err() {
                        // Consumer gone; nobody left to deliver to.
                        break;
                    }
                }
                Some(Ok(Message::Close(_))) | None => {
                    info!("chat connection closed by remote");
                    let _ = state.mark_closed();
                    let _ = events.send(ConnectionEvent::Closed).await;
                    break;
                }
                Some(Ok(_)) => {
                    // Ping/pong/binary carry no chat text.
                }
                Some(Err(error)) => {
                    warn!(%error, "chat connection error");
                    let _ = state.mark_closed();
                    let _ = events.send(ConnectionEvent::Closed).await;
                    break;
                }
            },
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    // Socket-level behavior (handshake, frame flow, remote close) is covered
    // by tests/integration.rs against a real in-process peer. These tests
    // exercise the handle logic through its channels.

    use super::*;

    fn open_connection(capacity: usize) -> (ChatConnection, mpsc::Receiver<String>) {
        let (tx, rx) = mpsc::channel(capacity);
        let state = StateCell::new();
        let _ = state.mark_open();
        (
            ChatConnection::new(state, tx, CancellationToken::new()),
            rx,
        )
    }

    #[tokio::test]
    async fn send_hands_frame_to_writer() {
        let (conn, mut rx) = open_connection(8);
        assert!(conn.send("hello"));
        assert_eq!(rx.recv().await.unwrap(), "hello");
    }

    #[tokio::test]
    async fn send_empty_is_skipped() {
        let (conn, mut rx) = open_connection(8);
        assert!(!conn.send(""));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn send_while_unopened_is_skipped() {
        let (tx, _rx) = mpsc::channel(8);
        let conn = ChatConnection::new(StateCell::new(), tx, CancellationToken::new());
        assert!(!conn.is_open());
        assert!(!conn.send("hello"));
    }

    #[test]
    fn send_after_release_is_skipped() {
        let (conn, _rx) = open_connection(8);
        conn.release();
        assert!(!conn.send("hello"));
        assert_eq!(conn.state(), ConnectionState::Closed);
    }

    #[test]
    fn send_with_full_channel_is_dropped() {
        let (conn, _rx) = open_connection(1);
        assert!(conn.send("first"));
        assert!(!conn.send("second"), "full channel drops the frame");
    }

    #[test]
    fn release_is_idempotent() {
        let (conn, _rx) = open_connection(8);
        conn.release();
        conn.release();
        conn.release();
        assert_eq!(conn.state(), ConnectionState::Closed);
    }

    #[test]
    fn drop_releases() {
        let (tx, _rx) = mpsc::channel(8);
        let state = StateCell::new();
        let _ = state.mark_open();
        let shared = state.clone();
        let conn = ChatConnection::new(state, tx, CancellationToken::new());
        drop(conn);
        assert!(shared.get().is_closed());
    }

    #[tokio::test]
    async fn detached_handle_never_opens() {
        let (conn, mut events) = ChatConnection::detached();
        assert_eq!(conn.state(), ConnectionState::Unopened);
        assert!(!conn.send("hello"));
        assert!(events.recv().await.is_none(), "no events ever arrive");
    }

    #[test]
    fn detached_release_is_harmless() {
        let (conn, _events) = ChatConnection::detached();
        conn.release();
        conn.release();
        assert_eq!(conn.state(), ConnectionState::Closed);
    }
}
