//! # parley-client
//!
//! Connection manager and session state for the Parley chat client.
//!
//! The crate owns exactly one effectful concern: the lifecycle of a single
//! WebSocket to the assistant endpoint. Everything it learns from the socket
//! is delivered to one consumer as [`ConnectionEvent`]s over a bounded
//! channel; everything it sends is raw text, fire-and-forget.
//!
//! - [`connect`] performs the handshake and returns the [`ChatConnection`]
//!   handle plus the event receiver
//! - [`ChatSession`] owns the transcript and pending input and applies events
//! - [`ConnectionState`] is the bounded `Unopened → Open → Closed` machine;
//!   `Closed` is terminal — a dead handle is never revived, a fresh session
//!   makes a fresh one

#![deny(unsafe_code)]

pub mod config;
pub mod connection;
pub mod errors;
pub mod event;
pub mod session;
pub mod state;

pub use config::{ClientConfig, DEFAULT_ENDPOINT};
pub use connection::{ChatConnection, connect};
pub use errors::ClientError;
pub use event::ConnectionEvent;
pub use session::ChatSession;
pub use state::ConnectionState;
