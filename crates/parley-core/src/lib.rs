//! # parley-core
//!
//! Foundation types for the Parley chat client.
//!
//! This crate provides the shared vocabulary the client and front-end depend
//! on, with no I/O of its own:
//!
//! - **Entries**: [`ChatEntry`] with its [`Sender`] tag
//! - **Transcript**: append-only, ordered chat history
//! - **Draft**: the single pending-input cell
//! - **Rendering**: pure transcript/draft → display-line functions

#![deny(unsafe_code)]

pub mod draft;
pub mod entry;
pub mod render;
pub mod transcript;

pub use draft::Draft;
pub use entry::{ChatEntry, Sender};
pub use transcript::Transcript;
