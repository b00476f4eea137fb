//! # parley-term
//!
//! Terminal chat for a local AI assistant.
//!
//! Each line typed becomes the pending input and is submitted on enter; the
//! transcript grows as frames arrive. The endpoint is fixed — if the
//! assistant is not listening there, the client logs a notice and keeps
//! running with a dead handle, silently dropping every send.

#![deny(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use parley_client::{ChatConnection, ChatSession, ClientConfig, connect};
use parley_core::render;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Terminal chat client.
#[derive(Parser, Debug)]
#[command(name = "parley", about = "Terminal chat for a local AI assistant")]
struct Cli {
    /// Tracing filter for diagnostic output (`RUST_LOG` takes precedence).
    #[arg(long, default_value = "info")]
    log_filter: String,
}

/// Title line, printed once at startup.
const BANNER: &str = "AI Assistant";

/// Input hint, printed under the banner.
const PLACEHOLDER: &str = "Type your message and press enter. Ctrl-C to quit.";

/// Print the newest transcript entry.
fn print_last_entry(session: &ChatSession) {
    if let Some(entry) = session.transcript().last() {
        println!("{}", render::entry_line(entry));
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("{BANNER}");
    println!("{PLACEHOLDER}");

    // One connection attempt, no retry. A refused handshake leaves the
    // session on a detached handle, same as the page with a dead socket.
    let config = ClientConfig::default();
    let (connection, mut events) = match connect(&config).await {
        Ok(pair) => pair,
        Err(error) => {
            warn!(%error, "assistant endpoint unreachable, messages will be dropped");
            ChatConnection::detached()
        }
    };
    let mut session = ChatSession::new(connection);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut events_done = false;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("reading stdin failed")? else {
                    break; // stdin closed
                };
                session.set_input(line);
                if session.submit() {
                    print_last_entry(&session);
                } else {
                    debug!("submit skipped");
                }
            }
            event = events.recv(), if !events_done => {
                match event {
                    Some(event) => {
                        let inbound = event.is_message();
                        session.apply(event);
                        if inbound {
                            print_last_entry(&session);
                        }
                    }
                    None => events_done = true,
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    session.release();
    Ok(())
}
