//! Pure rendering of chat state to display lines.
//!
//! The front-end owns the terminal; this module only turns state into
//! strings. Output is a pure function of the transcript and draft passed in,
//! so the same state always renders the same lines.

use crate::draft::Draft;
use crate::entry::{ChatEntry, Sender};
use crate::transcript::Transcript;

/// Display label for a sender tag.
#[must_use]
pub fn sender_label(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "you",
        Sender::Ai => "assistant",
    }
}

/// Render a single entry as one display line.
#[must_use]
pub fn entry_line(entry: &ChatEntry) -> String {
    format!("{:>9} | {}", sender_label(entry.sender), entry.text)
}

/// Render the whole transcript, one line per entry, in order.
#[must_use]
pub fn transcript_lines(transcript: &Transcript) -> Vec<String> {
    transcript.iter().map(entry_line).collect()
}

/// Render the input prompt, showing the current draft after the marker.
#[must_use]
pub fn prompt_line(draft: &Draft) -> String {
    format!("> {}", draft.as_str())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
