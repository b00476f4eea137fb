//! The pending-input cell.

use serde::{Deserialize, Serialize};

/// The user's not-yet-submitted message text.
///
/// Edits replace the whole value unconditionally — no validation, no length
/// limit. The cell is cleared only after a successful send; a failed or
/// skipped send leaves it untouched so the user's typing is never lost.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Draft(String);

impl Draft {
    /// Create an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the draft text unconditionally.
    pub fn set(&mut self, text: impl Into<String>) {
        self.0 = text.into();
    }

    /// Reset the draft to empty.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// The current draft text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether there is nothing to submit.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for Draft {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
