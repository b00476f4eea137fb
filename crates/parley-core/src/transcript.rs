//! Append-only chat history.

use serde::{Deserialize, Serialize};

use crate::entry::{ChatEntry, Sender};

/// Ordered, append-only history of chat entries for one session.
///
/// Insertion order is the only meaningful order: it doubles as display order
/// and as send/receive order. Entries are never removed or mutated; the whole
/// transcript is dropped only when the session it belongs to is torn down.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    entries: Vec<ChatEntry>,
}

impl Transcript {
    /// Create an empty transcript.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry at the end.
    pub fn push(&mut self, entry: ChatEntry) {
        self.entries.push(entry);
    }

    /// View the entries in order.
    #[must_use]
    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    /// Iterate over the entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ChatEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the transcript has no entries yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recently appended entry, if any.
    #[must_use]
    pub fn last(&self) -> Option<&ChatEntry> {
        self.entries.last()
    }

    /// Count the entries with the given sender tag.
    #[must_use]
    pub fn count_from(&self, sender: Sender) -> usize {
        self.entries.iter().filter(|e| e.sender == sender).count()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a ChatEntry;
    type IntoIter = std::slice::Iter<'a, ChatEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn new_is_empty() {
        let t = Transcript::new();
        assert!(t.is_empty());
        assert_eq!(t.len(), 0);
        assert!(t.last().is_none());
    }

    #[test]
    fn push_appends_in_order() {
        let mut t = Transcript::new();
        t.push(ChatEntry::user("first"));
        t.push(ChatEntry::ai("second"));
        t.push(ChatEntry::ai("third"));

        assert_eq!(t.len(), 3);
        assert_eq!(t.entries()[0].text, "first");
        assert_eq!(t.entries()[1].text, "second");
        assert_eq!(t.entries()[2].text, "third");
        assert_eq!(t.last().unwrap().text, "third");
    }

    #[test]
    fn count_from_splits_by_sender() {
        let mut t = Transcript::new();
        t.push(ChatEntry::user("a"));
        t.push(ChatEntry::ai("b"));
        t.push(ChatEntry::ai("c"));

        assert_eq!(t.count_from(Sender::User), 1);
        assert_eq!(t.count_from(Sender::Ai), 2);
    }

    #[test]
    fn iterates_in_insertion_order() {
        let mut t = Transcript::new();
        t.push(ChatEntry::ai("x"));
        t.push(ChatEntry::user("y"));

        let texts: Vec<&str> = t.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["x", "y"]);

        let borrowed: Vec<&str> = (&t).into_iter().map(|e| e.text.as_str()).collect();
        assert_eq!(borrowed, texts);
    }

    #[test]
    fn serde_is_transparent_list() {
        let mut t = Transcript::new();
        t.push(ChatEntry::user("hi"));
        let json = serde_json::to_value(&t).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["sender"], "user");

        let back: Transcript = serde_json::from_value(json).unwrap();
        assert_eq!(back, t);
    }

    proptest! {
        // Every appended payload comes back in receipt order, one entry each.
        #[test]
        fn append_preserves_payloads_and_order(texts in proptest::collection::vec(".*", 0..32)) {
            let mut t = Transcript::new();
            for text in &texts {
                t.push(ChatEntry::ai(text.clone()));
            }

            prop_assert_eq!(t.len(), texts.len());
            prop_assert_eq!(t.count_from(Sender::Ai), texts.len());
            for (entry, text) in t.iter().zip(&texts) {
                prop_assert_eq!(&entry.text, text);
            }
        }
    }
}
