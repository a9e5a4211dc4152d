//! Command history with cursor-based navigation.
//!
//! Entries are stored most-recent-first. The cursor is `None` while the user
//! edits a fresh line and `Some(i)` while recalling `entries[i]`; it can never
//! point past the oldest entry.

use std::collections::VecDeque;

/// Previously submitted lines plus a navigation cursor.
#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    entries: VecDeque<String>,
    cursor: Option<usize>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current cursor; `None` means "not navigating".
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Entry by recency (0 = most recent).
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// The `n` most recent entries, most recent first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &str> {
        self.entries.iter().take(n).map(String::as_str)
    }

    /// Step to an older entry. Returns the new draft text, or `None` when
    /// already at the oldest entry (or the history is empty).
    pub fn up(&mut self) -> Option<&str> {
        let next = self.cursor.map_or(0, |c| c + 1);
        if next >= self.entries.len() {
            log::trace!("history: up clamped at {:?}", self.cursor);
            return None;
        }
        self.cursor = Some(next);
        Some(self.entries[next].as_str())
    }

    /// Step to a newer entry. Leaving the newest entry returns `""` (a fresh
    /// line); when not navigating this is a no-op returning `None`.
    pub fn down(&mut self) -> Option<&str> {
        match self.cursor {
            None => None,
            Some(0) => {
                self.cursor = None;
                Some("")
            },
            Some(c) => {
                self.cursor = Some(c - 1);
                Some(self.entries[c - 1].as_str())
            },
        }
    }

    /// Record a submitted line (duplicates included) and stop navigating.
    pub fn record_submission(&mut self, text: &str) {
        self.entries.push_front(text.to_string());
        self.cursor = None;
    }

    /// Leave navigation without changing the entries.
    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }
}
