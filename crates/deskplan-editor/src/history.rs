//! Bounded, diff-based undo history over full scene snapshots.
//!
//! The stack holds at most [`MAX_HISTORY_LENGTH`] entries. Each
//! entry pairs a full snapshot with the structural diff from its
//! predecessor; the snapshot is authoritative for undo, the diff is
//! stored for incremental consumers. Committing while the cursor
//! sits behind the newest entry discards everything after the
//! cursor (linear undo: redo history is invalidated by any new
//! action).

use tracing::debug;

use deskplan_core::constants::MAX_HISTORY_LENGTH;

use crate::diff::{calculate_diff, SceneDiff};
use crate::serialization::SceneSnapshot;

/// One committed state: the full snapshot plus the delta from the
/// previous entry.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub state: SceneSnapshot,
    pub diff: SceneDiff,
}

/// Ordered history with a current-position cursor.
#[derive(Debug, Clone)]
pub struct HistoryStack {
    entries: Vec<HistoryEntry>,
    /// Index of the entry matching the live scene; `None` while
    /// empty.
    cursor: Option<usize>,
    max_length: usize,
}

impl HistoryStack {
    /// Creates an empty stack with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(MAX_HISTORY_LENGTH)
    }

    /// Creates an empty stack holding at most `max_length` entries.
    pub fn with_capacity(max_length: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: None,
            max_length,
        }
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cursor position, or `None` while the stack is empty.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Whether an undo would restore anything.
    pub fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(c) if c > 0)
    }

    /// The entry at the cursor.
    pub fn current(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.cursor?)
    }

    /// Commits a snapshot of the current scene state.
    ///
    /// Entries past the cursor are truncated, the diff against the
    /// preceding entry (or the empty state for the first commit) is
    /// computed and stored, and the oldest entry is evicted once
    /// the cap is exceeded.
    pub fn commit(&mut self, state: SceneSnapshot) {
        if let Some(cursor) = self.cursor {
            if cursor + 1 < self.entries.len() {
                self.entries.truncate(cursor + 1);
            }
        }

        let previous = self
            .entries
            .last()
            .map(|entry| entry.state.clone())
            .unwrap_or_else(SceneSnapshot::empty);
        let diff = calculate_diff(&previous, &state);

        self.entries.push(HistoryEntry { state, diff });
        let mut cursor = self.entries.len() - 1;

        if self.entries.len() > self.max_length {
            self.entries.remove(0);
            cursor -= 1;
            debug!("History at capacity, evicted oldest entry");
        }
        self.cursor = Some(cursor);
    }

    /// Steps the cursor back one entry and returns the snapshot to
    /// restore, or `None` when already at the start (or empty).
    ///
    /// A full-state reload discards ephemeral overlay objects, so
    /// the caller must recreate guide lines after applying the
    /// returned snapshot.
    pub fn undo(&mut self) -> Option<&SceneSnapshot> {
        match self.cursor {
            Some(cursor) if cursor > 0 => {
                self.cursor = Some(cursor - 1);
                debug!(cursor = cursor - 1, "History undo");
                Some(&self.entries[cursor - 1].state)
            }
            _ => None,
        }
    }

    /// Drops every entry and resets the cursor.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{ObjectKind, SceneObject};
    use crate::serialization::ObjectData;

    fn snapshot(tag: f64) -> SceneSnapshot {
        let mut obj = SceneObject::new(ObjectKind::Rect);
        obj.left = tag;
        SceneSnapshot {
            objects: vec![ObjectData::from_scene_object(&obj)],
        }
    }

    #[test]
    fn undo_on_empty_stack_is_noop() {
        let mut history = HistoryStack::new();
        assert!(history.undo().is_none());
    }

    #[test]
    fn undo_after_single_commit_is_noop() {
        let mut history = HistoryStack::new();
        history.commit(snapshot(1.0));
        assert!(!history.can_undo());
        assert!(history.undo().is_none());
        assert_eq!(history.cursor(), Some(0));
    }

    #[test]
    fn undo_restores_previous_snapshot_exactly() {
        let mut history = HistoryStack::new();
        let first = snapshot(1.0);
        history.commit(first.clone());
        history.commit(snapshot(2.0));

        let restored = history.undo().cloned();
        assert_eq!(restored, Some(first));
        assert_eq!(history.cursor(), Some(0));
    }

    #[test]
    fn commit_truncates_entries_past_cursor() {
        let mut history = HistoryStack::new();
        history.commit(snapshot(1.0));
        history.commit(snapshot(2.0));
        history.commit(snapshot(3.0));

        history.undo();
        history.undo();
        assert_eq!(history.cursor(), Some(0));

        history.commit(snapshot(9.0));
        assert_eq!(history.len(), 2);
        assert_eq!(history.cursor(), Some(1));
        assert_eq!(history.current().unwrap().state, snapshot(9.0));
    }

    #[test]
    fn stack_is_capped_with_fifo_eviction() {
        let mut history = HistoryStack::new();
        for i in 0..30 {
            history.commit(snapshot(i as f64));
        }
        assert_eq!(history.len(), MAX_HISTORY_LENGTH);
        assert_eq!(history.cursor(), Some(MAX_HISTORY_LENGTH - 1));
        // Newest entry survives; the oldest ten were evicted.
        assert_eq!(history.current().unwrap().state, snapshot(29.0));
        assert_eq!(history.entries[0].state, snapshot(10.0));
    }

    #[test]
    fn first_commit_diffs_against_empty_state() {
        let mut history = HistoryStack::new();
        history.commit(snapshot(1.0));
        let entry = history.current().unwrap();
        assert_eq!(entry.diff.len(), 1);
    }
}
