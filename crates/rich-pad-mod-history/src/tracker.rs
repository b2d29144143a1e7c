/// Linear snapshot history with a cursor.
///
/// The sequence always contains at least the seed snapshot, and the
/// cursor always points at a valid entry. Entries past the cursor are
/// redo-able future states; recording a new snapshot discards them.
use crate::config::HistoryConfig;
use crate::snapshot::Snapshot;

/// Undo/redo history for a single editor session.
#[derive(Debug, Clone)]
pub struct SnapshotHistory {
    /// Ordered snapshots, oldest first. Never empty.
    entries: Vec<Snapshot>,
    /// Index of the currently displayed snapshot.
    cursor: usize,
    config: HistoryConfig,
}

impl SnapshotHistory {
    /// Creates a history seeded with `seed` and default configuration.
    pub fn new(seed: Snapshot) -> Self {
        Self::with_config(seed, HistoryConfig::default())
    }

    /// Creates a history seeded with `seed` and the given configuration.
    pub fn with_config(seed: Snapshot, config: HistoryConfig) -> Self {
        Self {
            entries: vec![seed],
            cursor: 0,
            config,
        }
    }

    /// Replaces the history wholesale with a single-element sequence.
    ///
    /// Used when a document is loaded fresh from a file or from storage:
    /// the previous editing timeline is discarded entirely.
    pub fn reset(&mut self, seed: Snapshot) {
        self.entries.clear();
        self.entries.push(seed);
        self.cursor = 0;
    }

    /// Records a snapshot after a user edit.
    ///
    /// Truncates the redo branch (entries past the cursor), appends the
    /// new snapshot, and moves the cursor to it. Cannot fail.
    pub fn record(&mut self, snapshot: Snapshot) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(snapshot);
        self.cursor = self.entries.len() - 1;

        // Enforce the depth bound by dropping oldest entries.
        let max_depth = self.config.effective_max_depth();
        if self.entries.len() > max_depth {
            let excess = self.entries.len() - max_depth;
            self.entries.drain(..excess);
            self.cursor -= excess;
        }
    }

    /// Steps back one snapshot.
    ///
    /// Returns the snapshot now at the cursor, or `None` if there is
    /// nothing to undo (the cursor is already at the oldest entry).
    pub fn undo(&mut self) -> Option<Snapshot> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.entries[self.cursor].clone())
    }

    /// Steps forward one snapshot.
    ///
    /// Returns the snapshot now at the cursor, or `None` if there is
    /// nothing to redo (the cursor is already at the newest entry).
    pub fn redo(&mut self) -> Option<Snapshot> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.entries[self.cursor].clone())
    }

    /// Whether `undo` would return a snapshot.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Whether `redo` would return a snapshot.
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// The currently displayed snapshot.
    pub fn current(&self) -> &Snapshot {
        &self.entries[self.cursor]
    }

    /// Number of snapshots currently retained.
    pub fn depth(&self) -> usize {
        self.entries.len()
    }
}

impl Default for SnapshotHistory {
    fn default() -> Self {
        Self::new(Snapshot::empty())
    }
}
