/// The editor session: history, file name, and modification state.
///
/// The session owns the snapshot history and drives the content surface
/// through the collaborator traits; it never touches widget state
/// directly. Every mutation path runs synchronously on the caller's
/// thread.
use anyhow::Result;
use chrono::{DateTime, Local};

use rich_pad_mod_history::{HistoryConfig, Snapshot, SnapshotHistory};

use crate::command::FormatCommand;
use crate::surface::{CommandExecutor, ContentSurface};
use crate::text::{stats_for, DocumentStats};

/// File name given to a fresh, never-saved document.
pub const DEFAULT_FILE_NAME: &str = "document.txt";

pub struct EditorSession {
    history: SnapshotHistory,
    pub file_name: String,
    /// Whether the content differs from the last save point.
    pub modified: bool,
    pub last_saved_at: Option<DateTime<Local>>,
}

impl EditorSession {
    /// Creates a session with empty content and the default file name.
    pub fn new() -> Self {
        Self::with_config(HistoryConfig::default())
    }

    pub fn with_config(config: HistoryConfig) -> Self {
        Self {
            history: SnapshotHistory::with_config(Snapshot::empty(), config),
            file_name: DEFAULT_FILE_NAME.to_string(),
            modified: false,
            last_saved_at: None,
        }
    }

    /// Replaces the session with freshly loaded content.
    ///
    /// The previous history is discarded wholesale; the loaded snapshot
    /// becomes the sole entry. Used after a file import or a storage
    /// restore.
    pub fn load(&mut self, content: impl Into<Snapshot>, file_name: impl Into<String>) {
        self.history.reset(content.into());
        self.file_name = file_name.into();
        self.modified = false;
    }

    /// Records the surface state after a user edit.
    ///
    /// Returns whether a new history entry was created; a snapshot
    /// identical to the current one is not an edit and is skipped.
    pub fn record_edit(&mut self, snapshot: Snapshot) -> bool {
        if snapshot.as_str() == self.history.current().as_str() {
            return false;
        }
        self.history.record(snapshot);
        self.modified = true;
        true
    }

    /// Executes a formatting command against the surface, then re-reads
    /// and records the resulting snapshot.
    ///
    /// # Errors
    ///
    /// Propagates executor failures (malformed command payloads); the
    /// history is untouched in that case.
    pub fn apply_command<S>(&mut self, surface: &mut S, command: &FormatCommand) -> Result<()>
    where
        S: ContentSurface + CommandExecutor,
    {
        surface.execute(command)?;
        self.record_edit(surface.snapshot());
        Ok(())
    }

    /// Steps the history back and pushes the result to the surface.
    ///
    /// Returns `false` when there is nothing to undo, so callers can
    /// disable the control.
    pub fn undo(&mut self, surface: &mut dyn ContentSurface) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                surface.apply_snapshot(&snapshot);
                self.modified = true;
                true
            }
            None => false,
        }
    }

    /// Steps the history forward and pushes the result to the surface.
    pub fn redo(&mut self, surface: &mut dyn ContentSurface) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                surface.apply_snapshot(&snapshot);
                self.modified = true;
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// The most recently recorded snapshot.
    pub fn current_snapshot(&self) -> &Snapshot {
        self.history.current()
    }

    /// Character/word counts over the current snapshot.
    pub fn stats(&self) -> DocumentStats {
        stats_for(self.current_snapshot().as_str())
    }

    /// Marks the current content as saved.
    pub fn mark_saved(&mut self) {
        self.modified = false;
        self.last_saved_at = Some(Local::now());
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
