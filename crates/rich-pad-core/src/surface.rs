/// Collaborator seams between the session core and the editable surface.
///
/// The core never touches the surface directly; it reads and writes whole
/// snapshots through `ContentSurface` and issues formatting operations
/// through `CommandExecutor`. Tests substitute fake surfaces.
use anyhow::Result;

use rich_pad_mod_history::Snapshot;

use crate::command::FormatCommand;

/// An editable region that can report its serialized content and accept
/// a replacement snapshot to display.
pub trait ContentSurface {
    /// The current serialized content. Treated as opaque by the core.
    fn snapshot(&self) -> Snapshot;

    /// Replaces the displayed content with the given snapshot.
    fn apply_snapshot(&mut self, snapshot: &Snapshot);
}

/// Applies formatting operations to the surface's current selection.
pub trait CommandExecutor {
    /// Executes one formatting command.
    ///
    /// Commands that have nothing to act on (e.g. an inline wrap with a
    /// collapsed selection) succeed as no-ops. After execution the caller
    /// re-reads the snapshot and records it.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed command payloads (e.g. an invalid
    /// color string).
    fn execute(&mut self, command: &FormatCommand) -> Result<()>;
}
