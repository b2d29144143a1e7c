/// Snapshot-based undo/redo history.
///
/// Provides a `SnapshotHistory` that keeps an ordered sequence of full
/// content snapshots with a cursor into it. New edits truncate the redo
/// branch; depth is bounded so long editing sessions cannot grow memory
/// without limit. Purely in-memory, owned by a single editor session.
pub mod config;
pub mod snapshot;
pub mod tracker;

pub use config::HistoryConfig;
pub use snapshot::Snapshot;
pub use tracker::SnapshotHistory;
