//! Editor core: session state, the typed command model, the content
//! surface seams, and file import/export.
//!
//! The UI crate drives everything through [`session::EditorSession`] and
//! the [`surface::ContentSurface`] / [`surface::CommandExecutor`] traits;
//! snapshots flow through the history crate untouched.

pub mod command;
pub mod encoding;
pub mod error;
pub mod io;
pub mod markup;
pub mod session;
pub mod surface;
pub mod text;

pub use rich_pad_mod_history::{HistoryConfig, Snapshot, SnapshotHistory};

pub use command::{Alignment, BlockFormat, FormatCommand, ListStyle};
pub use error::ImportError;
pub use markup::MarkupBuffer;
pub use session::EditorSession;
pub use surface::{CommandExecutor, ContentSurface};
