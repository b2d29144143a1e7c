//! egui user interface for rich-pad: toolbar, editor pane, status bar,
//! file dialogs, and keyboard shortcuts.

mod app;

pub use app::{App, StartupArgs};
