//! File operations: background import, export, and the document store.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, TryRecvError};

use rich_pad_core::io::{self, ImportedDocument};
use rich_pad_core::session::DEFAULT_FILE_NAME;

use super::{App, NoticeLevel};

impl App {
    /// Opens a file dialog and starts a background read of the chosen file.
    ///
    /// Refuses to start while another read is still in flight; the
    /// toolbar also disables the control in that state.
    pub(crate) fn open_import_dialog(&mut self) {
        if self.pending_import.is_some() {
            return;
        }
        let mut dialog = rfd::FileDialog::new()
            .set_title("Open Document")
            .add_filter("Text documents", io::IMPORT_EXTENSIONS);
        if let Some(dir) = self.dialog_directory() {
            dialog = dialog.set_directory(dir);
        }
        if let Some(path) = dialog.pick_file() {
            self.update_last_used_folder(&path);
            self.spawn_import(path);
        }
    }

    /// Reads and decodes the file off the UI thread; the result is
    /// collected by `poll_pending_import` on a later frame.
    fn spawn_import(&mut self, path: PathBuf) {
        tracing::info!("Reading '{}'", path.display());
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let _ = tx.send(io::import_file(&path));
        });
        self.pending_import = Some(rx);
    }

    /// Collects the result of an in-flight file read, if it finished.
    pub(crate) fn poll_pending_import(&mut self) {
        let Some(rx) = &self.pending_import else {
            return;
        };
        let received = rx.try_recv();
        match received {
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.pending_import = None;
                self.notify(NoticeLevel::Error, "File read was interrupted");
            }
            Ok(result) => {
                self.pending_import = None;
                match result {
                    Ok(doc) => self.finish_import(doc),
                    Err(e) => {
                        tracing::warn!("Import failed: {e}");
                        self.notify(NoticeLevel::Error, e.to_string());
                    }
                }
            }
        }
    }

    /// Installs an imported document as the current session.
    pub(crate) fn finish_import(&mut self, doc: ImportedDocument) {
        let message = format!("Loaded \"{}\" ({})", doc.file_name, doc.encoding);
        self.load_document(doc.markup, doc.file_name);
        self.notify(NoticeLevel::Success, message);
    }

    /// Saves the current document to the local store.
    pub(crate) fn save_to_store(&mut self) {
        if self.store.is_none() {
            self.notify(NoticeLevel::Error, "Local storage is unavailable");
            return;
        }
        let Some(store) = &self.store else { return };
        match store.save_document(self.surface.text(), &self.session.file_name) {
            Ok(()) => {
                self.session.mark_saved();
                self.notify(NoticeLevel::Success, "Content saved locally");
            }
            Err(e) => {
                tracing::error!("Failed to save document: {e:#}");
                self.notify(NoticeLevel::Error, "Failed to save content");
            }
        }
    }

    /// Loads the saved document from the local store, replacing the
    /// current session. Nothing saved yet is not an error.
    pub(crate) fn load_from_store(&mut self) {
        if self.store.is_none() {
            self.notify(NoticeLevel::Error, "Local storage is unavailable");
            return;
        }
        let Some(store) = &self.store else { return };
        let loaded = store.load_document();
        match loaded {
            Ok(Some(saved)) => {
                let file_name = saved
                    .file_name
                    .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string());
                self.load_document(saved.content, file_name);
                if let Some(ts) = saved.saved_at_epoch_secs {
                    self.session.last_saved_at = chrono::DateTime::from_timestamp(ts, 0)
                        .map(|utc| utc.with_timezone(&chrono::Local));
                }
                self.notify(NoticeLevel::Success, "Saved content loaded");
            }
            Ok(None) => self.notify(NoticeLevel::Info, "No saved content found"),
            Err(e) => {
                tracing::error!("Failed to load saved document: {e:#}");
                self.notify(NoticeLevel::Error, "Failed to load saved content");
            }
        }
    }

    /// Opens a save dialog and writes the document in the format implied
    /// by the chosen extension.
    pub(crate) fn export_dialog(&mut self) {
        let default_name = self.default_export_name();
        let mut dialog = rfd::FileDialog::new()
            .set_title("Download As")
            .set_file_name(&default_name)
            .add_filter("Plain text", &["txt"])
            .add_filter("HTML document", &["html"]);
        if let Some(dir) = self.dialog_directory() {
            dialog = dialog.set_directory(dir);
        }
        let Some(path) = dialog.save_file() else {
            return;
        };
        self.update_last_used_folder(&path);

        match io::export_file(&path, self.surface.text()) {
            Ok(format) => {
                tracing::info!("Exported '{}' as {}", path.display(), format.mime_type());
                let shown = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                self.notify(NoticeLevel::Success, format!("Downloaded \"{shown}\""));
                if self.reveal_after_export {
                    if let Err(e) = opener::reveal(&path) {
                        tracing::warn!("Failed to reveal exported file: {e}");
                    }
                }
            }
            Err(e) => {
                tracing::error!("Export failed: {e:#}");
                self.notify(NoticeLevel::Error, "Failed to download file");
            }
        }
    }

    /// Name pre-filled in the export dialog: the session file name, or a
    /// timestamped fallback when it is blank.
    pub(crate) fn default_export_name(&self) -> String {
        let name = self.session.file_name.trim();
        if name.is_empty() {
            io::timestamped_file_name("document", &self.default_export_extension)
        } else {
            name.to_string()
        }
    }

    /// Starting directory for file dialogs.
    fn dialog_directory(&self) -> Option<PathBuf> {
        if self.remember_last_folder {
            if let Some(folder) = &self.last_used_folder {
                if folder.is_dir() {
                    return Some(folder.clone());
                }
            }
        }
        dirs::home_dir()
    }

    /// Updates `last_used_folder` from a file path's parent directory.
    fn update_last_used_folder(&mut self, file_path: &Path) {
        if self.remember_last_folder {
            if let Some(parent) = file_path.parent() {
                self.last_used_folder = Some(parent.to_path_buf());
            }
        }
    }
}
