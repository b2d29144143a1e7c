//! Global keyboard shortcuts.
//!
//! Ctrl+B/I/U apply inline formats, Ctrl+Z/Y drive undo/redo, Ctrl+S
//! saves to the local store, and Ctrl+O opens the import dialog.

use eframe::egui;

use rich_pad_core::FormatCommand;

use super::App;

impl App {
    pub(crate) fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let (ctrl, keys) = ctx.input(|i| {
            let ctrl = i.modifiers.ctrl || i.modifiers.command;
            let keys: Vec<egui::Key> = i
                .events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Key {
                        key, pressed: true, ..
                    } => Some(*key),
                    _ => None,
                })
                .collect();
            (ctrl, keys)
        });

        if !ctrl {
            return;
        }

        // Shortcuts are suppressed while the URL prompt is capturing input.
        if self.url_prompt.is_some() {
            return;
        }

        for key in keys {
            match key {
                egui::Key::B => self.apply_format(FormatCommand::Bold),
                egui::Key::I => self.apply_format(FormatCommand::Italic),
                egui::Key::U => self.apply_format(FormatCommand::Underline),
                egui::Key::Z => self.undo(),
                egui::Key::Y => self.redo(),
                egui::Key::S => self.save_to_store(),
                egui::Key::O => self.open_import_dialog(),
                _ => {}
            }
        }
    }
}
