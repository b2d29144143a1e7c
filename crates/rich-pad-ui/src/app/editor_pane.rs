//! The editing surface: a multiline text widget bound to the markup
//! buffer, with selection mirroring and per-frame edit detection.

use eframe::egui;

use rich_pad_core::ContentSurface;

use super::App;

impl App {
    pub(crate) fn show_editor(&mut self, ui: &mut egui::Ui) {
        let font_id = egui::FontId::proportional(self.font_size);
        let hint = self.placeholder_text.clone();

        egui::ScrollArea::vertical()
            .auto_shrink(false)
            .show(ui, |ui| {
                let output = egui::TextEdit::multiline(self.surface.text_mut())
                    .font(font_id)
                    .hint_text(hint)
                    .frame(false)
                    .desired_width(f32::INFINITY)
                    .desired_rows(24)
                    .show(ui);

                // Mirror the widget selection into the buffer so command
                // execution targets what the user sees as selected.
                if let Some(range) = output.state.cursor.char_range() {
                    self.surface
                        .set_selection(range.primary.index, range.secondary.index);
                }

                if output.response.changed() {
                    self.session.record_edit(self.surface.snapshot());
                }
            });
    }
}
