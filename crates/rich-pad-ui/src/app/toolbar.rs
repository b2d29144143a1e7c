//! Toolbar rendering: file actions, undo/redo, and formatting controls.

use eframe::egui;
use egui::{Color32, RichText};

use rich_pad_core::command::{font_size_points, Alignment, BlockFormat, FormatCommand, ListStyle};

use super::{App, ThemeMode, UrlPrompt, UrlPromptKind};

/// `#RRGGBB` string for a color picker value.
fn hex_color(c: [u8; 3]) -> String {
    format!("#{:02X}{:02X}{:02X}", c[0], c[1], c[2])
}

/// Block formats offered in the toolbar dropdown.
const BLOCK_FORMATS: [BlockFormat; 6] = [
    BlockFormat::Paragraph,
    BlockFormat::Heading1,
    BlockFormat::Heading2,
    BlockFormat::Heading3,
    BlockFormat::Quote,
    BlockFormat::Code,
];

impl App {
    /// Renders the two toolbar rows: file actions, then formatting.
    pub(crate) fn show_toolbar(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        self.show_file_row(ui, ctx);
        ui.separator();
        self.show_format_row(ui);
    }

    fn show_file_row(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("rich-pad").strong());
            ui.separator();

            ui.add(
                egui::TextEdit::singleline(&mut self.session.file_name)
                    .desired_width(200.0)
                    .hint_text("File name"),
            );
            if self.session.modified {
                ui.colored_label(Color32::from_rgb(230, 150, 30), "●")
                    .on_hover_text("Unsaved changes");
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let theme_label = self.theme_mode.0.clone();
                let mut selected_theme: Option<String> = None;
                egui::ComboBox::from_id_salt("theme_mode")
                    .selected_text(theme_label)
                    .width(90.0)
                    .show_ui(ui, |ui| {
                        for name in self.theme_choices() {
                            if ui.selectable_label(false, &name).clicked() {
                                selected_theme = Some(name);
                            }
                        }
                    });
                if let Some(name) = selected_theme {
                    self.set_theme_mode(ThemeMode(name), ctx);
                }

                ui.separator();

                if ui.button("⬇ Download").clicked() {
                    self.export_dialog();
                }
                if ui.button("📂 Load Saved").clicked() {
                    self.load_from_store();
                }
                if ui.button("💾 Save").clicked() {
                    self.save_to_store();
                }
                let can_upload = self.pending_import.is_none();
                let upload_label = if can_upload { "⬆ Upload" } else { "⬆ Reading…" };
                if ui
                    .add_enabled(can_upload, egui::Button::new(upload_label))
                    .on_hover_text("Open a text or HTML file")
                    .clicked()
                {
                    self.open_import_dialog();
                }
            });
        });
    }

    fn show_format_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            if ui
                .add_enabled(self.session.can_undo(), egui::Button::new("⟲ Undo"))
                .on_hover_text("Undo (Ctrl+Z)")
                .clicked()
            {
                self.undo();
            }
            if ui
                .add_enabled(self.session.can_redo(), egui::Button::new("⟳ Redo"))
                .on_hover_text("Redo (Ctrl+Y)")
                .clicked()
            {
                self.redo();
            }

            ui.separator();

            if ui
                .button(RichText::new("B").strong())
                .on_hover_text("Bold (Ctrl+B)")
                .clicked()
            {
                self.apply_format(FormatCommand::Bold);
            }
            if ui
                .button(RichText::new("I").italics())
                .on_hover_text("Italic (Ctrl+I)")
                .clicked()
            {
                self.apply_format(FormatCommand::Italic);
            }
            if ui
                .button(RichText::new("U").underline())
                .on_hover_text("Underline (Ctrl+U)")
                .clicked()
            {
                self.apply_format(FormatCommand::Underline);
            }
            if ui
                .button(RichText::new("S").strikethrough())
                .on_hover_text("Strikethrough")
                .clicked()
            {
                self.apply_format(FormatCommand::Strikethrough);
            }

            ui.separator();

            for (label, alignment) in [
                ("Left", Alignment::Left),
                ("Center", Alignment::Center),
                ("Right", Alignment::Right),
                ("Justify", Alignment::Justify),
            ] {
                if ui
                    .button(label)
                    .on_hover_text(format!("Align {}", label.to_lowercase()))
                    .clicked()
                {
                    self.apply_format(FormatCommand::Align(alignment));
                }
            }

            ui.separator();

            if ui
                .button("• List")
                .on_hover_text("Bullet list")
                .clicked()
            {
                self.apply_format(FormatCommand::List(ListStyle::Bulleted));
            }
            if ui
                .button("1. List")
                .on_hover_text("Numbered list")
                .clicked()
            {
                self.apply_format(FormatCommand::List(ListStyle::Numbered));
            }
            if ui.button("⇥").on_hover_text("Increase indent").clicked() {
                self.apply_format(FormatCommand::Indent);
            }
            if ui.button("⇤").on_hover_text("Decrease indent").clicked() {
                self.apply_format(FormatCommand::Outdent);
            }

            ui.separator();

            let mut selected_block: Option<BlockFormat> = None;
            egui::ComboBox::from_id_salt("block_format")
                .selected_text("Format")
                .width(110.0)
                .show_ui(ui, |ui| {
                    for format in BLOCK_FORMATS {
                        if ui.selectable_label(false, format.label()).clicked() {
                            selected_block = Some(format);
                        }
                    }
                });
            if let Some(format) = selected_block {
                self.apply_format(FormatCommand::Block(format));
            }

            let mut selected_size: Option<u8> = None;
            egui::ComboBox::from_id_salt("font_size")
                .selected_text("Size")
                .width(70.0)
                .show_ui(ui, |ui| {
                    for step in 1..=7u8 {
                        let points = font_size_points(step).unwrap_or(12);
                        if ui.selectable_label(false, format!("{points} pt")).clicked() {
                            selected_size = Some(step);
                        }
                    }
                });
            if let Some(step) = selected_size {
                self.apply_format(FormatCommand::FontSize(step));
            }

            ui.separator();

            ui.color_edit_button_srgb(&mut self.text_color);
            let text_swatch = Color32::from_rgb(
                self.text_color[0],
                self.text_color[1],
                self.text_color[2],
            );
            if ui
                .button(RichText::new("A").color(text_swatch))
                .on_hover_text("Apply text color")
                .clicked()
            {
                self.apply_format(FormatCommand::TextColor(hex_color(self.text_color)));
            }

            ui.color_edit_button_srgb(&mut self.highlight_color);
            let highlight_swatch = Color32::from_rgb(
                self.highlight_color[0],
                self.highlight_color[1],
                self.highlight_color[2],
            );
            if ui
                .button(RichText::new("A").background_color(highlight_swatch))
                .on_hover_text("Apply highlight color")
                .clicked()
            {
                self.apply_format(FormatCommand::Highlight(hex_color(self.highlight_color)));
            }

            ui.separator();

            if ui.button("🔗 Link").on_hover_text("Insert link").clicked() {
                self.url_prompt = Some(UrlPrompt {
                    kind: UrlPromptKind::Link,
                    url: String::new(),
                });
            }
            if ui.button("Unlink").on_hover_text("Remove link").clicked() {
                self.apply_format(FormatCommand::Unlink);
            }
            if ui.button("🖼 Image").on_hover_text("Insert image").clicked() {
                self.url_prompt = Some(UrlPrompt {
                    kind: UrlPromptKind::Image,
                    url: String::new(),
                });
            }
        });
    }

    /// Names offered in the theme dropdown: System plus every theme.
    fn theme_choices(&self) -> Vec<String> {
        let mut names = vec!["System".to_string()];
        names.extend(self.available_themes.iter().map(|t| t.name.clone()));
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color([255, 0, 0]), "#FF0000");
        assert_eq!(hex_color([26, 26, 26]), "#1A1A1A");
        assert_eq!(hex_color([255, 255, 153]), "#FFFF99");
    }
}
