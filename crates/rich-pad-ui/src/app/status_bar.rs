//! Status bar: character/word counts, modified marker, last saved time,
//! and transient notices.

use eframe::egui;
use egui::{Color32, RichText};

use super::{App, NoticeLevel};

impl App {
    pub(crate) fn show_status_bar(&mut self, ui: &mut egui::Ui) {
        let stats = self.session.stats();
        let modified = self.session.modified;
        let last_saved = self.session.last_saved_at;

        ui.horizontal(|ui| {
            ui.label(format!(
                "Characters: {} | Words: {}",
                stats.characters, stats.words
            ));

            if modified {
                ui.colored_label(Color32::from_rgb(230, 150, 30), "• Modified");
            }

            if let Some(saved) = last_saved {
                ui.label(RichText::new(format!("Saved {}", saved.format("%H:%M:%S"))).weak());
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(notice) = self.notices.last() {
                    let color = match notice.level {
                        NoticeLevel::Info => Color32::from_rgb(120, 150, 220),
                        NoticeLevel::Success => Color32::from_rgb(80, 180, 80),
                        NoticeLevel::Error => Color32::from_rgb(220, 80, 80),
                    };
                    ui.colored_label(color, &notice.message);
                }
            });
        });
    }
}
