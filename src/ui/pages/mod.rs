//! The pages of the suite, one file per feature area.

pub mod deleter;
pub mod duplicates;
pub mod home;
pub mod organizer;
pub mod renamer;
pub mod settings;
pub mod storage;

use eframe::egui::{self, Color32, RichText};

/// Action button filled with the accent colour.
pub(crate) fn accent_button(ui: &mut egui::Ui, label: &str, accent: Color32) -> egui::Response {
    ui.add(egui::Button::new(RichText::new(label).color(Color32::WHITE)).fill(accent))
}

/// Single-line directory input row shared by the tool pages.
pub(crate) fn dir_input(ui: &mut egui::Ui, dir: &mut String) {
    ui.horizontal(|ui| {
        ui.label("Directory:");
        ui.add(egui::TextEdit::singleline(dir).desired_width(420.0));
    });
}
