//! Settings page: accent-colour presets and a free colour picker.
//!
//! This page is the single source of accent changes. It never mutates the
//! theme itself; it raises the request through [`PageCtx::accent_change`]
//! and the shell applies, broadcasts, and persists it within the frame.

use eframe::egui::{self, Color32, RichText, vec2};

use crate::ui::nav::PageKey;
use crate::ui::page::{Page, PageCtx};
use crate::ui::pages::accent_button;
use crate::ui::theme::{self, ACCENT_PRESETS};

pub struct SettingsPage {
    picked: Color32,
}

impl SettingsPage {
    pub fn new(accent: Color32) -> Self {
        Self { picked: accent }
    }
}

impl Page for SettingsPage {
    fn key(&self) -> PageKey {
        PageKey::Settings
    }

    fn title(&self) -> &'static str {
        "SETTINGS"
    }

    fn ui(&mut self, ui: &mut egui::Ui, ctx: &mut PageCtx<'_>) {
        ui.label(RichText::new("Accent colour").size(18.0).strong());
        ui.label(format!("Current: {}", theme::to_hex(ctx.theme.accent)));
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            for (name, color) in ACCENT_PRESETS.iter() {
                let swatch = ui.add_sized(
                    vec2(32.0, 32.0),
                    egui::Button::new("").fill(*color),
                );
                if swatch.on_hover_text(*name).clicked() {
                    self.picked = *color;
                    *ctx.accent_change = Some(*color);
                }
            }
        });
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            ui.label("Custom:");
            ui.color_edit_button_srgba(&mut self.picked);
            if accent_button(ui, "Apply", ctx.theme.accent).clicked() {
                *ctx.accent_change = Some(self.picked);
            }
        });
    }
}
