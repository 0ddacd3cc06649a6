//! Dashboard page: a grid of tiles navigating to each tool.

use eframe::egui::{self, CornerRadius, RichText, Stroke, vec2};

use crate::ui::nav::PageKey;
use crate::ui::page::{Page, PageCtx};

/// Tile label and navigation target, in grid order (two rows of three).
const TILES: [(&str, PageKey); 6] = [
    ("FILE\nORGANIZER", PageKey::Organizer),
    ("FILE\nRENAMER", PageKey::Renamer),
    ("FILE\nDELETER", PageKey::Deleter),
    ("DUPLICATE\nFINDER", PageKey::Duplicates),
    ("STORAGE\nANALYZER", PageKey::Storage),
    ("SETTINGS", PageKey::Settings),
];

#[derive(Default)]
pub struct HomePage;

impl Page for HomePage {
    fn key(&self) -> PageKey {
        PageKey::Home
    }

    fn title(&self) -> &'static str {
        "DASHBOARD"
    }

    fn ui(&mut self, ui: &mut egui::Ui, ctx: &mut PageCtx<'_>) {
        ui.add_space(60.0);
        ui.vertical_centered(|ui| {
            // Tile styling: fixed dark fill, accent highlight on hover.
            let widgets = &mut ui.style_mut().visuals.widgets;
            widgets.inactive.weak_bg_fill = ctx.theme.tile_fill();
            widgets.inactive.corner_radius = CornerRadius::same(25);
            widgets.inactive.bg_stroke = Stroke::new(1.0, egui::Color32::from_gray(77));
            widgets.hovered.weak_bg_fill = ctx.theme.accent;
            widgets.hovered.corner_radius = CornerRadius::same(25);

            egui::Grid::new("dash_grid")
                .spacing([30.0, 30.0])
                .show(ui, |ui| {
                    for (i, (label, key)) in TILES.iter().enumerate() {
                        let tile = ui.add_sized(
                            vec2(240.0, 240.0),
                            egui::Button::new(RichText::new(*label).size(18.0).strong()),
                        );
                        if tile.clicked() {
                            *ctx.nav_to = Some(*key);
                        }
                        if (i + 1) % 3 == 0 {
                            ui.end_row();
                        }
                    }
                });
        });
    }
}
