//! Storage analyzer page: per-entry usage list with a bar chart.

use std::path::Path;

use eframe::egui::{self, Color32, Vec2};
use egui_plot::{Bar, BarChart, Plot};

use crate::fsops::storage::{self, UsageEntry, human_size};
use crate::ui::nav::PageKey;
use crate::ui::page::{Page, PageCtx, Themable};
use crate::ui::pages::{accent_button, dir_input};

/// How many entries the bar chart shows; the grid below lists all of them.
const CHART_ENTRIES: usize = 12;

pub struct StoragePage {
    dir: String,
    entries: Vec<UsageEntry>,
    status: String,
    accent: Color32,
}

impl StoragePage {
    pub fn new(accent: Color32) -> Self {
        Self {
            dir: dirs::home_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            entries: Vec::new(),
            status: String::new(),
            accent,
        }
    }

    fn scan(&mut self) {
        match storage::scan_usage(Path::new(&self.dir)) {
            Ok(entries) => {
                let total: u64 = entries.iter().map(|e| e.size).sum();
                self.status = format!("{} entries, {} total", entries.len(), human_size(total));
                self.entries = entries;
            }
            Err(e) => {
                log::warn!("storage: {e}");
                self.status = e.to_string();
                self.entries.clear();
            }
        }
    }
}

impl Page for StoragePage {
    fn key(&self) -> PageKey {
        PageKey::Storage
    }

    fn title(&self) -> &'static str {
        "STORAGE ANALYZER"
    }

    fn ui(&mut self, ui: &mut egui::Ui, _ctx: &mut PageCtx<'_>) {
        dir_input(ui, &mut self.dir);
        ui.add_space(8.0);

        if accent_button(ui, "Scan", self.accent).clicked() {
            self.scan();
        }

        if !self.status.is_empty() {
            ui.add_space(4.0);
            ui.label(&self.status);
        }

        if !self.entries.is_empty() {
            ui.add_space(8.0);
            let bars: Vec<Bar> = self
                .entries
                .iter()
                .take(CHART_ENTRIES)
                .enumerate()
                .map(|(i, entry)| {
                    let mb = entry.size as f64 / (1024.0 * 1024.0);
                    Bar::new(i as f64, mb).fill(self.accent).width(0.8)
                })
                .collect();

            ui.allocate_ui(Vec2::new(560.0, 220.0), |ui| {
                Plot::new("storage_chart")
                    .allow_drag(false)
                    .allow_scroll(false)
                    .allow_zoom(false)
                    .y_axis_label("MB")
                    .show_axes([false, true])
                    .show(ui, |plot_ui| {
                        plot_ui.bar_chart(BarChart::new("usage", bars));
                    });
            });
        }

        ui.add_space(8.0);
        egui::ScrollArea::vertical()
            .id_salt("storage_list")
            .show(ui, |ui| {
                egui::Grid::new("storage_grid").striped(true).show(ui, |ui| {
                    for entry in &self.entries {
                        if entry.is_dir {
                            ui.label(format!("{}/", entry.name));
                        } else {
                            ui.label(&entry.name);
                        }
                        ui.label(human_size(entry.size));
                        ui.end_row();
                    }
                });
            });
    }

    fn as_themable(&mut self) -> Option<&mut dyn Themable> {
        Some(self)
    }
}

impl Themable for StoragePage {
    fn update_colors(&mut self, accent: Color32) {
        self.accent = accent;
    }
}
