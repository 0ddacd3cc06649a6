//! Organizer page: preview and move files into category folders.

use std::path::Path;

use eframe::egui::{self, Color32};

use crate::fsops::organize;
use crate::ui::nav::PageKey;
use crate::ui::page::{Page, PageCtx, Themable};
use crate::ui::pages::{accent_button, dir_input};

pub struct OrganizerPage {
    dir: String,
    preview: Vec<(String, &'static str)>,
    status: String,
    accent: Color32,
}

impl OrganizerPage {
    pub fn new(accent: Color32) -> Self {
        Self {
            dir: dirs::download_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            preview: Vec::new(),
            status: String::new(),
            accent,
        }
    }

    fn refresh_preview(&mut self) {
        match organize::plan_moves(Path::new(&self.dir)) {
            Ok(plan) => {
                self.status = format!("{} files to organize", plan.len());
                self.preview = plan
                    .into_iter()
                    .map(|(path, cat)| {
                        let name = path
                            .file_name()
                            .map(|n| n.to_string_lossy().to_string())
                            .unwrap_or_default();
                        (name, cat)
                    })
                    .collect();
            }
            Err(e) => {
                log::warn!("organizer: {e}");
                self.status = e.to_string();
                self.preview.clear();
            }
        }
    }

    fn organize(&mut self) {
        match organize::organize_dir(Path::new(&self.dir)) {
            Ok(report) => {
                self.status = format!(
                    "Moved {} files into {} folders ({} failed)",
                    report.moved,
                    report.categories.len(),
                    report.failed
                );
            }
            Err(e) => {
                log::warn!("organizer: {e}");
                self.status = e.to_string();
            }
        }
        self.preview.clear();
    }
}

impl Page for OrganizerPage {
    fn key(&self) -> PageKey {
        PageKey::Organizer
    }

    fn title(&self) -> &'static str {
        "FILE ORGANIZER"
    }

    fn ui(&mut self, ui: &mut egui::Ui, _ctx: &mut PageCtx<'_>) {
        dir_input(ui, &mut self.dir);
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if accent_button(ui, "Preview", self.accent).clicked() {
                self.refresh_preview();
            }
            if accent_button(ui, "Organize", self.accent).clicked() {
                self.organize();
            }
        });

        if !self.status.is_empty() {
            ui.add_space(4.0);
            ui.label(&self.status);
        }

        ui.add_space(8.0);
        egui::ScrollArea::vertical()
            .id_salt("organizer_preview")
            .show(ui, |ui| {
                egui::Grid::new("organizer_grid").striped(true).show(ui, |ui| {
                    for (name, category) in &self.preview {
                        ui.label(name);
                        ui.label("→");
                        ui.label(*category);
                        ui.end_row();
                    }
                });
            });
    }

    fn as_themable(&mut self) -> Option<&mut dyn Themable> {
        Some(self)
    }
}

impl Themable for OrganizerPage {
    fn update_colors(&mut self, accent: Color32) {
        self.accent = accent;
    }
}
