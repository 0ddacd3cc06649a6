//! Renamer page: prefix + sequence batch rename with preview.

use std::path::Path;

use eframe::egui::{self, Color32};

use crate::fsops::rename::{self, RenameOptions};
use crate::ui::nav::PageKey;
use crate::ui::page::{Page, PageCtx, Themable};
use crate::ui::pages::{accent_button, dir_input};

pub struct RenamerPage {
    dir: String,
    opts: RenameOptions,
    preview: Vec<(String, String)>,
    status: String,
    accent: Color32,
}

impl RenamerPage {
    pub fn new(accent: Color32) -> Self {
        Self {
            dir: String::new(),
            opts: RenameOptions::default(),
            preview: Vec::new(),
            status: String::new(),
            accent,
        }
    }

    fn refresh_preview(&mut self) {
        match rename::plan(Path::new(&self.dir), &self.opts) {
            Ok(plan) => {
                self.status = format!("{} files to rename", plan.len());
                self.preview = plan
                    .iter()
                    .map(|(old, new)| (file_name(old), file_name(new)))
                    .collect();
            }
            Err(e) => {
                log::warn!("renamer: {e}");
                self.status = e.to_string();
                self.preview.clear();
            }
        }
    }

    fn apply(&mut self) {
        match rename::plan(Path::new(&self.dir), &self.opts) {
            Ok(plan) => {
                let report = rename::apply(&plan);
                self.status = format!(
                    "Renamed {} files, skipped {}",
                    report.renamed, report.skipped
                );
            }
            Err(e) => {
                log::warn!("renamer: {e}");
                self.status = e.to_string();
            }
        }
        self.preview.clear();
    }
}

impl Page for RenamerPage {
    fn key(&self) -> PageKey {
        PageKey::Renamer
    }

    fn title(&self) -> &'static str {
        "FILE RENAMER"
    }

    fn ui(&mut self, ui: &mut egui::Ui, _ctx: &mut PageCtx<'_>) {
        dir_input(ui, &mut self.dir);

        ui.horizontal(|ui| {
            ui.label("Prefix:");
            ui.add(egui::TextEdit::singleline(&mut self.opts.prefix).desired_width(160.0));
            ui.label("Start:");
            ui.add(egui::DragValue::new(&mut self.opts.start).range(0..=99_999));
            ui.label("Digits:");
            ui.add(egui::DragValue::new(&mut self.opts.pad).range(1..=8));
        });
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if accent_button(ui, "Preview", self.accent).clicked() {
                self.refresh_preview();
            }
            if accent_button(ui, "Rename", self.accent).clicked() {
                self.apply();
            }
        });

        if !self.status.is_empty() {
            ui.add_space(4.0);
            ui.label(&self.status);
        }

        ui.add_space(8.0);
        egui::ScrollArea::vertical()
            .id_salt("renamer_preview")
            .show(ui, |ui| {
                egui::Grid::new("renamer_grid").striped(true).show(ui, |ui| {
                    for (old, new) in &self.preview {
                        ui.label(old);
                        ui.label("→");
                        ui.label(new);
                        ui.end_row();
                    }
                });
            });
    }

    fn as_themable(&mut self) -> Option<&mut dyn Themable> {
        Some(self)
    }
}

impl Themable for RenamerPage {
    fn update_colors(&mut self, accent: Color32) {
        self.accent = accent;
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}
