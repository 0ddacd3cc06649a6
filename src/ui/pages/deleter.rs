//! Deleter page: filter by extension, tick files, trash or remove them.

use std::path::{Path, PathBuf};

use eframe::egui::{self, Color32};

use crate::fsops::delete;
use crate::ui::nav::PageKey;
use crate::ui::page::{Page, PageCtx, Themable};
use crate::ui::pages::{accent_button, dir_input};

pub struct DeleterPage {
    dir: String,
    ext_filter: String,
    entries: Vec<(PathBuf, bool)>,
    use_trash: bool,
    status: String,
    accent: Color32,
}

impl DeleterPage {
    pub fn new(accent: Color32) -> Self {
        Self {
            dir: String::new(),
            ext_filter: String::new(),
            entries: Vec::new(),
            use_trash: true,
            status: String::new(),
            accent,
        }
    }

    fn scan(&mut self) {
        match delete::list_matching(Path::new(&self.dir), &self.ext_filter) {
            Ok(paths) => {
                self.status = format!("{} matching files", paths.len());
                self.entries = paths.into_iter().map(|p| (p, false)).collect();
            }
            Err(e) => {
                log::warn!("deleter: {e}");
                self.status = e.to_string();
                self.entries.clear();
            }
        }
    }

    fn delete_checked(&mut self) {
        let checked: Vec<PathBuf> = self
            .entries
            .iter()
            .filter(|(_, on)| *on)
            .map(|(p, _)| p.clone())
            .collect();
        if checked.is_empty() {
            self.status = "Nothing selected".to_string();
            return;
        }
        let report = delete::delete_files(&checked, self.use_trash);
        self.status = format!(
            "{} {} files ({} failed)",
            if self.use_trash { "Trashed" } else { "Deleted" },
            report.deleted,
            report.failed
        );
        self.scan();
    }
}

impl Page for DeleterPage {
    fn key(&self) -> PageKey {
        PageKey::Deleter
    }

    fn title(&self) -> &'static str {
        "FILE DELETER"
    }

    fn ui(&mut self, ui: &mut egui::Ui, _ctx: &mut PageCtx<'_>) {
        dir_input(ui, &mut self.dir);

        ui.horizontal(|ui| {
            ui.label("Extension:");
            ui.add(egui::TextEdit::singleline(&mut self.ext_filter).desired_width(100.0));
            ui.checkbox(&mut self.use_trash, "Move to trash");
        });
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if accent_button(ui, "Scan", self.accent).clicked() {
                self.scan();
            }
            if accent_button(ui, "Delete selected", self.accent).clicked() {
                self.delete_checked();
            }
            if ui.button("Select all").clicked() {
                for (_, on) in &mut self.entries {
                    *on = true;
                }
            }
            if ui.button("Clear").clicked() {
                for (_, on) in &mut self.entries {
                    *on = false;
                }
            }
        });

        if !self.status.is_empty() {
            ui.add_space(4.0);
            ui.label(&self.status);
        }

        ui.add_space(8.0);
        egui::ScrollArea::vertical()
            .id_salt("deleter_list")
            .show(ui, |ui| {
                for (path, on) in &mut self.entries {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_default();
                    ui.checkbox(on, name);
                }
            });
    }

    fn as_themable(&mut self) -> Option<&mut dyn Themable> {
        Some(self)
    }
}

impl Themable for DeleterPage {
    fn update_colors(&mut self, accent: Color32) {
        self.accent = accent;
    }
}
