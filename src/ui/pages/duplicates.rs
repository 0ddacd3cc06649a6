//! Duplicate finder page: scan a tree and list equal-content groups.

use std::path::Path;

use eframe::egui::{self, Color32};

use crate::fsops::duplicates::{self, DuplicateGroup};
use crate::fsops::storage::human_size;
use crate::ui::nav::PageKey;
use crate::ui::page::{Page, PageCtx, Themable};
use crate::ui::pages::{accent_button, dir_input};

pub struct DuplicatesPage {
    dir: String,
    groups: Vec<DuplicateGroup>,
    status: String,
    accent: Color32,
}

impl DuplicatesPage {
    pub fn new(accent: Color32) -> Self {
        Self {
            dir: String::new(),
            groups: Vec::new(),
            status: String::new(),
            accent,
        }
    }

    fn scan(&mut self) {
        match duplicates::find_duplicates(Path::new(&self.dir)) {
            Ok(groups) => {
                let wasted: u64 = groups.iter().map(DuplicateGroup::wasted_bytes).sum();
                self.status = format!(
                    "{} duplicate groups, {} reclaimable",
                    groups.len(),
                    human_size(wasted)
                );
                self.groups = groups;
            }
            Err(e) => {
                log::warn!("duplicates: {e}");
                self.status = e.to_string();
                self.groups.clear();
            }
        }
    }
}

impl Page for DuplicatesPage {
    fn key(&self) -> PageKey {
        PageKey::Duplicates
    }

    fn title(&self) -> &'static str {
        "DUPLICATE FINDER"
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

        ui.add_space(8.0);
        egui::ScrollArea::vertical()
            .id_salt("duplicate_groups")
            .show(ui, |ui| {
                for (i, group) in self.groups.iter().enumerate() {
                    egui::CollapsingHeader::new(format!(
                        "{} copies × {} ({} wasted)",
                        group.paths.len(),
                        human_size(group.size),
                        human_size(group.wasted_bytes())
                    ))
                    .id_salt(i)
                    .show(ui, |ui| {
                        for path in &group.paths {
                            ui.label(path.display().to_string());
                        }
                    });
                }
            });
    }

    fn as_themable(&mut self) -> Option<&mut dyn Themable> {
        Some(self)
    }
}

impl Themable for DuplicatesPage {
    fn update_colors(&mut self, accent: Color32) {
        self.accent = accent;
    }
}
