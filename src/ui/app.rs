//! Application shell: window lifecycle, page registry, navigation state, and
//! accent-colour propagation.

use eframe::egui::{self, Color32, CornerRadius, RichText};

use crate::error::{AppError, Result};
use crate::settings::{Settings, SettingsStore};
use crate::ui::nav::PageKey;
use crate::ui::page::{Page, PageCtx};
use crate::ui::pages::{
    deleter::DeleterPage, duplicates::DuplicatesPage, home::HomePage, organizer::OrganizerPage,
    renamer::RenamerPage, settings::SettingsPage, storage::StoragePage,
};
use crate::ui::theme::{self, Theme};

pub const WINDOW_WIDTH: f32 = 1300.0;
pub const WINDOW_HEIGHT: f32 = 900.0;
const SIDEBAR_WIDTH: f32 = 280.0;

// ── App struct ─────────────────────────────────────────────────────────────────

/// The top-level application, implementing [`eframe::App`].
///
/// All file-system logic lives in the pages and `fsops`; `App` only:
/// 1. Owns the page registry and the single active-page pointer.
/// 2. Renders the sidebar and the active page each frame.
/// 3. Drains page requests (navigation, accent change) raised during the
///    frame and applies them before the frame ends.
pub struct App {
    /// Registration order is the sidebar order; exactly one page per key.
    pages: Vec<Box<dyn Page>>,
    active: PageKey,
    header_title: String,
    theme: Theme,
    settings: Settings,
    store: SettingsStore,
    /// The window is centred on the primary display once, on the first frame.
    centered: bool,
}

impl App {
    pub fn new(store: SettingsStore) -> Self {
        let settings = store.load();
        let accent = theme::parse_hex(&settings.accent).unwrap_or(theme::DEFAULT_ACCENT);

        // The full registry. Adding a page = one line here plus its PageKey.
        let pages: Vec<Box<dyn Page>> = vec![
            Box::new(HomePage),
            Box::new(OrganizerPage::new(accent)),
            Box::new(RenamerPage::new(accent)),
            Box::new(DeleterPage::new(accent)),
            Box::new(DuplicatesPage::new(accent)),
            Box::new(StoragePage::new(accent)),
            Box::new(SettingsPage::new(accent)),
        ];
        debug_assert!(
            PageKey::ALL
                .iter()
                .all(|k| pages.iter().any(|p| p.key() == *k)),
            "page registry is missing a key"
        );

        Self::assemble(pages, accent, settings, store)
    }

    fn assemble(
        pages: Vec<Box<dyn Page>>,
        accent: Color32,
        settings: Settings,
        store: SettingsStore,
    ) -> Self {
        let mut app = Self {
            pages,
            active: PageKey::Home,
            header_title: String::new(),
            theme: Theme { accent },
            settings,
            store,
            centered: false,
        };
        if let Err(e) = app.navigate(PageKey::Home) {
            log::error!("initial navigation failed: {e}");
        }
        app
    }

    // ── Navigation ─────────────────────────────────────────────────────────────

    /// Make the page under `key` the single visible page, update the header
    /// title to its display title, and mark its nav control active.
    ///
    /// Fails with [`AppError::InvalidPageKey`] if the registry has no page
    /// for `key`; the previous state is left untouched in that case.
    pub fn navigate(&mut self, key: PageKey) -> Result<()> {
        let page = self
            .pages
            .iter()
            .find(|p| p.key() == key)
            .ok_or(AppError::InvalidPageKey(key))?;
        self.header_title = page.title().to_string();
        self.active = key;
        Ok(())
    }

    /// Store the new accent and notify every page exposing the `Themable`
    /// capability, synchronously, before returning. Pages without the
    /// capability are skipped. Idempotent.
    pub fn set_accent_color(&mut self, color: Color32) {
        self.theme.accent = color;
        for page in &mut self.pages {
            if let Some(themable) = page.as_themable() {
                themable.update_colors(color);
            }
        }
    }

    /// Accent change requested by the settings page: apply, then persist.
    fn apply_accent(&mut self, color: Color32) {
        self.set_accent_color(color);
        self.settings.accent = theme::to_hex(color);
        if let Err(e) = self.store.save(&self.settings) {
            log::warn!("failed to save settings: {e}");
        }
    }

    // ── State inspection (rendering and tests) ─────────────────────────────────

    #[allow(dead_code)]
    pub fn active_key(&self) -> PageKey {
        self.active
    }

    #[allow(dead_code)]
    pub fn is_visible(&self, key: PageKey) -> bool {
        self.active == key
    }

    #[allow(dead_code)]
    pub fn header_title(&self) -> &str {
        &self.header_title
    }

    /// Colour of the sidebar title; always the current accent.
    pub fn title_color(&self) -> Color32 {
        self.theme.accent
    }

    /// Fill for the nav control of `key`: accent when active, transparent
    /// otherwise. This derivation runs every frame, so a new accent restyles
    /// the active control immediately.
    pub fn nav_fill(&self, key: PageKey) -> Color32 {
        if self.active == key {
            self.theme.accent
        } else {
            Color32::TRANSPARENT
        }
    }

    fn nav_button(&self, ui: &mut egui::Ui, key: PageKey) -> egui::Response {
        ui.add_sized(
            [SIDEBAR_WIDTH - 40.0, 50.0],
            egui::Button::new(RichText::new(key.nav_label()).size(16.0))
                .fill(self.nav_fill(key))
                .corner_radius(CornerRadius::same(10)),
        )
    }
}

/// Origin that centres a `window`-sized rect on a monitor of size `monitor`.
/// Clamped at the top-left so an undersized monitor never pushes the window
/// off-screen.
pub fn centered_origin(monitor: egui::Vec2, window: egui::Vec2) -> egui::Pos2 {
    egui::pos2(
        ((monitor.x - window.x) / 2.0).max(0.0),
        ((monitor.y - window.y) / 2.0).max(0.0),
    )
}

// ── eframe::App ────────────────────────────────────────────────────────────────

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.centered {
            self.centered = true;
            if let Some(monitor) = ctx.input(|i| i.viewport().monitor_size) {
                let origin = centered_origin(monitor, egui::vec2(WINDOW_WIDTH, WINDOW_HEIGHT));
                ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(origin));
            }
        }

        let mut nav_request: Option<PageKey> = None;
        let mut accent_request: Option<Color32> = None;

        // ── Sidebar ───────────────────────────────────────────────────────────
        egui::SidePanel::left("sidebar")
            .exact_width(SIDEBAR_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(50.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("MENU")
                            .size(22.0)
                            .strong()
                            .color(self.title_color()),
                    );
                });
                ui.add_space(40.0);

                for key in PageKey::ALL.into_iter().filter(|k| *k != PageKey::Settings) {
                    if self.nav_button(ui, key).clicked() {
                        nav_request = Some(key);
                    }
                }

                ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
                    ui.add_space(30.0);
                    if self.nav_button(ui, PageKey::Settings).clicked() {
                        nav_request = Some(PageKey::Settings);
                    }
                });
            });

        // ── Active page ───────────────────────────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(self.header_title.as_str()).size(36.0).strong());
            });
            ui.add_space(20.0);

            let mut page_ctx = PageCtx {
                theme: &self.theme,
                nav_to: &mut nav_request,
                accent_change: &mut accent_request,
            };
            let active = self.active;
            if let Some(page) = self.pages.iter_mut().find(|p| p.key() == active) {
                page.ui(ui, &mut page_ctx);
            }
        });

        // ── Drain page requests ───────────────────────────────────────────────
        if let Some(key) = nav_request {
            if let Err(e) = self.navigate(key) {
                log::error!("navigation failed: {e}");
            }
        }
        if let Some(color) = accent_request {
            self.apply_accent(color);
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::page::Themable;
    use std::cell::Cell;
    use std::rc::Rc;

    fn test_app() -> (App, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::with_path(dir.path().join("settings.json"));
        (App::new(store), dir)
    }

    struct StubPage {
        key: PageKey,
        title: &'static str,
        themable: bool,
        seen: Rc<Cell<Option<Color32>>>,
        calls: Rc<Cell<usize>>,
    }

    impl StubPage {
        fn new(key: PageKey, title: &'static str, themable: bool) -> Self {
            Self {
                key,
                title,
                themable,
                seen: Rc::new(Cell::new(None)),
                calls: Rc::new(Cell::new(0)),
            }
        }
    }

    impl Themable for StubPage {
        fn update_colors(&mut self, accent: Color32) {
            self.seen.set(Some(accent));
            self.calls.set(self.calls.get() + 1);
        }
    }

    impl Page for StubPage {
        fn key(&self) -> PageKey {
            self.key
        }
        fn title(&self) -> &'static str {
            self.title
        }
        fn ui(&mut self, _ui: &mut egui::Ui, _ctx: &mut PageCtx<'_>) {}
        fn as_themable(&mut self) -> Option<&mut dyn Themable> {
            if self.themable { Some(self) } else { None }
        }
    }

    fn stub_app(pages: Vec<Box<dyn Page>>) -> (App, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::with_path(dir.path().join("settings.json"));
        let settings = store.load();
        (
            App::assemble(pages, theme::DEFAULT_ACCENT, settings, store),
            dir,
        )
    }

    #[test]
    fn starts_on_home() {
        let (app, _dir) = test_app();
        assert_eq!(app.active_key(), PageKey::Home);
        assert_eq!(app.header_title(), "DASHBOARD");
        for key in PageKey::ALL {
            assert_eq!(app.is_visible(key), key == PageKey::Home);
        }
    }

    #[test]
    fn navigate_shows_exactly_one_page() {
        let (mut app, _dir) = test_app();
        for key in PageKey::ALL {
            app.navigate(key).unwrap();
            for other in PageKey::ALL {
                assert_eq!(app.is_visible(other), other == key);
            }
        }
    }

    #[test]
    fn navigate_marks_exactly_one_nav_control_active() {
        let (mut app, _dir) = test_app();
        for key in PageKey::ALL {
            app.navigate(key).unwrap();
            for other in PageKey::ALL {
                if other == key {
                    assert_eq!(app.nav_fill(other), app.title_color());
                } else {
                    assert_eq!(app.nav_fill(other), Color32::TRANSPARENT);
                }
            }
        }
    }

    #[test]
    fn navigate_updates_header_title() {
        let (mut app, _dir) = test_app();
        app.navigate(PageKey::Organizer).unwrap();
        assert_eq!(app.header_title(), "FILE ORGANIZER");
        app.navigate(PageKey::Storage).unwrap();
        assert_eq!(app.header_title(), "STORAGE ANALYZER");
    }

    #[test]
    fn accent_last_writer_wins_and_is_idempotent() {
        let (mut app, _dir) = test_app();
        let c1 = Color32::from_rgb(10, 20, 30);
        let c2 = Color32::from_rgb(200, 0, 0);

        app.set_accent_color(c1);
        app.set_accent_color(c2);
        assert_eq!(app.title_color(), c2);
        assert_eq!(app.nav_fill(app.active_key()), c2);

        app.set_accent_color(c2);
        assert_eq!(app.title_color(), c2);
        assert_eq!(app.nav_fill(app.active_key()), c2);
    }

    #[test]
    fn pages_without_hook_are_skipped_without_blocking_others() {
        let first = StubPage::new(PageKey::Home, "DASHBOARD", true);
        let plain = StubPage::new(PageKey::Organizer, "FILE ORGANIZER", false);
        let last = StubPage::new(PageKey::Renamer, "FILE RENAMER", true);
        let (first_seen, first_calls) = (first.seen.clone(), first.calls.clone());
        let (plain_seen, plain_calls) = (plain.seen.clone(), plain.calls.clone());
        let (last_seen, last_calls) = (last.seen.clone(), last.calls.clone());

        let (mut app, _dir) =
            stub_app(vec![Box::new(first), Box::new(plain), Box::new(last)]);

        let red = Color32::from_rgb(255, 0, 0);
        app.set_accent_color(red);

        assert_eq!(first_seen.get(), Some(red));
        assert_eq!(first_calls.get(), 1);
        assert_eq!(last_seen.get(), Some(red));
        assert_eq!(last_calls.get(), 1);
        assert_eq!(plain_seen.get(), None);
        assert_eq!(plain_calls.get(), 0);
    }

    #[test]
    fn settings_scenario_recolours_active_nav_after_navigation() {
        let (mut app, _dir) = test_app();
        let red = Color32::from_rgb(255, 0, 0);

        app.navigate(PageKey::Settings).unwrap();
        app.set_accent_color(red);
        assert_eq!(app.title_color(), red);

        app.navigate(PageKey::Home).unwrap();
        assert_eq!(app.header_title(), "DASHBOARD");
        assert_eq!(app.nav_fill(PageKey::Home), red);
    }

    #[test]
    fn unregistered_key_fails_loudly_and_leaves_state_untouched() {
        let pages: Vec<Box<dyn Page>> = vec![
            Box::new(StubPage::new(PageKey::Home, "DASHBOARD", false)),
            Box::new(StubPage::new(PageKey::Settings, "SETTINGS", false)),
        ];
        let (mut app, _dir) = stub_app(pages);

        let err = app.navigate(PageKey::Storage).unwrap_err();
        assert!(matches!(err, AppError::InvalidPageKey(PageKey::Storage)));
        assert_eq!(app.active_key(), PageKey::Home);
        assert_eq!(app.header_title(), "DASHBOARD");
    }

    #[test]
    fn centered_origin_centres_and_clamps() {
        let origin = centered_origin(egui::vec2(1920.0, 1080.0), egui::vec2(1300.0, 900.0));
        assert_eq!(origin, egui::pos2(310.0, 90.0));

        let clamped = centered_origin(egui::vec2(800.0, 600.0), egui::vec2(1300.0, 900.0));
        assert_eq!(clamped, egui::pos2(0.0, 0.0));
    }
}
