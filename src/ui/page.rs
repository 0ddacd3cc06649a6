//! The `Page` trait, the optional `Themable` capability, and the per-frame
//! context handed to the active page.
//!
//! To add a new page:
//! 1. Add a variant to `PageKey` (and its sidebar label).
//! 2. Create a new file in `ui/pages/` implementing `Page`.
//! 3. Push `Box::new(MyPage::new(..))` into the registry in `App::new()`.

use eframe::egui::{self, Color32};

use crate::ui::nav::PageKey;
use crate::ui::theme::Theme;

/// Requests a page can raise during its `ui` call, drained by the shell
/// within the same frame.
///
/// `accent_change` is only ever filled by the settings page; the shell
/// applies the colour, notifies every [`Themable`] page, and persists it
/// before the frame ends.
pub struct PageCtx<'a> {
    pub theme: &'a Theme,
    pub nav_to: &'a mut Option<PageKey>,
    pub accent_change: &'a mut Option<Color32>,
}

/// One page of the suite.
///
/// Pages are constructed once at startup and live for the process lifetime.
/// Only the active page is rendered each frame; all others are hidden by
/// simply not being drawn.
pub trait Page {
    /// The navigation key this page is registered under.
    fn key(&self) -> PageKey;

    /// Display title shown in the header while this page is active.
    fn title(&self) -> &'static str;

    /// Draw the page body into the central panel.
    fn ui(&mut self, ui: &mut egui::Ui, ctx: &mut PageCtx<'_>);

    /// Capability probe: pages that cache accent-derived colours return
    /// themselves here and are notified on every accent change. Pages that
    /// derive everything from [`PageCtx::theme`] each frame return `None`
    /// and are skipped without error.
    fn as_themable(&mut self) -> Option<&mut dyn Themable> {
        None
    }
}

/// Optional capability: react to an accent-colour change.
pub trait Themable {
    fn update_colors(&mut self, accent: Color32);
}
