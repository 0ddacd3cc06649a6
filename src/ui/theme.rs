//! Shared accent colour, preset palette, and hex conversion helpers.

use eframe::egui::Color32;
use once_cell::sync::Lazy;

/// The accent colour the app starts with (steel blue).
pub const DEFAULT_ACCENT: Color32 = Color32::from_rgb(31, 83, 141);

/// Preset accent colours offered on the settings page.
pub static ACCENT_PRESETS: Lazy<Vec<(&'static str, Color32)>> = Lazy::new(|| {
    vec![
        ("Steel Blue", DEFAULT_ACCENT),
        ("Crimson", Color32::from_rgb(196, 30, 58)),
        ("Forest", Color32::from_rgb(34, 120, 62)),
        ("Amber", Color32::from_rgb(204, 138, 0)),
        ("Violet", Color32::from_rgb(110, 64, 170)),
        ("Teal", Color32::from_rgb(0, 128, 128)),
        ("Slate", Color32::from_rgb(90, 103, 120)),
        ("Rose", Color32::from_rgb(199, 81, 115)),
    ]
});

/// The single shared theme value broadcast to pages on change.
///
/// Only the accent is mutable at runtime; the remaining colours are fixed
/// companions derived for tile and hover backgrounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub accent: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: DEFAULT_ACCENT,
        }
    }
}

impl Theme {
    /// Background fill for dashboard tiles.
    pub fn tile_fill(&self) -> Color32 {
        Color32::from_rgb(0x2b, 0x2b, 0x2b)
    }

    /// Hover fill for inactive sidebar buttons.
    pub fn nav_hover(&self) -> Color32 {
        Color32::from_rgb(0x33, 0x33, 0x33)
    }
}

// ── Hex conversion ─────────────────────────────────────────────────────────────

/// Parse a `#RRGGBB` string (case-insensitive, leading `#` optional).
pub fn parse_hex(s: &str) -> Option<Color32> {
    let hex = s.trim().trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color32::from_rgb(r, g, b))
}

/// Format a colour as `#RRGGBB` (alpha is not persisted).
pub fn to_hex(c: Color32) -> String {
    format!("#{:02X}{:02X}{:02X}", c.r(), c.g(), c.b())
}
