//! Persisted user settings (the accent colour), stored as JSON under the
//! platform config directory.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ui::theme;

/// The on-disk settings document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Accent colour in `#RRGGBB` form.
    pub accent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            accent: theme::to_hex(theme::DEFAULT_ACCENT),
        }
    }
}

/// Loads and saves [`Settings`] at a fixed path.
///
/// A store with no path (no resolvable config directory) loads defaults and
/// turns saves into no-ops, so the app still runs on exotic setups.
pub struct SettingsStore {
    path: Option<PathBuf>,
}

impl SettingsStore {
    /// Store at `<config_dir>/tidydesk/settings.json`.
    pub fn default_location() -> Self {
        let path = dirs::config_dir().map(|d| d.join("tidydesk").join("settings.json"));
        if path.is_none() {
            log::warn!("no config directory found, settings will not persist");
        }
        Self { path }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    /// Read settings; a missing or malformed file falls back to defaults.
    pub fn load(&self) -> Settings {
        let Some(path) = &self.path else {
            return Settings::default();
        };
        match std::fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("settings: malformed {}: {e}", path.display());
                    Settings::default()
                }
            },
            Err(_) => Settings::default(),
        }
    }

    /// Write settings, creating the parent directory on first save.
    pub fn save(&self, settings: &Settings) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(settings)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::with_path(dir.path().join("nope/settings.json"));
        assert_eq!(store.load().accent, "#1F538D");
    }

    #[test]
    fn malformed_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();
        let store = SettingsStore::with_path(path);
        assert_eq!(store.load().accent, Settings::default().accent);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::with_path(dir.path().join("deep/dir/settings.json"));
        let settings = Settings {
            accent: "#FF0000".to_string(),
        };
        store.save(&settings).unwrap();
        assert_eq!(store.load().accent, "#FF0000");
    }
}
