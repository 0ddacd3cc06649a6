mod error;
mod fsops;
mod settings;
mod ui;

use eframe::egui;

use crate::settings::SettingsStore;
use crate::ui::app::{App, WINDOW_HEIGHT, WINDOW_WIDTH};

fn main() -> eframe::Result {
    env_logger::init();

    let store = SettingsStore::default_location();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT]),
        ..Default::default()
    };
    eframe::run_native(
        "Personal Project Suite",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(store)))),
    )
}
