use eframe::egui;
use vseekbar::app::SeekBarApp;
use vseekbar::config::SeekBarConfig;
use vseekbar::constants::{APP_HEIGHT, APP_WIDTH};

// App version and metadata
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_NAME: &str = "vseekbar";

fn main() -> Result<(), eframe::Error> {
    // Initialize logger with default settings
    // Set RUST_LOG=debug to also see raw per-move progress values
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("eframe", log::LevelFilter::Warn)
        .init();

    log::info!("[Main] Starting {} v{}", APP_NAME, APP_VERSION);

    // Optional .env with VSEEKBAR_* overrides
    match dotenvy::dotenv() {
        Ok(path) => log::debug!("[Main] Loaded environment from {}", path.display()),
        Err(e) => log::debug!("[Main] No .env loaded: {}", e),
    }

    let config = SeekBarConfig::load();
    log::info!(
        "[Main] Sampling {} ({} ms), initial progress {:.0}",
        if config.sampling_enabled { "on" } else { "off" },
        config.sample_interval_ms,
        config.initial_progress
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!("{} v{}", APP_NAME, APP_VERSION))
            .with_inner_size([APP_WIDTH, APP_HEIGHT])
            .with_min_inner_size([APP_WIDTH * 0.5, APP_HEIGHT * 0.5])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(SeekBarApp::new(cc, config)))),
    )
}
