//! Application entry point: AI Text Corrector.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (defaults on first run or when the file
//!    is invalid; an invalid file is then never overwritten).
//! 3. Create the [`tokio`] runtime that carries correction requests.
//! 4. Build the correction backend, toast queue, clipboard and downloader.
//! 5. Run [`eframe::run_native`]: blocks the main thread until the window
//!    is closed.

use std::sync::Arc;
use std::time::Duration;

use eframe::egui;
use text_corrector::{
    app::{apply_theme, CorrectorApp},
    clipboard::SystemClipboard,
    config::{AppConfig, SettingsFile},
    correction::build_client,
    download::FileAssetDownloader,
    notify::ToastQueue,
    orchestrator::CorrectionOrchestrator,
};

fn native_options(config: &AppConfig) -> eframe::NativeOptions {
    let (width, height) = config.ui.window_size;
    let viewport = egui::ViewportBuilder::default()
        .with_title("AI Text Corrector")
        .with_inner_size([width, height])
        .with_min_inner_size([420.0, 360.0]);

    eframe::NativeOptions {
        viewport,
        ..Default::default()
    }
}

fn main() -> eframe::Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("AI Text Corrector starting up");

    // 2. Configuration
    let (config, settings) = SettingsFile::open_default();
    log::info!(
        "Correction backend: {:?} at {}",
        config.service.backend,
        config.service.endpoint_url
    );

    // 3. Tokio runtime (one worker is plenty for a single request at a time)
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .expect("failed to create tokio runtime");

    // 4. Orchestrator and its collaborators
    let toasts = ToastQueue::new(Duration::from_secs(config.ui.toast_secs));
    let orchestrator = CorrectionOrchestrator::new(
        build_client(&config.service),
        Arc::new(toasts.clone()),
        Arc::new(SystemClipboard::new()),
        Arc::new(FileAssetDownloader::new(config.download.resolve_dir())),
    );

    // 5. Window
    let theme = config.ui.theme;
    let options = native_options(&config);
    let app = CorrectorApp::new(
        orchestrator,
        toasts,
        rt.handle().clone(),
        config,
        settings,
    );

    eframe::run_native(
        "AI Text Corrector",
        options,
        Box::new(move |cc| {
            apply_theme(&cc.egui_ctx, theme);
            Ok(Box::new(app))
        }),
    )
}
