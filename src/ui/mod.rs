//! GUI implementation with egui/eframe
//!
//! This module provides the desktop call screen using the eframe framework.

mod app;
mod components;
mod state;
mod theme;

pub use app::{show_app, PrepApp};
pub use components::{call_label, GENERATING_SUBTITLE, GENERATING_TITLE};
pub use state::{AppState, Screen, VISIBLE_TRANSCRIPT_ENTRIES};
pub use theme::Theme;

use crate::integration::{AppConfig, Orchestrator};

/// Start the session runtime and run the window until it is closed
pub fn run(config: AppConfig) -> anyhow::Result<()> {
    let user = config.user.clone();
    let (orchestrator, handle) = Orchestrator::new(config)?;
    let worker = orchestrator.start()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([600.0, 480.0])
            .with_title("Prepwise Interview Setup"),
        ..Default::default()
    };

    let app_handle = handle.clone();
    eframe::run_native(
        "Prepwise",
        options,
        Box::new(move |cc| Ok(Box::new(PrepApp::new(cc, AppState::new(user), app_handle)))),
    )
    .map_err(|e| anyhow::anyhow!("UI error: {}", e))?;

    let _ = handle.send_command(crate::integration::OrchestratorCommand::Shutdown);
    let _ = worker.join();
    Ok(())
}
