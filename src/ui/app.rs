//! Main application struct and eframe integration
//!
//! This module contains the PrepApp that implements eframe::App.

use crate::integration::{OrchestratorCommand, OrchestratorHandle};
use crate::ui::components::{CallButton, CallView, GeneratingOverlay, InputBar, TranscriptPanel};
use crate::ui::state::{AppState, Screen};
use crate::ui::theme::Theme;
use egui::{self, CentralPanel, RichText, TopBottomPanel};
use tracing::info;

/// Draw one frame of the application
pub fn show_app(ctx: &egui::Context, state: &mut AppState, theme: &Theme) {
    show_header(ctx, theme);

    match state.screen.clone() {
        Screen::Call => show_call(ctx, state, theme),
        Screen::Landing { route } => show_landing(ctx, state, theme, &route),
    }

    if state.is_generating() {
        GeneratingOverlay::new(theme).show(ctx);
    }
}

fn show_header(ctx: &egui::Context, theme: &Theme) {
    TopBottomPanel::top("header")
        .frame(egui::Frame::none().fill(theme.bg_secondary).inner_margin(12.0))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Prepwise")
                        .size(20.0)
                        .strong()
                        .color(theme.primary),
                );
                ui.label(
                    RichText::new("Interview generation")
                        .size(14.0)
                        .color(theme.text_muted),
                );
            });
        });
}

fn show_call(ctx: &egui::Context, state: &mut AppState, theme: &Theme) {
    TopBottomPanel::bottom("controls")
        .frame(egui::Frame::none().fill(theme.bg_primary).inner_margin(theme.spacing))
        .show(ctx, |ui| {
            InputBar::new(state, theme).show(ui);
            ui.add_space(theme.spacing_sm);
            ui.vertical_centered(|ui| {
                CallButton::new(state, theme).show(ui);
            });
        });

    CentralPanel::default()
        .frame(egui::Frame::none().fill(theme.bg_primary).inner_margin(theme.spacing))
        .show(ctx, |ui| {
            CallView::new(state, theme).show(ui);
            ui.add_space(theme.spacing);
            TranscriptPanel::new(state, theme).show(ui);

            if let Some(error) = &state.last_error {
                ui.add_space(theme.spacing_sm);
                ui.label(RichText::new(error).color(theme.error));
            }
        });
}

fn show_landing(ctx: &egui::Context, state: &mut AppState, theme: &Theme, route: &str) {
    CentralPanel::default()
        .frame(egui::Frame::none().fill(theme.bg_primary).inner_margin(theme.spacing_lg))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(RichText::new("Home").color(theme.text_primary));
                ui.label(RichText::new(route).small().color(theme.text_muted));
                ui.add_space(theme.spacing);

                match &state.last_error {
                    Some(error) => {
                        ui.label(RichText::new(error).color(theme.error));
                    }
                    None => {
                        ui.label(
                            RichText::new("The interview setup call has ended.")
                                .color(theme.text_secondary),
                        );
                    }
                }

                ui.add_space(theme.spacing);
                if ui.button("Back to call").clicked() {
                    state.return_to_call();
                }
            });
        });
}

/// Main application
pub struct PrepApp {
    state: AppState,
    theme: Theme,
    handle: OrchestratorHandle,
}

impl PrepApp {
    pub fn new(cc: &eframe::CreationContext<'_>, mut state: AppState, handle: OrchestratorHandle) -> Self {
        let theme = Theme::dark();
        theme.apply(&cc.egui_ctx);
        state.attach(&handle);

        Self {
            state,
            theme,
            handle,
        }
    }
}

impl eframe::App for PrepApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll_events();
        show_app(ctx, &mut self.state, &self.theme);

        // Timers and speech run on the session thread; keep polling
        ctx.request_repaint_after(std::time::Duration::from_millis(50));
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Shutting down session");
        let _ = self.handle.send_command(OrchestratorCommand::Shutdown);
    }
}
