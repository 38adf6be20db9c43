//! Call / End button

use crate::dialogue::CallStatus;
use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, Color32, RichText, Vec2};

/// Text shown on the call button for `status`
pub fn call_label(status: CallStatus) -> &'static str {
    match status {
        CallStatus::Inactive | CallStatus::Finished => "Call",
        CallStatus::Connecting => ". . .",
        CallStatus::Active => "End",
    }
}

pub struct CallButton<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> CallButton<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let status = self.state.snapshot.call_status;
        let fill = if status == CallStatus::Active {
            self.theme.error
        } else {
            self.theme.success
        };

        let button = egui::Button::new(
            RichText::new(call_label(status))
                .size(18.0)
                .strong()
                .color(Color32::WHITE),
        )
        .min_size(Vec2::new(140.0, 48.0))
        .rounding(self.theme.button_rounding)
        .fill(fill);

        let enabled = status == CallStatus::Active || status.can_start();
        let response = ui.add_enabled(enabled, button);

        if status == CallStatus::Connecting {
            let t = ui.ctx().input(|i| i.time);
            let pulse = ((t * 2.0).sin() * 0.5 + 0.5) as f32;
            ui.painter().rect_stroke(
                response.rect.expand(2.0 + pulse * 4.0),
                self.theme.button_rounding,
                egui::Stroke::new(2.0, self.theme.success.gamma_multiply(1.0 - pulse * 0.6)),
            );
            ui.ctx().request_repaint();
        }

        if response.clicked() {
            match status {
                CallStatus::Active => self.state.disconnect(),
                _ => self.state.start_call(),
            }
        }

        response
    }
}
