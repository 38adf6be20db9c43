//! Interviewer and user cards
//!
//! Text-mode speech shows what the interviewer is saying as a caption
//! under its card; the ring around the avatar pulses while it speaks.

use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, Align2, Color32, FontId, RichText, Sense, Vec2};

const AVATAR_RADIUS: f32 = 40.0;
const CARD_HEIGHT: f32 = 220.0;

/// Side-by-side interviewer and user cards
pub struct CallView<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> CallView<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        let gap = self.theme.spacing;
        let card_width = ((ui.available_width() - gap) / 2.0).max(160.0);

        ui.horizontal(|ui| {
            self.card(ui, card_width, |ui| self.interviewer(ui));
            ui.add_space(gap);
            self.card(ui, card_width, |ui| self.candidate(ui));
        });
    }

    fn card(&self, ui: &mut egui::Ui, width: f32, content: impl FnOnce(&mut egui::Ui)) {
        egui::Frame::none()
            .fill(self.theme.bg_secondary)
            .rounding(self.theme.card_rounding)
            .inner_margin(self.theme.spacing)
            .show(ui, |ui| {
                ui.set_width(width - 2.0 * self.theme.spacing);
                ui.set_min_height(CARD_HEIGHT);
                ui.vertical_centered(content);
            });
    }

    fn interviewer(&self, ui: &mut egui::Ui) {
        let speaking = self.state.snapshot.speaking;
        self.avatar(ui, "AI", self.theme.primary, speaking);
        ui.heading(RichText::new("AI Interviewer").color(self.theme.text_primary));

        if speaking {
            let response = ui.label(RichText::new("speaking").small().color(self.theme.speaking));
            response.widget_info(|| {
                egui::WidgetInfo::labeled(egui::WidgetType::Label, true, "Interviewer speaking")
            });
        }

        if let Some(caption) = &self.state.snapshot.caption {
            ui.add_space(self.theme.spacing_sm);
            ui.label(
                RichText::new(caption)
                    .italics()
                    .color(self.theme.text_secondary),
            );
        }
    }

    fn candidate(&self, ui: &mut egui::Ui) {
        let initial = self
            .state
            .user
            .user_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string());
        self.avatar(ui, &initial, self.theme.bg_tertiary, false);
        ui.heading(RichText::new(&self.state.user.user_name).color(self.theme.text_primary));

        if self.state.snapshot.listening {
            let response = ui.label(RichText::new("● listening").small().color(self.theme.listening));
            response.widget_info(|| {
                egui::WidgetInfo::labeled(egui::WidgetType::Label, true, "Listening for answer")
            });
        }
    }

    fn avatar(&self, ui: &mut egui::Ui, text: &str, fill: Color32, active: bool) {
        let size = Vec2::splat(AVATAR_RADIUS * 2.0 + 16.0);
        let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
        if !ui.is_rect_visible(rect) {
            return;
        }

        let painter = ui.painter();
        let center = rect.center();
        painter.circle_filled(center, AVATAR_RADIUS, fill);
        painter.text(
            center,
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(24.0),
            self.theme.text_primary,
        );

        if active {
            let t = ui.ctx().input(|i| i.time);
            let pulse = ((t * 3.0).sin() * 0.5 + 0.5) as f32;
            painter.circle_stroke(
                center,
                AVATAR_RADIUS + 2.0 + pulse * 5.0,
                egui::Stroke::new(2.0, self.theme.speaking.gamma_multiply(1.0 - pulse * 0.5)),
            );
            ui.ctx().request_repaint();
        }
    }
}
