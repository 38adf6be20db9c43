//! Most recent transcript lines

use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::text::{LayoutJob, TextFormat};
use egui::{self, FontId};

pub struct TranscriptPanel<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> TranscriptPanel<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        let entries = self.state.recent_transcript();
        if entries.is_empty() {
            return;
        }

        egui::Frame::none()
            .fill(self.theme.bg_secondary)
            .rounding(self.theme.card_rounding)
            .inner_margin(self.theme.spacing)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                egui::ScrollArea::vertical()
                    .id_salt("transcript")
                    .max_height(160.0)
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for entry in entries {
                            let color = if entry.is_ai() {
                                self.theme.ai_text
                            } else {
                                self.theme.text_secondary
                            };
                            let body = FontId::proportional(14.0);

                            let mut job = LayoutJob::default();
                            job.wrap.max_width = ui.available_width();
                            job.append(
                                entry.speaker.label(),
                                0.0,
                                TextFormat {
                                    font_id: body.clone(),
                                    color: self.theme.text_primary,
                                    ..Default::default()
                                },
                            );
                            job.append(
                                &entry.text,
                                0.0,
                                TextFormat {
                                    font_id: body,
                                    color,
                                    ..Default::default()
                                },
                            );
                            ui.label(job);
                        }
                    });
            });
    }
}
