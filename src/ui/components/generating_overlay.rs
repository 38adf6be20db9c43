//! Modal shown while the interview is being generated

use crate::ui::theme::Theme;
use egui::{self, Order, RichText, Sense, UiBuilder};

pub const GENERATING_TITLE: &str = "Generating your interview questions...";
pub const GENERATING_SUBTITLE: &str = "Please wait while we prepare everything for you.";

pub struct GeneratingOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> GeneratingOverlay<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    pub fn show(self, ctx: &egui::Context) {
        let screen = ctx.screen_rect();

        egui::Area::new(egui::Id::new("generating_overlay"))
            .order(Order::Foreground)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                // Swallow clicks meant for the call screen underneath
                ui.allocate_rect(screen, Sense::click());
                ui.painter().rect_filled(screen, 0.0, self.theme.overlay_scrim);

                let card = egui::Rect::from_center_size(screen.center(), egui::vec2(360.0, 140.0));
                ui.allocate_new_ui(UiBuilder::new().max_rect(card), |ui| {
                    egui::Frame::none()
                        .fill(self.theme.bg_secondary)
                        .rounding(self.theme.card_rounding)
                        .inner_margin(self.theme.spacing_lg)
                        .show(ui, |ui| {
                            ui.vertical_centered(|ui| {
                                ui.add(egui::Spinner::new().size(32.0).color(self.theme.primary));
                                ui.add_space(self.theme.spacing_sm);
                                ui.label(
                                    RichText::new(GENERATING_TITLE)
                                        .size(17.0)
                                        .color(self.theme.text_primary),
                                );
                                ui.label(
                                    RichText::new(GENERATING_SUBTITLE)
                                        .small()
                                        .color(self.theme.text_muted),
                                );
                            });
                        });
                });
            });
    }
}
