use eframe::egui;

use crate::gui::theme::Theme;

/// Dims the whole window and parks a spinner in the middle while a
/// blocking fetch is in flight.
#[derive(Default)]
pub struct MessageOverlay {
    message: Option<String>,
}

impl MessageOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_message(&mut self, message: String) {
        self.message = Some(message);
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn show(&self, ctx: &egui::Context, theme: &Theme) {
        let Some(message) = &self.message else {
            return;
        };

        let screen_rect = ctx.screen_rect();

        egui::Area::new(egui::Id::new("message_overlay_dim"))
            .order(egui::Order::Foreground)
            .fixed_pos(screen_rect.min)
            .show(ctx, |ui| {
                ui.allocate_space(screen_rect.size());
                ui.painter().rect_filled(screen_rect, 0.0, egui::Color32::from_black_alpha(120));
            });

        egui::Area::new(egui::Id::new("message_overlay_box"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style())
                    .stroke(egui::Stroke::new(2.0, theme.red(ui.ctx())))
                    .inner_margin(16.0)
                    .show(ui, |ui| {
                        ui.set_min_width(180.0);
                        ui.vertical_centered(|ui| {
                            ui.add(egui::Spinner::new().size(22.0));
                            ui.add_space(6.0);
                            ui.label(message);
                        });
                    });
            });
    }
}
