use eframe::egui::{
    self,
    containers,
};

use crate::gui::{
    app::Page,
    settings_modal::{
        SettingsData,
        SettingsModal,
    },
};

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        page: &mut Page,
        settings_modal: &mut SettingsModal,
        current_settings: &SettingsData,
        backend_connected: bool,
    ) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);

                ui.menu_button("File", |ui| {
                    if ui.button("Settings").clicked() {
                        settings_modal.open_settings(current_settings.clone());
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.separator();

                ui.selectable_value(page, Page::Home, "Home");
                ui.selectable_value(page, Page::Words, "Words");
                ui.selectable_value(page, Page::Sentences, "Sentences");
                ui.selectable_value(page, Page::Generate, "Generate");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_status_indicator(ui, backend_connected);
                });
            });
        });
    }

    fn show_status_indicator(ui: &mut egui::Ui, backend_connected: bool) {
        let color = if backend_connected {
            egui::Color32::from_rgb(0, 200, 0)
        } else {
            egui::Color32::from_rgb(200, 80, 80)
        };

        let tooltip = if backend_connected {
            "Connected to the vocabulary backend"
        } else {
            "Not connected to the vocabulary backend"
        };
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small("Backend").on_hover_text(tooltip);
            ui.small(egui::RichText::new("●").color(color)).on_hover_text(tooltip);
        });
    }
}
