use eframe::egui;

use crate::api;

#[derive(Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SettingsData {
    pub base_url: String,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { base_url: api::DEFAULT_BASE_URL.to_string() }
    }
}

pub struct SettingsModal {
    open: bool,
    settings: SettingsData,
    original_settings: SettingsData,
}

impl SettingsModal {
    pub fn new() -> Self {
        Self {
            open: false,
            settings: SettingsData::default(),
            original_settings: SettingsData::default(),
        }
    }

    pub fn open_settings(&mut self, current_settings: SettingsData) {
        self.settings = current_settings.clone();
        self.original_settings = current_settings;
        self.open = true;
    }

    fn is_dirty(&self) -> bool {
        self.settings != self.original_settings
    }

    /// Returns the new settings once, on save.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<SettingsData> {
        if !self.open {
            return None;
        }

        let mut result: Option<SettingsData> = None;

        let modal = egui::Modal::new(egui::Id::new("settings_modal")).show(ctx, |ui| {
            ui.set_width(400.0);

            ui.heading("Backend");
            ui.add_space(5.0);

            ui.horizontal(|ui| {
                ui.label("Base URL:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.settings.base_url)
                        .desired_width(f32::INFINITY),
                );
            });
            ui.label(
                egui::RichText::new("The REST service that stores your words and sentences.")
                    .color(ui.visuals().weak_text_color())
                    .size(12.0),
            );

            ui.separator();

            if self.is_dirty() {
                ui.horizontal(|ui| {
                    ui.colored_label(egui::Color32::YELLOW, "⚠");
                    ui.label("Settings have been modified");
                });
                ui.add_space(5.0);
            }

            ui.horizontal(|ui| {
                let is_dirty = self.is_dirty();

                let save_clicked =
                    ui.add_enabled(is_dirty, egui::Button::new("Save Settings")).clicked();
                let cancel_clicked =
                    ui.add_enabled(is_dirty, egui::Button::new("Cancel")).clicked();

                let mut reset_clicked = false;
                ui.with_layout(egui::Layout::bottom_up(egui::Align::RIGHT), |ui| {
                    reset_clicked = ui.button("Restore Default").clicked();
                });

                if save_clicked {
                    let mut settings = self.settings.clone();
                    settings.base_url = settings.base_url.trim().to_string();
                    self.settings = settings.clone();
                    self.original_settings = settings.clone();
                    result = Some(settings);
                    ui.close();
                } else if cancel_clicked {
                    self.settings = self.original_settings.clone();
                } else if reset_clicked {
                    self.settings = SettingsData::default();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        result
    }
}

impl Default for SettingsModal {
    fn default() -> Self {
        Self::new()
    }
}
