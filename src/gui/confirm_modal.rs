use eframe::egui;

/// What the user is about to destroy. Returned from `show` once
/// confirmed so the app can fire the matching backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmAction {
    DeleteWord { id: u64, english: String },
    DeleteSentence { word_id: u64, sentence_id: u64 },
}

pub struct ConfirmModal {
    open: bool,
    message: String,
    action: Option<ConfirmAction>,
}

impl ConfirmModal {
    pub fn new() -> Self {
        Self { open: false, message: String::new(), action: None }
    }

    pub fn ask(&mut self, message: impl Into<String>, action: ConfirmAction) {
        self.message = message.into();
        self.action = Some(action);
        self.open = true;
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<ConfirmAction> {
        if !self.open {
            return None;
        }

        let mut result: Option<ConfirmAction> = None;

        let modal = egui::Modal::new(egui::Id::new("confirm_modal")).show(ctx, |ui| {
            ui.set_width(400.0);

            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("⚠").size(24.0).color(egui::Color32::YELLOW));
                ui.label(egui::RichText::new(&self.message).size(14.0));
            });

            ui.add_space(15.0);

            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(egui::RichText::new("Delete").color(ui.visuals().error_fg_color))
                        .clicked()
                    {
                        result = self.action.clone();
                        ui.close();
                    }

                    if ui.button("Cancel").clicked() {
                        ui.close();
                    }
                });
            });
        });

        if modal.should_close() {
            self.open = false;
            self.message.clear();
            self.action = None;
        }

        result
    }
}

impl Default for ConfirmModal {
    fn default() -> Self {
        Self::new()
    }
}
