use eframe::egui::{
    self,
    RichText,
};

use crate::{
    generator::{
        GenerationKind,
        GenerationRequest,
        LanguageLevel,
    },
    gui::theme::Theme,
};

/// What the page wants the app to do this frame.
pub enum GenerateAction {
    Generate(GenerationRequest),
    SaveAsPractice(String),
    AddWordToBank(String),
}

pub struct GeneratePage {
    word: String,
    kind: GenerationKind,
    context_enabled: bool,
    context: String,
    level_enabled: bool,
    level: LanguageLevel,
    generating: bool,
    results: Vec<String>,
}

impl GeneratePage {
    pub fn new() -> Self {
        Self {
            word: String::new(),
            kind: GenerationKind::default(),
            context_enabled: false,
            context: String::new(),
            level_enabled: false,
            level: LanguageLevel::default(),
            generating: false,
            results: Vec::new(),
        }
    }

    pub fn set_results(&mut self, results: Vec<String>) {
        self.results = results;
        self.generating = false;
    }

    pub fn show(&mut self, ui: &mut egui::Ui, theme: &Theme) -> Option<GenerateAction> {
        let mut action = None;

        ui.heading(theme.heading(ui.ctx(), "Generate Practice"));
        ui.label(
            RichText::new("Build practice sentences and paragraphs around one of your words.")
                .color(ui.visuals().weak_text_color()),
        );
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            ui.label("Word:");
            ui.add(
                egui::TextEdit::singleline(&mut self.word)
                    .hint_text("e.g. harbor")
                    .desired_width(220.0),
            );
        });

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label("Kind:");
            ui.radio_value(&mut self.kind, GenerationKind::Sentence, "Sentences");
            ui.radio_value(&mut self.kind, GenerationKind::Paragraph, "Paragraph");
        });

        ui.add_space(6.0);
        ui.checkbox(&mut self.context_enabled, "Use a context");
        if self.context_enabled {
            ui.add(
                egui::TextEdit::singleline(&mut self.context)
                    .hint_text("e.g. maritime trade")
                    .desired_width(220.0),
            );
        }

        ui.add_space(6.0);
        ui.checkbox(&mut self.level_enabled, "Target a language level");
        if self.level_enabled {
            egui::ComboBox::from_id_salt("language_level")
                .selected_text(self.level.label())
                .show_ui(ui, |ui| {
                    for level in LanguageLevel::ALL {
                        ui.selectable_value(&mut self.level, level, level.label());
                    }
                });
        }

        ui.add_space(10.0);
        let can_generate = !self.word.trim().is_empty() && !self.generating;
        if ui.add_enabled(can_generate, egui::Button::new("Generate")).clicked() {
            self.generating = true;
            self.results.clear();
            action = Some(GenerateAction::Generate(self.request()));
        }

        if self.generating {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.add(egui::Spinner::new());
                ui.label("Generating...");
            });
        }

        if !self.results.is_empty() {
            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);

            for (index, result) in self.results.iter().enumerate() {
                egui::Frame::new()
                    .fill(ui.visuals().faint_bg_color)
                    .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
                    .corner_radius(6.0)
                    .inner_margin(10.0)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(result);
                        ui.add_space(6.0);
                        if ui
                            .add(egui::Button::new("Save as practice sentence").small())
                            .clicked()
                        {
                            action = Some(GenerateAction::SaveAsPractice(result.clone()));
                        }
                    });

                if index + 1 < self.results.len() {
                    ui.add_space(6.0);
                }
            }

            ui.add_space(10.0);
            let add_label = format!("Add \"{}\" to the word bank", self.word.trim());
            if ui.button(add_label).clicked() {
                action = Some(GenerateAction::AddWordToBank(self.word.trim().to_string()));
            }
        }

        action
    }

    fn request(&self) -> GenerationRequest {
        let context = self.context.trim();
        GenerationRequest {
            word: self.word.trim().to_string(),
            kind: self.kind,
            context: (self.context_enabled && !context.is_empty())
                .then(|| context.to_string()),
            level: self.level_enabled.then_some(self.level),
        }
    }
}

impl Default for GeneratePage {
    fn default() -> Self {
        Self::new()
    }
}
