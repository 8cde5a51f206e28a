use eframe::egui::{
    self,
    RichText,
    ScrollArea,
    TextEdit,
    Ui,
};

use super::WordsAction;
use crate::{
    core::models::Word,
    gui::theme::Theme,
};

/// Example sentences for the selected word, with an add form and per-sentence delete.
pub struct SentencePanel {
    english_input: String,
    turkish_input: String,
}

impl SentencePanel {
    pub fn new() -> Self {
        Self {
            english_input: String::new(),
            turkish_input: String::new(),
        }
    }

    pub fn show(&mut self, ui: &mut Ui, theme: &Theme, word: Option<&Word>) -> Option<WordsAction> {
        let mut action = None;

        ui.label(theme.bold(ui.ctx(), "Example Sentences"));
        ui.add_space(4.0);

        let Some(word) = word else {
            ui.weak("Select a word to see its example sentences.");
            return None;
        };

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(&word.english)
                    .size(16.0)
                    .strong()
                    .color(theme.purple(ui.ctx())),
            );
            ui.label(
                RichText::new(word.difficulty.label())
                    .size(12.0)
                    .color(theme.difficulty_color(ui.ctx(), word.difficulty)),
            );
        });

        egui::CollapsingHeader::new("Meaning")
            .default_open(true)
            .show(ui, |ui| {
                ui.label(&word.turkish);
                if !word.notes.is_empty() {
                    ui.weak(RichText::new(&word.notes).italics());
                }
            });

        ui.add_space(6.0);
        if word.sentences.is_empty() {
            ui.weak("No example sentences for this word yet.");
        } else {
            ScrollArea::vertical()
                .id_salt("sentence_panel_scroll")
                .max_height(240.0)
                .show(ui, |ui| {
                    for sentence in &word.sentences {
                        egui::Frame::new()
                            .fill(ui.visuals().faint_bg_color)
                            .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
                            .corner_radius(6.0)
                            .inner_margin(8.0)
                            .show(ui, |ui| {
                                ui.set_width(ui.available_width());
                                ui.horizontal(|ui| {
                                    ui.vertical(|ui| {
                                        ui.label(&sentence.english);
                                        ui.weak(RichText::new(&sentence.turkish).italics());
                                    });
                                    ui.with_layout(
                                        egui::Layout::right_to_left(egui::Align::Min),
                                        |ui| {
                                            if ui
                                                .small_button("🗑")
                                                .on_hover_text("Delete sentence")
                                                .clicked()
                                            {
                                                action =
                                                    Some(WordsAction::RequestDeleteSentence {
                                                        word_id: word.id,
                                                        sentence_id: sentence.id,
                                                    });
                                            }
                                        },
                                    );
                                });
                            });
                        ui.add_space(4.0);
                    }
                });
        }

        ui.add_space(8.0);
        ui.separator();
        ui.label("Add a sentence:");
        ui.add(
            TextEdit::singleline(&mut self.english_input)
                .hint_text("English sentence")
                .desired_width(f32::INFINITY),
        );
        ui.add(
            TextEdit::singleline(&mut self.turkish_input)
                .hint_text("Turkish translation")
                .desired_width(f32::INFINITY),
        );

        let can_add =
            !self.english_input.trim().is_empty() && !self.turkish_input.trim().is_empty();
        if ui
            .add_enabled(can_add, egui::Button::new("Add Sentence"))
            .clicked()
        {
            action = Some(WordsAction::AddSentence {
                word_id: word.id,
                english: self.english_input.trim().to_string(),
                turkish: self.turkish_input.trim().to_string(),
            });
            self.english_input.clear();
            self.turkish_input.clear();
        }

        action
    }
}
