use eframe::egui::{
    self,
    RichText,
    ScrollArea,
    Ui,
};

use super::WordsAction;
use crate::{
    core::models::Word,
    gui::theme::Theme,
};

/// Words learned on the selected date, with selection and delete controls.
pub struct WordList;

impl WordList {
    pub fn show(
        ui: &mut Ui,
        theme: &Theme,
        day_words: &[Word],
        selected_word: Option<&str>,
    ) -> Option<WordsAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            ui.label(theme.bold(ui.ctx(), "Words"));
            ui.weak(format!("{} words", day_words.len()));
        });
        ui.add_space(4.0);

        if day_words.is_empty() {
            ui.weak("No words learned on this date.");
            return None;
        }

        ScrollArea::vertical()
            .id_salt("word_list_scroll")
            .max_height(360.0)
            .show(ui, |ui| {
                for word in day_words {
                    let is_selected = selected_word == Some(word.english.as_str());
                    egui::Frame::new()
                        .fill(ui.visuals().faint_bg_color)
                        .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
                        .corner_radius(6.0)
                        .inner_margin(8.0)
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.horizontal(|ui| {
                                ui.vertical(|ui| {
                                    let title = RichText::new(&word.english).strong();
                                    if ui.selectable_label(is_selected, title).clicked() {
                                        action = Some(WordsAction::SelectWord(word.english.clone()));
                                    }
                                    ui.weak(&word.turkish);
                                });
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Min),
                                    |ui| {
                                        if ui
                                            .small_button("🗑")
                                            .on_hover_text("Delete word")
                                            .clicked()
                                        {
                                            action = Some(WordsAction::RequestDeleteWord {
                                                id: word.id,
                                                english: word.english.clone(),
                                            });
                                        }
                                        ui.label(
                                            RichText::new(word.difficulty.label())
                                                .size(12.0)
                                                .color(theme.difficulty_color(
                                                    ui.ctx(),
                                                    word.difficulty,
                                                )),
                                        );
                                    },
                                );
                            });
                        });
                    ui.add_space(4.0);
                }
            });

        action
    }
}
