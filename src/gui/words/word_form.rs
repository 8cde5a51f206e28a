use chrono::NaiveDate;
use eframe::egui::{
    self,
    RichText,
    TextEdit,
    Ui,
};

use crate::{
    core::{
        models::{
            Difficulty,
            NewWord,
        },
        stats::format_day_stamp,
    },
    gui::theme::Theme,
};

/// Form for saving a new word under the selected calendar date.
pub struct WordForm {
    english: String,
    turkish: String,
    notes: String,
    difficulty: Difficulty,
    error: Option<String>,
}

impl WordForm {
    pub fn new() -> Self {
        Self {
            english: String::new(),
            turkish: String::new(),
            notes: String::new(),
            difficulty: Difficulty::default(),
            error: None,
        }
    }

    pub fn show(&mut self, ui: &mut Ui, theme: &Theme, selected_date: NaiveDate) -> Option<NewWord> {
        let mut submitted = None;

        ui.label(theme.bold(ui.ctx(), "Add a Word"));
        ui.weak(format!(
            "Saved under {}",
            selected_date.format("%B %-d, %Y")
        ));
        ui.add_space(6.0);

        egui::Grid::new("word_form_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("English word:");
                ui.add(
                    TextEdit::singleline(&mut self.english)
                        .hint_text("e.g. harbor")
                        .desired_width(220.0),
                );
                ui.end_row();

                ui.label("Turkish meaning:");
                ui.add(
                    TextEdit::singleline(&mut self.turkish)
                        .hint_text("e.g. liman")
                        .desired_width(220.0),
                );
                ui.end_row();

                ui.label("Notes:");
                ui.add(
                    TextEdit::singleline(&mut self.notes)
                        .hint_text("Optional")
                        .desired_width(220.0),
                );
                ui.end_row();

                ui.label("Difficulty:");
                ui.horizontal(|ui| {
                    for difficulty in Difficulty::ALL {
                        let label = RichText::new(difficulty.label())
                            .color(theme.difficulty_color(ui.ctx(), difficulty));
                        ui.selectable_value(&mut self.difficulty, difficulty, label);
                    }
                });
                ui.end_row();
            });

        if let Some(error) = &self.error {
            ui.colored_label(theme.red(ui.ctx()), error);
        }

        ui.add_space(4.0);
        if ui.button("Save Word").clicked() {
            let english = self.english.trim();
            let turkish = self.turkish.trim();
            if english.is_empty() || turkish.is_empty() {
                self.error = Some("English word and Turkish meaning are required".to_string());
            } else {
                submitted = Some(NewWord {
                    english: english.to_string(),
                    turkish: turkish.to_string(),
                    learned_date: format_day_stamp(selected_date),
                    notes: self.notes.trim().to_string(),
                    difficulty: self.difficulty,
                });
                self.english.clear();
                self.turkish.clear();
                self.notes.clear();
                self.difficulty = Difficulty::default();
                self.error = None;
            }
        }

        submitted
    }
}
