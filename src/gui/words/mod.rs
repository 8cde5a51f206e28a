mod sentence_panel;
mod stats_panel;
mod word_form;
mod word_list;

use chrono::NaiveDate;
use eframe::egui::Ui;
use sentence_panel::SentencePanel;
use stats_panel::StatsPanel;
use word_form::WordForm;
use word_list::WordList;

use crate::{
    core::{
        models::{
            NewWord,
            Word,
        },
        stats::dates_with_activity,
    },
    gui::{
        calendar::Calendar,
        theme::Theme,
    },
};

#[derive(Debug, Clone)]
pub enum WordsAction {
    SelectDate(NaiveDate),
    SelectWord(String),
    CreateWord(NewWord),
    RequestDeleteWord { id: u64, english: String },
    AddSentence { word_id: u64, english: String, turkish: String },
    RequestDeleteSentence { word_id: u64, sentence_id: u64 },
}

pub struct WordsPage {
    calendar: Calendar,
    word_form: WordForm,
    sentence_panel: SentencePanel,
}

impl WordsPage {
    pub fn new() -> Self {
        Self {
            calendar: Calendar::new(),
            word_form: WordForm::new(),
            sentence_panel: SentencePanel::new(),
        }
    }

    pub fn show(
        &mut self,
        ui: &mut Ui,
        theme: &Theme,
        words: &[Word],
        day_words: &[Word],
        selected_date: NaiveDate,
        selected_word: Option<&str>,
    ) -> Option<WordsAction> {
        let mut action = None;

        ui.label(theme.heading(ui.ctx(), "Your word learning calendar"));
        ui.weak("Pick a date to see the words you learned that day.");
        ui.add_space(8.0);

        let marked = dates_with_activity(words);
        ui.columns(2, |columns| {
            if let Some(date) =
                self.calendar
                    .show(&mut columns[0], theme, Some(selected_date), &marked)
            {
                action = Some(WordsAction::SelectDate(date));
            }
            columns[0].add_space(8.0);
            StatsPanel::show(&mut columns[0], theme, words, selected_date);

            if let Some(new_word) = self.word_form.show(&mut columns[1], theme, selected_date) {
                action = Some(WordsAction::CreateWord(new_word));
            }
        });

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(6.0);

        let selected = selected_word.and_then(|english| {
            day_words
                .iter()
                .find(|word| word.english == english)
                .or_else(|| words.iter().find(|word| word.english == english))
        });

        ui.columns(2, |columns| {
            if let Some(list_action) =
                WordList::show(&mut columns[0], theme, day_words, selected_word)
            {
                action = Some(list_action);
            }
            if let Some(panel_action) = self.sentence_panel.show(&mut columns[1], theme, selected)
            {
                action = Some(panel_action);
            }
        });

        action
    }
}
