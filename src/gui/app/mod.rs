use std::time::Instant;

use chrono::{
    Local,
    NaiveDate,
};
use eframe::egui;

use super::{
    confirm_modal::{
        ConfirmAction,
        ConfirmModal,
    },
    error_modal::ErrorModal,
    generate::{
        GenerateAction,
        GeneratePage,
    },
    home::HomePage,
    message_overlay::MessageOverlay,
    sentences::{
        SentenceTableState,
        SentencesPage,
    },
    settings_modal::{
        SettingsData,
        SettingsModal,
    },
    theme::{
        set_theme,
        Theme,
    },
    top_bar::TopBar,
    words::{
        WordsAction,
        WordsPage,
    },
};
use crate::{
    core::{
        adapter::sentences_from_words,
        models::{
            Difficulty,
            NewWord,
            SentenceSource,
            SentenceWithSource,
            Word,
        },
        stats::format_day_stamp,
        tasks::{
            TaskManager,
            TaskResult,
        },
    },
    persistence::{
        load_json_or_default,
        save_json,
    },
};

/// Stand-in translation for content saved straight from the generator.
const PLACEHOLDER_TRANSLATION: &str = "Türkçe çeviri eklenmeli";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Words,
    Sentences,
    Generate,
}

pub struct KelimeApp {
    // Backend Data
    pub words: Vec<Word>,
    pub day_words: Vec<Word>,
    pub practice_records: Vec<SentenceWithSource>,
    pub records: Vec<SentenceWithSource>,

    // Configuration
    pub settings_data: SettingsData,

    // UI State
    pub page: Page,
    pub selected_date: NaiveDate,
    pub selected_word: Option<String>,
    pub table_state: SentenceTableState,
    pub theme: Theme,
    pub message_overlay: MessageOverlay,
    pub words_page: WordsPage,
    pub generate_page: GeneratePage,

    // Modals
    pub settings_modal: SettingsModal,
    pub confirm_modal: ConfirmModal,
    pub error_modal: ErrorModal,

    // External Services
    pub backend_connected: bool,
    pub last_connection_check: Option<Instant>,
    task_manager: TaskManager,
}

impl KelimeApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let task_manager = TaskManager::new();
        let settings_data = load_json_or_default::<SettingsData>("settings.json");
        let selected_date = Local::now().date_naive();

        task_manager.check_connection(&settings_data.base_url);
        task_manager.fetch_words(&settings_data.base_url);
        task_manager.fetch_words_for_date(&settings_data.base_url, format_day_stamp(selected_date));
        task_manager.fetch_sentences(&settings_data.base_url);

        let mut message_overlay = MessageOverlay::new();
        message_overlay.set_message("Loading words...".to_string());

        let app = Self {
            // Backend Data
            words: Vec::new(),
            day_words: Vec::new(),
            practice_records: Vec::new(),
            records: Vec::new(),

            // Configuration
            settings_data,

            // UI State
            page: Page::default(),
            selected_date,
            selected_word: None,
            table_state: SentenceTableState::default(),
            theme: Theme::default(),
            message_overlay,
            words_page: WordsPage::new(),
            generate_page: GeneratePage::new(),

            // Modals
            settings_modal: SettingsModal::new(),
            confirm_modal: ConfirmModal::new(),
            error_modal: ErrorModal::new(),

            // External Services
            backend_connected: false,
            last_connection_check: Some(Instant::now()),
            task_manager,
        };

        set_theme(&cc.egui_ctx, app.theme.clone());

        app
    }
}

impl eframe::App for KelimeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let task_results = self.task_manager.poll_results();

        for result in task_results {
            self.handle_task_result(result);
        }

        self.update_connection_status();

        TopBar::show(
            ctx,
            &mut self.page,
            &mut self.settings_modal,
            &self.settings_data,
            self.backend_connected,
        );

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("page_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    match self.page {
                        Page::Home => {
                            if let Some(page) = HomePage::show(
                                ui,
                                &self.theme,
                                self.words.len(),
                                self.records.len(),
                            ) {
                                self.page = page;
                            }
                        }
                        Page::Words => {
                            if let Some(action) = self.words_page.show(
                                ui,
                                &self.theme,
                                &self.words,
                                &self.day_words,
                                self.selected_date,
                                self.selected_word.as_deref(),
                            ) {
                                self.handle_words_action(action);
                            }
                        }
                        Page::Sentences => {
                            SentencesPage::show(ui, &self.theme, &self.records, &mut self.table_state);
                        }
                        Page::Generate => {
                            if let Some(action) = self.generate_page.show(ui, &self.theme) {
                                self.handle_generate_action(action);
                            }
                        }
                    }
                });
        });

        self.message_overlay.show(ctx, &self.theme);
        self.error_modal.show(ctx);

        if let Some(settings) = self.settings_modal.show(ctx) {
            let base_url_changed = settings.base_url != self.settings_data.base_url;
            self.settings_data = settings;
            self.save_settings();

            if base_url_changed {
                self.backend_connected = false;
                self.refetch_all();
            }
        }

        if let Some(action) = self.confirm_modal.show(ctx) {
            match action {
                ConfirmAction::DeleteWord { id, english } => {
                    if self.selected_word.as_deref() == Some(english.as_str()) {
                        self.selected_word = None;
                    }
                    self.task_manager.delete_word(&self.settings_data.base_url, id);
                }
                ConfirmAction::DeleteSentence { word_id, sentence_id } => {
                    self.task_manager.delete_sentence(
                        &self.settings_data.base_url,
                        word_id,
                        sentence_id,
                    );
                }
            }
        }
    }
}

impl KelimeApp {
    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::ConnectionChecked(connected) => {
                self.backend_connected = connected;
            }

            TaskResult::WordsLoaded(result) => {
                self.message_overlay.clear_message();
                match result {
                    Ok(words) => {
                        self.words = words;
                        self.rebuild_records();
                    }
                    Err(error) => {
                        self.error_modal.show_error(
                            "Load Error",
                            "Unable to load words from the backend",
                            Some(&error),
                        );
                    }
                }
            }

            TaskResult::DayWordsLoaded(result) => match result {
                Ok(words) => self.day_words = words,
                Err(error) => {
                    self.error_modal.show_error(
                        "Load Error",
                        "Unable to load words for the selected date",
                        Some(&error),
                    );
                }
            },

            TaskResult::SentencesLoaded(result) => match result {
                Ok(records) => {
                    self.practice_records = records
                        .into_iter()
                        .filter(|record| record.source == SentenceSource::Practice)
                        .collect();
                    self.rebuild_records();
                }
                Err(error) => {
                    self.error_modal.show_error(
                        "Load Error",
                        "Unable to load practice sentences",
                        Some(&error),
                    );
                }
            },

            TaskResult::WordCreated(result) => match result {
                Ok(()) => self.refetch_words(),
                Err(error) => {
                    self.error_modal.show_error(
                        "Save Error",
                        "Unable to save the word",
                        Some(&error),
                    );
                }
            },

            TaskResult::WordDeleted(result) => match result {
                Ok(()) => self.refetch_words(),
                Err(error) => {
                    self.error_modal.show_error(
                        "Delete Error",
                        "Unable to delete the word",
                        Some(&error),
                    );
                }
            },

            TaskResult::SentenceAdded(result) => match result {
                Ok(()) => self.refetch_words(),
                Err(error) => {
                    self.error_modal.show_error(
                        "Save Error",
                        "Unable to add the sentence",
                        Some(&error),
                    );
                }
            },

            TaskResult::SentenceDeleted(result) => match result {
                Ok(()) => self.refetch_words(),
                Err(error) => {
                    self.error_modal.show_error(
                        "Delete Error",
                        "Unable to delete the sentence",
                        Some(&error),
                    );
                }
            },

            TaskResult::PracticeSaved(result) => match result {
                Ok(()) => self.task_manager.fetch_sentences(&self.settings_data.base_url),
                Err(error) => {
                    self.error_modal.show_error(
                        "Save Error",
                        "Unable to save the practice sentence",
                        Some(&error),
                    );
                }
            },

            TaskResult::GenerationReady(results) => {
                self.generate_page.set_results(results);
            }
        }
    }

    fn handle_words_action(&mut self, action: WordsAction) {
        match action {
            WordsAction::SelectDate(date) => {
                self.selected_date = date;
                self.selected_word = None;
                self.task_manager
                    .fetch_words_for_date(&self.settings_data.base_url, format_day_stamp(date));
            }
            WordsAction::SelectWord(english) => {
                self.selected_word = Some(english);
            }
            WordsAction::CreateWord(new_word) => {
                self.task_manager.create_word(&self.settings_data.base_url, new_word);
            }
            WordsAction::RequestDeleteWord { id, english } => {
                self.confirm_modal.ask(
                    format!(
                        "Delete \"{english}\"? Its example sentences will be removed too. \
                         This cannot be undone."
                    ),
                    ConfirmAction::DeleteWord { id, english },
                );
            }
            WordsAction::AddSentence { word_id, english, turkish } => {
                self.task_manager.add_sentence(
                    &self.settings_data.base_url,
                    word_id,
                    english,
                    turkish,
                );
            }
            WordsAction::RequestDeleteSentence { word_id, sentence_id } => {
                self.confirm_modal.ask(
                    "Delete this sentence? This cannot be undone.",
                    ConfirmAction::DeleteSentence { word_id, sentence_id },
                );
            }
        }
    }

    fn handle_generate_action(&mut self, action: GenerateAction) {
        match action {
            GenerateAction::Generate(request) => {
                self.task_manager.generate_content(request);
            }
            GenerateAction::SaveAsPractice(sentence) => {
                self.task_manager.save_practice_sentence(
                    &self.settings_data.base_url,
                    sentence,
                    PLACEHOLDER_TRANSLATION.to_string(),
                    Difficulty::Medium,
                    format_day_stamp(Local::now().date_naive()),
                );
            }
            GenerateAction::AddWordToBank(word) => {
                let new_word = NewWord {
                    english: word,
                    turkish: PLACEHOLDER_TRANSLATION.to_string(),
                    learned_date: format_day_stamp(Local::now().date_naive()),
                    notes: String::new(),
                    difficulty: Difficulty::Easy,
                };
                self.task_manager.create_word(&self.settings_data.base_url, new_word);
            }
        }
    }

    /// Word-derived sentences come from the word list itself; the practice
    /// feed only contributes records that carry their own text.
    fn rebuild_records(&mut self) {
        let mut records = sentences_from_words(&self.words);
        records.extend(self.practice_records.iter().cloned());
        self.records = records;
        self.table_state.mark_dirty();
    }

    fn refetch_words(&self) {
        self.task_manager.fetch_words(&self.settings_data.base_url);
        self.task_manager.fetch_words_for_date(
            &self.settings_data.base_url,
            format_day_stamp(self.selected_date),
        );
    }

    fn refetch_all(&self) {
        self.task_manager.check_connection(&self.settings_data.base_url);
        self.task_manager.fetch_sentences(&self.settings_data.base_url);
        self.refetch_words();
    }

    fn update_connection_status(&mut self) {
        let now = Instant::now();
        let should_check = match self.last_connection_check {
            None => true,
            Some(last_check) => now.duration_since(last_check).as_secs() >= 5,
        };

        if should_check {
            self.task_manager.check_connection(&self.settings_data.base_url);
            self.last_connection_check = Some(now);
        }
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings_data, "settings.json") {
            eprintln!("Failed to save settings: {}", e);
        }
    }
}
