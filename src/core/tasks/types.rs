use crate::core::models::{
    SentenceWithSource,
    Word,
};

/// Results handed back to the UI thread. Fetches carry normalized
/// domain data; mutations only report success, the app refetches to see
/// the new state.
#[derive(Debug, Clone)]
pub enum TaskResult {
    ConnectionChecked(bool),

    WordsLoaded(Result<Vec<Word>, String>),
    DayWordsLoaded(Result<Vec<Word>, String>),
    SentencesLoaded(Result<Vec<SentenceWithSource>, String>),

    WordCreated(Result<(), String>),
    WordDeleted(Result<(), String>),
    SentenceAdded(Result<(), String>),
    SentenceDeleted(Result<(), String>),
    PracticeSaved(Result<(), String>),

    GenerationReady(Vec<String>),
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::ConnectionChecked(_) => "connection_checked",
            TaskResult::WordsLoaded(_) => "words_loaded",
            TaskResult::DayWordsLoaded(_) => "day_words_loaded",
            TaskResult::SentencesLoaded(_) => "sentences_loaded",
            TaskResult::WordCreated(_) => "word_created",
            TaskResult::WordDeleted(_) => "word_deleted",
            TaskResult::SentenceAdded(_) => "sentence_added",
            TaskResult::SentenceDeleted(_) => "sentence_deleted",
            TaskResult::PracticeSaved(_) => "practice_saved",
            TaskResult::GenerationReady(_) => "generation_ready",
        }
    }
}
