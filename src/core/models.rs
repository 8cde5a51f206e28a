use std::fmt;

/// Subjective learning difficulty of a word or practice sentence.
///
/// The backend is inconsistent about spelling: word records carry lowercase
/// tiers (`easy`/`medium`/`difficult`) while practice-sentence records use
/// the uppercase `EASY`/`MEDIUM`/`HARD` set. Both map onto this one enum;
/// the two wire spellings are produced by `word_value`/`practice_value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Difficult,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Difficult];

    /// Spelling used by the word endpoints.
    pub fn word_value(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Difficult => "difficult",
        }
    }

    /// Spelling used by the practice-sentence endpoints.
    pub fn practice_value(&self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Difficult => "HARD",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Difficult => "Difficult",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub id: u64,                 // Backend-assigned identity
    pub english: String,
    pub turkish: String,
    pub learned_date: String,    // Day stamp "YYYY-MM-DD", immutable after creation
    pub notes: String,           // Free text, empty when absent
    pub difficulty: Difficulty,
    pub sentences: Vec<Sentence>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    pub id: u64,
    pub english: String,
    pub turkish: String,
    pub word_id: u64,            // Owning word
}

/// Payload for `POST /words`. The learned date comes from the calendar
/// selection, already formatted as a day stamp.
#[derive(Debug, Clone)]
pub struct NewWord {
    pub english: String,
    pub turkish: String,
    pub learned_date: String,
    pub notes: String,
    pub difficulty: Difficulty,
}

/// Where a flat sentence record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceSource {
    /// Standalone practice sentence, not owned by any word.
    Practice,
    /// Projected from a word's owned sentence list.
    Word,
}

impl SentenceSource {
    pub fn label(&self) -> &'static str {
        match self {
            SentenceSource::Practice => "practice",
            SentenceSource::Word => "word",
        }
    }
}

/// Denormalized sentence record the search/filter/sort engine operates
/// over. Derived on every full fetch, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceWithSource {
    pub id: String,              // "practice_7" / "word_3" / sentence id / list position
    pub english: String,
    pub turkish: String,
    pub difficulty: Difficulty,
    pub added_date: Option<String>,   // Creation day stamp of a practice record
    pub learned_date: Option<String>, // Owning word's day stamp, when projected
    pub word_id: Option<u64>,
    pub word: Option<String>,         // Owning word's English text
    pub word_turkish: Option<String>,
    pub source: SentenceSource,
}

impl SentenceWithSource {
    /// The date the month filter and the listing order run on: creation
    /// date when the record has one, the owning word's learned date
    /// otherwise.
    pub fn sort_date(&self) -> Option<&str> {
        self.added_date.as_deref().or(self.learned_date.as_deref())
    }
}

/// Word and sentence counts for exactly one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DailyStats {
    pub word_count: usize,
    pub sentence_count: usize,
}

/// Rollup over one calendar month. Averages are per working day, rounded
/// to one decimal, and defined as zero when the month has no activity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthlyStats {
    pub total_words: usize,
    pub total_sentences: usize,
    pub working_days: usize,
    pub avg_words_per_day: f64,
    pub avg_sentences_per_day: f64,
}
