pub mod adapter;
pub mod errors;
pub mod models;
pub mod query;
pub mod stats;
pub mod tasks;

pub use errors::KelimeError;
pub use models::{
    DailyStats,
    Difficulty,
    MonthlyStats,
    NewWord,
    Sentence,
    SentenceWithSource,
    Word,
};
