use std::collections::HashSet;

use chrono::{
    Datelike,
    NaiveDate,
};

use super::models::{
    DailyStats,
    MonthlyStats,
    Word,
};

/// Parses a `YYYY-MM-DD` day stamp by splitting on `-` and rebuilding the
/// date from its plain components. Generic date-string parsers are off
/// limits here: anything that routes through a timestamp can shift the
/// day across a timezone boundary, and these stamps are calendar days,
/// not instants.
pub fn parse_day_stamp(stamp: &str) -> Option<NaiveDate> {
    let mut parts = stamp.split('-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Formats a date back into the day-stamp form the backend stores,
/// from its own year/month/day components.
pub fn format_day_stamp(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Every calendar date with at least one learned word, deduplicated.
/// Unparseable stamps are ignored rather than failing the whole set.
pub fn dates_with_activity(words: &[Word]) -> HashSet<NaiveDate> {
    words.iter().filter_map(|word| parse_day_stamp(&word.learned_date)).collect()
}

/// Counts for exactly one calendar date. The filter compares day stamps
/// as strings against the reformatted `date`, so a word only matches the
/// day it was recorded under.
pub fn daily_stats(words: &[Word], date: NaiveDate) -> DailyStats {
    let stamp = format_day_stamp(date);

    let mut stats = DailyStats::default();
    for word in words {
        if word.learned_date == stamp {
            stats.word_count += 1;
            stats.sentence_count += word.sentences.len();
        }
    }

    stats
}

/// Rollup for the calendar month containing `date`. Working days are the
/// distinct day stamps in the month; both averages are defined as zero
/// when there are none.
pub fn monthly_stats(words: &[Word], date: NaiveDate) -> MonthlyStats {
    let year = date.year();
    let month = date.month();

    let in_month: Vec<&Word> = words
        .iter()
        .filter(|word| {
            parse_day_stamp(&word.learned_date)
                .map(|d| d.year() == year && d.month() == month)
                .unwrap_or(false)
        })
        .collect();

    let working_days =
        in_month.iter().map(|word| word.learned_date.as_str()).collect::<HashSet<_>>().len();

    let total_words = in_month.len();
    let total_sentences: usize = in_month.iter().map(|word| word.sentences.len()).sum();

    let (avg_words_per_day, avg_sentences_per_day) = if working_days > 0 {
        (
            round_one_decimal(total_words as f64 / working_days as f64),
            round_one_decimal(total_sentences as f64 / working_days as f64),
        )
    } else {
        (0.0, 0.0)
    };

    MonthlyStats { total_words, total_sentences, working_days, avg_words_per_day, avg_sentences_per_day }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{
        Difficulty,
        Sentence,
        Word,
    };

    fn word(id: u64, english: &str, learned_date: &str, sentence_count: usize) -> Word {
        let sentences = (0..sentence_count)
            .map(|n| Sentence {
                id: id * 100 + n as u64,
                english: format!("{} sentence {}", english, n),
                turkish: String::new(),
                word_id: id,
            })
            .collect();

        Word {
            id,
            english: english.to_string(),
            turkish: String::new(),
            learned_date: learned_date.to_string(),
            notes: String::new(),
            difficulty: Difficulty::Easy,
            sentences,
        }
    }

    #[test]
    fn test_day_stamp_round_trip() {
        let date = parse_day_stamp("2025-03-05").unwrap();
        assert_eq!(date.year(), 2025);
        assert_eq!(date.month(), 3);
        assert_eq!(date.day(), 5);
        assert_eq!(format_day_stamp(date), "2025-03-05");

        assert!(parse_day_stamp("").is_none());
        assert!(parse_day_stamp("2025-03").is_none());
        assert!(parse_day_stamp("2025-03-05-12").is_none());
        assert!(parse_day_stamp("2025-13-05").is_none());
        assert!(parse_day_stamp("not-a-date").is_none());
    }

    #[test]
    fn test_dates_with_activity_dedupes() {
        let words = vec![
            word(1, "apple", "2025-03-05", 0),
            word(2, "banana", "2025-03-05", 0),
            word(3, "cherry", "2025-03-06", 0),
        ];

        let dates = dates_with_activity(&words);
        assert_eq!(dates.len(), 2);

        // Component construction must land on the stamped day itself,
        // not the adjacent one.
        assert!(dates.contains(&NaiveDate::from_ymd_opt(2025, 3, 5).unwrap()));
        assert!(dates.contains(&NaiveDate::from_ymd_opt(2025, 3, 6).unwrap()));
        for date in &dates {
            assert_eq!(date.month(), 3);
        }
    }

    #[test]
    fn test_daily_stats_counts_selected_day_only() {
        let words = vec![
            word(1, "apple", "2025-06-01", 2),
            word(2, "banana", "2025-06-01", 0),
            word(3, "cherry", "2025-06-02", 5),
        ];

        let stats = daily_stats(&words, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(stats, DailyStats { word_count: 2, sentence_count: 2 });
    }

    #[test]
    fn test_daily_stats_absent_date_is_zero() {
        let words = vec![word(1, "apple", "2025-06-01", 2)];
        let stats = daily_stats(&words, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(stats, DailyStats::default());

        let empty = daily_stats(&[], NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(empty, DailyStats::default());
    }

    #[test]
    fn test_monthly_stats_worked_example() {
        let words = vec![word(1, "apple", "2025-06-01", 2), word(2, "banana", "2025-06-01", 0)];

        let stats = monthly_stats(&words, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
        assert_eq!(stats.total_words, 2);
        assert_eq!(stats.total_sentences, 2);
        assert_eq!(stats.working_days, 1);
        assert_eq!(stats.avg_words_per_day, 2.0);
        assert_eq!(stats.avg_sentences_per_day, 2.0);
    }

    #[test]
    fn test_monthly_stats_empty_month_has_no_division_error() {
        let words = vec![word(1, "apple", "2025-06-01", 2)];

        let stats = monthly_stats(&words, NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
        assert_eq!(stats.working_days, 0);
        assert_eq!(stats.total_words, 0);
        assert_eq!(stats.avg_words_per_day, 0.0);
        assert_eq!(stats.avg_sentences_per_day, 0.0);
    }

    #[test]
    fn test_monthly_stats_rounds_to_one_decimal() {
        // 7 words over 3 working days: 2.333... -> 2.3
        let words = vec![
            word(1, "a", "2025-05-01", 0),
            word(2, "b", "2025-05-01", 0),
            word(3, "c", "2025-05-01", 0),
            word(4, "d", "2025-05-02", 0),
            word(5, "e", "2025-05-02", 0),
            word(6, "f", "2025-05-03", 1),
            word(7, "g", "2025-05-03", 1),
        ];

        let stats = monthly_stats(&words, NaiveDate::from_ymd_opt(2025, 5, 20).unwrap());
        assert_eq!(stats.working_days, 3);
        assert_eq!(stats.avg_words_per_day, 2.3);
        // 2 sentences over 3 days: 0.666... -> 0.7
        assert_eq!(stats.avg_sentences_per_day, 0.7);
    }

    #[test]
    fn test_monthly_stats_ignores_malformed_stamps() {
        let words = vec![word(1, "apple", "2025-06-01", 1), word(2, "broken", "junk", 4)];

        let stats = monthly_stats(&words, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(stats.total_words, 1);
        assert_eq!(stats.total_sentences, 1);
    }
}
