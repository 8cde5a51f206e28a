use std::{
    cmp::Ordering,
    collections::BTreeSet,
};

use chrono::{
    Datelike,
    NaiveDate,
};

use super::{
    models::{
        Difficulty,
        SentenceWithSource,
    },
    stats::parse_day_stamp,
};

/// Active filters for the combined sentence collection. `None` means the
/// dimension is not constraining anything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SentenceQuery {
    pub text: String,
    pub difficulty: Option<Difficulty>,
    pub month: Option<String>,
}

impl SentenceQuery {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.difficulty.is_none() && self.month.is_none()
    }
}

/// All three dimensions must agree. An empty search string matches
/// everything; the text probe is a case-insensitive substring check over
/// the sentence pair and the owning word, the month check is a
/// `YYYY-MM` prefix test on the record's display date.
pub fn matches(record: &SentenceWithSource, query: &SentenceQuery) -> bool {
    if !query.text.is_empty() {
        let needle = query.text.to_lowercase();
        let in_text = record.english.to_lowercase().contains(&needle)
            || record.turkish.to_lowercase().contains(&needle)
            || record.word.as_ref().is_some_and(|w| w.to_lowercase().contains(&needle));
        if !in_text {
            return false;
        }
    }

    if let Some(difficulty) = query.difficulty {
        if record.difficulty != difficulty {
            return false;
        }
    }

    if let Some(month) = &query.month {
        let in_month = record.sort_date().is_some_and(|date| date.starts_with(month.as_str()));
        if !in_month {
            return false;
        }
    }

    true
}

/// Newest first. Records without a parseable date order after every
/// dated record; ties keep their payload order under a stable sort.
pub fn compare_by_date_desc(a: &SentenceWithSource, b: &SentenceWithSource) -> Ordering {
    date_key(b).cmp(&date_key(a))
}

fn date_key(record: &SentenceWithSource) -> Option<NaiveDate> {
    record.sort_date().and_then(parse_day_stamp)
}

/// Produces a fresh, date-descending view of the records that pass
/// `query`. The input collection is never reordered or shrunk.
pub fn filter_and_sort(
    records: &[SentenceWithSource],
    query: &SentenceQuery,
) -> Vec<SentenceWithSource> {
    let mut out: Vec<SentenceWithSource> =
        records.iter().filter(|record| matches(record, query)).cloned().collect();
    out.sort_by(compare_by_date_desc);
    out
}

/// Every distinct `YYYY-MM` that appears in the collection, newest
/// first. Feeds the month dropdown.
pub fn distinct_months(records: &[SentenceWithSource]) -> Vec<String> {
    let months: BTreeSet<String> = records
        .iter()
        .filter_map(date_key)
        .map(|date| format!("{:04}-{:02}", date.year(), date.month()))
        .collect();
    months.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::SentenceSource;

    fn record(id: &str, english: &str, date: Option<&str>) -> SentenceWithSource {
        SentenceWithSource {
            id: id.to_string(),
            english: english.to_string(),
            turkish: String::new(),
            difficulty: Difficulty::Easy,
            added_date: date.map(|d| d.to_string()),
            learned_date: None,
            word_id: None,
            word: None,
            word_turkish: None,
            source: SentenceSource::Practice,
        }
    }

    #[test]
    fn test_empty_query_passes_everything() {
        let query = SentenceQuery::default();
        assert!(query.is_empty());
        assert!(matches(&record("1", "Anything at all.", None), &query));
    }

    #[test]
    fn test_text_probe_is_case_insensitive_across_fields() {
        let mut r = record("1", "The harbor was calm.", Some("2025-06-01"));
        r.turkish = "Liman sakindi.".to_string();
        r.word = Some("Harbor".to_string());

        let query = |text: &str| SentenceQuery { text: text.to_string(), ..Default::default() };
        assert!(matches(&r, &query("HARBOR")));
        assert!(matches(&r, &query("sakin")));
        assert!(matches(&r, &query("harb")));
        assert!(!matches(&r, &query("anchor")));
    }

    #[test]
    fn test_difficulty_must_match_exactly() {
        let mut r = record("1", "Tricky.", None);
        r.difficulty = Difficulty::Medium;

        let query =
            SentenceQuery { difficulty: Some(Difficulty::Medium), ..Default::default() };
        assert!(matches(&r, &query));

        let query =
            SentenceQuery { difficulty: Some(Difficulty::Difficult), ..Default::default() };
        assert!(!matches(&r, &query));
    }

    #[test]
    fn test_month_is_a_prefix_test_on_the_display_date() {
        let r = record("1", "June.", Some("2025-06-14"));
        let june = SentenceQuery { month: Some("2025-06".to_string()), ..Default::default() };
        let july = SentenceQuery { month: Some("2025-07".to_string()), ..Default::default() };
        assert!(matches(&r, &june));
        assert!(!matches(&r, &july));

        // A record with no date can never satisfy a month filter.
        assert!(!matches(&record("2", "Dateless.", None), &june));
    }

    #[test]
    fn test_month_falls_back_to_learned_date() {
        let mut r = record("1", "From a word.", None);
        r.learned_date = Some("2025-04-10".to_string());

        let query = SentenceQuery { month: Some("2025-04".to_string()), ..Default::default() };
        assert!(matches(&r, &query));
    }

    #[test]
    fn test_all_dimensions_combine_with_and() {
        let mut r = record("1", "The harbor was calm.", Some("2025-06-01"));
        r.difficulty = Difficulty::Medium;

        let query = SentenceQuery {
            text: "harbor".to_string(),
            difficulty: Some(Difficulty::Medium),
            month: Some("2025-06".to_string()),
        };
        assert!(matches(&r, &query));

        let off_month = SentenceQuery { month: Some("2025-07".to_string()), ..query.clone() };
        assert!(!matches(&r, &off_month));
    }

    #[test]
    fn test_filter_and_sort_orders_newest_first() {
        let records = vec![
            record("old", "Old.", Some("2025-01-05")),
            record("new", "New.", Some("2025-06-20")),
            record("dateless", "No date.", None),
            record("mid", "Mid.", Some("2025-03-11")),
        ];

        let view = filter_and_sort(&records, &SentenceQuery::default());
        let ids: Vec<&str> = view.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "mid", "old", "dateless"]);

        // The source collection keeps its own order.
        assert_eq!(records[0].id, "old");
        assert_eq!(records.len(), 4);
    }

    #[test]
    fn test_filter_and_sort_keeps_payload_order_for_ties() {
        let records = vec![
            record("a", "First in payload.", Some("2025-06-01")),
            record("b", "Second in payload.", Some("2025-06-01")),
        ];

        let view = filter_and_sort(&records, &SentenceQuery::default());
        assert_eq!(view[0].id, "a");
        assert_eq!(view[1].id, "b");
    }

    #[test]
    fn test_distinct_months_newest_first() {
        let records = vec![
            record("1", "a", Some("2025-01-05")),
            record("2", "b", Some("2025-06-20")),
            record("3", "c", Some("2025-06-01")),
            record("4", "d", None),
            record("5", "e", Some("2024-12-31")),
        ];

        assert_eq!(distinct_months(&records), vec!["2025-06", "2025-01", "2024-12"]);
    }
}
