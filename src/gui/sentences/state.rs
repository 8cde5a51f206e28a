use crate::core::{
    models::{
        Difficulty,
        SentenceWithSource,
    },
    query::{
        self,
        SentenceQuery,
    },
};

/// Filter state for the sentence review table. Visible row indices are cached
/// and rebuilt only when the query or the record list changes.
pub struct SentenceTableState {
    query: SentenceQuery,
    visible_indices: Vec<usize>,
    dirty: bool,
}

impl Default for SentenceTableState {
    fn default() -> Self {
        Self {
            query: SentenceQuery::default(),
            visible_indices: Vec::new(),
            dirty: true,
        }
    }
}

impl SentenceTableState {
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn search(&self) -> &str {
        &self.query.text
    }

    pub fn set_search(&mut self, text: String) {
        if self.query.text != text {
            self.query.text = text;
            self.dirty = true;
        }
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.query.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Option<Difficulty>) {
        if self.query.difficulty != difficulty {
            self.query.difficulty = difficulty;
            self.dirty = true;
        }
    }

    pub fn month(&self) -> Option<&str> {
        self.query.month.as_deref()
    }

    pub fn set_month(&mut self, month: Option<String>) {
        if self.query.month != month {
            self.query.month = month;
            self.dirty = true;
        }
    }

    pub fn ensure_indices(&mut self, records: &[SentenceWithSource]) {
        let needs_rebuild = self.dirty
            || self.visible_indices.len() > records.len()
            || self.visible_indices.iter().any(|&idx| idx >= records.len());

        if needs_rebuild {
            self.recompute_indices(records);
        }
    }

    pub fn visible_indices(&self) -> &[usize] {
        &self.visible_indices
    }

    fn recompute_indices(&mut self, records: &[SentenceWithSource]) {
        self.visible_indices.clear();

        for (idx, record) in records.iter().enumerate() {
            if query::matches(record, &self.query) {
                self.visible_indices.push(idx);
            }
        }

        self.visible_indices
            .sort_by(|&a, &b| query::compare_by_date_desc(&records[a], &records[b]));

        self.dirty = false;
    }
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
            added_date: date.map(str::to_string),
            learned_date: None,
            word_id: None,
            word: None,
            word_turkish: None,
            source: SentenceSource::Practice,
        }
    }

    #[test]
    fn rebuilds_only_when_dirty() {
        let records = vec![
            record("1", "the tide rose", Some("2025-03-02")),
            record("2", "a quiet harbor", Some("2025-03-05")),
        ];

        let mut state = SentenceTableState::default();
        state.ensure_indices(&records);
        assert_eq!(state.visible_indices(), &[1, 0]);

        state.set_search("harbor".to_string());
        state.ensure_indices(&records);
        assert_eq!(state.visible_indices(), &[1]);

        // Unchanged query does not mark the state dirty.
        state.set_search("harbor".to_string());
        state.ensure_indices(&records);
        assert_eq!(state.visible_indices(), &[1]);
    }

    #[test]
    fn shrunken_record_list_invalidates_cached_indices() {
        let mut records = vec![
            record("1", "first", Some("2025-03-02")),
            record("2", "second", Some("2025-03-05")),
        ];

        let mut state = SentenceTableState::default();
        state.ensure_indices(&records);
        assert_eq!(state.visible_indices().len(), 2);

        records.pop();
        state.ensure_indices(&records);
        assert_eq!(state.visible_indices(), &[0]);
    }
}
