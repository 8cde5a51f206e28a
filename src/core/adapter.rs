use serde_json::Value;

use super::models::{
    Difficulty,
    Sentence,
    SentenceSource,
    SentenceWithSource,
    Word,
};

/// Normalizes a `/words` payload. The backend has spelled the same
/// fields differently across versions (`englishWord` vs `english`,
/// `learnedDate` vs `addedDate`), so all extraction is field-by-field
/// and alias-aware instead of a straight deserialize. Records without a
/// usable id are dropped with a warning rather than failing the batch.
pub fn normalize_words(payload: &Value) -> Vec<Word> {
    let Some(items) = payload.as_array() else {
        eprintln!("[Adapter] Expected a word array, got: {}", payload);
        return Vec::new();
    };

    let mut words = Vec::with_capacity(items.len());
    for item in items {
        match normalize_word(item) {
            Some(word) => words.push(word),
            None => eprintln!("[Adapter] Skipping word record without id: {}", item),
        }
    }
    words
}

pub fn normalize_word(value: &Value) -> Option<Word> {
    let id = read_id(value)?;

    let sentences = value
        .get("sentences")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(|item| normalize_nested_sentence(id, item)).collect())
        .unwrap_or_default();

    Some(Word {
        id,
        english: read_aliased(value, &["englishWord", "english"]).unwrap_or_default(),
        turkish: read_aliased(value, &["turkishMeaning", "turkish"]).unwrap_or_default(),
        learned_date: read_aliased(value, &["learnedDate", "addedDate"]).unwrap_or_default(),
        notes: read_aliased(value, &["notes"]).unwrap_or_default(),
        difficulty: read_difficulty(value),
        sentences,
    })
}

/// A sentence nested under a word. The word storage spells the text
/// fields `sentence`/`translation`, older payloads used the practice
/// spelling.
fn normalize_nested_sentence(word_id: u64, value: &Value) -> Option<Sentence> {
    let id = read_id(value)?;

    Some(Sentence {
        id,
        english: read_aliased(value, &["sentence", "englishSentence"]).unwrap_or_default(),
        turkish: read_aliased(value, &["translation", "turkishTranslation"]).unwrap_or_default(),
        word_id,
    })
}

/// Normalizes the merged `/sentences` payload, which mixes practice
/// records and word-derived records in one array.
pub fn normalize_sentence_records(payload: &Value) -> Vec<SentenceWithSource> {
    let Some(items) = payload.as_array() else {
        eprintln!("[Adapter] Expected a sentence array, got: {}", payload);
        return Vec::new();
    };

    items.iter().enumerate().map(|(index, item)| normalize_sentence_record(index, item)).collect()
}

/// Every record is representable: a missing id falls back to the
/// record's position in the payload, which stays stable for the
/// lifetime of one fetch.
pub fn normalize_sentence_record(index: usize, value: &Value) -> SentenceWithSource {
    let id = match value.get("id") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => index.to_string(),
    };

    let source = match value.get("source").and_then(Value::as_str) {
        Some("word") => SentenceSource::Word,
        _ => SentenceSource::Practice,
    };

    SentenceWithSource {
        id,
        english: read_aliased(value, &["englishSentence", "sentence"]).unwrap_or_default(),
        turkish: read_aliased(value, &["turkishTranslation", "translation"]).unwrap_or_default(),
        difficulty: read_difficulty(value),
        added_date: read_aliased(value, &["createdDate", "addedDate"]),
        learned_date: read_aliased(value, &["learnedDate"]),
        word_id: value.get("wordId").and_then(Value::as_u64),
        word: read_aliased(value, &["word"]),
        word_turkish: None,
        source,
    }
}

/// Projects the sentences attached to learned words into the combined
/// sentence shape. The merged endpoint flattens word-derived records
/// down to an id and a difficulty, so the full view is rebuilt from the
/// words themselves: text, the owning word, and the learned date all
/// come along.
pub fn sentences_from_words(words: &[Word]) -> Vec<SentenceWithSource> {
    let mut records = Vec::new();
    for word in words {
        for sentence in &word.sentences {
            records.push(SentenceWithSource {
                id: format!("word_{}", sentence.id),
                english: sentence.english.clone(),
                turkish: sentence.turkish.clone(),
                difficulty: word.difficulty,
                added_date: None,
                learned_date: Some(word.learned_date.clone()),
                word_id: Some(word.id),
                word: Some(word.english.clone()),
                word_turkish: Some(word.turkish.clone()),
                source: SentenceSource::Word,
            });
        }
    }
    records
}

fn read_id(value: &Value) -> Option<u64> {
    match value.get("id") {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.parse().ok(),
        _ => None,
    }
}

fn read_aliased(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| value.get(*key))
        .and_then(Value::as_str)
        .map(|s| s.to_string())
}

/// Both difficulty vocabularies land on the same three tiers: words use
/// lowercase `easy`/`medium`/`difficult`, practice records shout
/// `EASY`/`MEDIUM`/`HARD`. Unknown or missing values default to easy.
fn read_difficulty(value: &Value) -> Difficulty {
    let Some(raw) = value.get("difficulty").and_then(Value::as_str) else {
        return Difficulty::Easy;
    };

    match raw.to_lowercase().as_str() {
        "medium" => Difficulty::Medium,
        "difficult" | "hard" => Difficulty::Difficult,
        _ => Difficulty::Easy,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_normalize_word_current_spelling() {
        let value = json!({
            "id": 3,
            "englishWord": "serendipity",
            "turkishMeaning": "şans eseri",
            "learnedDate": "2025-06-01",
            "notes": "from a podcast",
            "difficulty": "difficult",
            "sentences": [
                {"id": 10, "sentence": "Pure serendipity.", "translation": "Saf şans."}
            ]
        });

        let word = normalize_word(&value).unwrap();
        assert_eq!(word.id, 3);
        assert_eq!(word.english, "serendipity");
        assert_eq!(word.turkish, "şans eseri");
        assert_eq!(word.learned_date, "2025-06-01");
        assert_eq!(word.notes, "from a podcast");
        assert_eq!(word.difficulty, Difficulty::Difficult);
        assert_eq!(word.sentences.len(), 1);
        assert_eq!(word.sentences[0].id, 10);
        assert_eq!(word.sentences[0].english, "Pure serendipity.");
        assert_eq!(word.sentences[0].word_id, 3);
    }

    #[test]
    fn test_normalize_word_legacy_spelling_and_defaults() {
        let value = json!({
            "id": "7",
            "english": "mellow",
            "turkish": "yumuşak",
            "addedDate": "2025-05-20"
        });

        let word = normalize_word(&value).unwrap();
        assert_eq!(word.id, 7);
        assert_eq!(word.english, "mellow");
        assert_eq!(word.learned_date, "2025-05-20");
        assert_eq!(word.notes, "");
        assert_eq!(word.difficulty, Difficulty::Easy);
        assert!(word.sentences.is_empty());
    }

    #[test]
    fn test_normalize_words_skips_records_without_id() {
        let payload = json!([
            {"id": 1, "englishWord": "one", "turkishMeaning": "bir", "learnedDate": "2025-01-01"},
            {"englishWord": "ghost", "turkishMeaning": "hayalet", "learnedDate": "2025-01-02"},
            {"id": 2, "englishWord": "two", "turkishMeaning": "iki", "learnedDate": "2025-01-03"},
        ]);

        let words = normalize_words(&payload);
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].english, "one");
        assert_eq!(words[1].english, "two");
    }

    #[test]
    fn test_normalize_words_rejects_non_array() {
        assert!(normalize_words(&json!({"error": "oops"})).is_empty());
    }

    #[test]
    fn test_normalize_sentence_record_practice() {
        let value = json!({
            "id": "practice_4",
            "englishSentence": "The meeting ran long.",
            "turkishTranslation": "Toplantı uzun sürdü.",
            "difficulty": "HARD",
            "createdDate": "2025-06-03",
            "source": "practice"
        });

        let record = normalize_sentence_record(0, &value);
        assert_eq!(record.id, "practice_4");
        assert_eq!(record.english, "The meeting ran long.");
        assert_eq!(record.difficulty, Difficulty::Difficult);
        assert_eq!(record.added_date.as_deref(), Some("2025-06-03"));
        assert_eq!(record.source, SentenceSource::Practice);
        assert!(record.word.is_none());
    }

    #[test]
    fn test_normalize_sentence_record_word_derived() {
        let value = json!({
            "id": "word_9",
            "difficulty": "EASY",
            "createdDate": null,
            "source": "word"
        });

        let record = normalize_sentence_record(2, &value);
        assert_eq!(record.id, "word_9");
        assert_eq!(record.english, "");
        assert_eq!(record.difficulty, Difficulty::Easy);
        assert!(record.added_date.is_none());
        assert_eq!(record.source, SentenceSource::Word);
    }

    #[test]
    fn test_normalize_sentence_record_positional_id_fallback() {
        let payload = json!([
            {"englishSentence": "First.", "source": "practice"},
            {"englishSentence": "Second.", "source": "practice"},
        ]);

        let records = normalize_sentence_records(&payload);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "0");
        assert_eq!(records[1].id, "1");
        // Unknown source defaults to practice.
        assert_eq!(records[0].source, SentenceSource::Practice);
    }

    #[test]
    fn test_sentences_from_words_projection() {
        let value = json!({
            "id": 5,
            "englishWord": "harbor",
            "turkishMeaning": "liman",
            "learnedDate": "2025-04-10",
            "difficulty": "medium",
            "sentences": [
                {"id": 21, "sentence": "The harbor was calm.", "translation": "Liman sakindi."},
                {"id": 22, "sentence": "Ships left the harbor.", "translation": "Gemiler limandan ayrıldı."}
            ]
        });
        let words = vec![normalize_word(&value).unwrap()];

        let records = sentences_from_words(&words);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "word_21");
        assert_eq!(records[0].english, "The harbor was calm.");
        assert_eq!(records[0].word.as_deref(), Some("harbor"));
        assert_eq!(records[0].word_turkish.as_deref(), Some("liman"));
        assert_eq!(records[0].learned_date.as_deref(), Some("2025-04-10"));
        assert_eq!(records[0].difficulty, Difficulty::Medium);
        assert_eq!(records[0].source, SentenceSource::Word);
        assert!(records[0].added_date.is_none());
    }
}
