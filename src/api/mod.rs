use reqwest::{
    Client,
    Method,
};
use serde_json::{
    json,
    Value,
};

use crate::core::{
    Difficulty,
    KelimeError,
    NewWord,
};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8082/api";

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// One shared request path for every backend call. Non-2xx statuses
/// become errors before any body parsing; a 204 or empty body is a
/// successful mutation with nothing to parse.
async fn request(
    base_url: &str,
    method: Method,
    path: &str,
    body: Option<Value>,
) -> Result<Option<Value>, KelimeError> {
    let mut builder = Client::new().request(method, endpoint(base_url, path));
    if let Some(body) = body {
        builder = builder.json(&body);
    }

    let response = builder.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(KelimeError::Status { code: status.as_u16() });
    }

    let text = response.text().await?;
    if text.trim().is_empty() {
        return Ok(None);
    }

    Ok(Some(serde_json::from_str(&text)?))
}

pub async fn fetch_words(base_url: &str) -> Result<Value, KelimeError> {
    let payload = request(base_url, Method::GET, "/words", None).await?;
    Ok(payload.unwrap_or_else(|| Value::Array(Vec::new())))
}

pub async fn fetch_words_by_date(base_url: &str, date: &str) -> Result<Value, KelimeError> {
    let payload = request(base_url, Method::GET, &format!("/words/date/{}", date), None).await?;
    Ok(payload.unwrap_or_else(|| Value::Array(Vec::new())))
}

/// The word store expects its own field spellings and a lowercase
/// difficulty.
fn word_body(word: &NewWord) -> Value {
    json!({
        "englishWord": word.english,
        "turkishMeaning": word.turkish,
        "learnedDate": word.learned_date,
        "notes": word.notes,
        "difficulty": word.difficulty.word_value(),
    })
}

pub async fn create_word(base_url: &str, word: &NewWord) -> Result<(), KelimeError> {
    request(base_url, Method::POST, "/words", Some(word_body(word))).await?;
    Ok(())
}

pub async fn delete_word(base_url: &str, id: u64) -> Result<(), KelimeError> {
    request(base_url, Method::DELETE, &format!("/words/{}", id), None).await?;
    Ok(())
}

pub async fn add_sentence(
    base_url: &str,
    word_id: u64,
    english: &str,
    turkish: &str,
) -> Result<(), KelimeError> {
    let body = json!({ "sentence": english, "translation": turkish });
    request(base_url, Method::POST, &format!("/words/{}/sentences", word_id), Some(body)).await?;
    Ok(())
}

pub async fn delete_sentence(
    base_url: &str,
    word_id: u64,
    sentence_id: u64,
) -> Result<(), KelimeError> {
    let path = format!("/words/{}/sentences/{}", word_id, sentence_id);
    request(base_url, Method::DELETE, &path, None).await?;
    Ok(())
}

pub async fn fetch_sentences(base_url: &str) -> Result<Value, KelimeError> {
    let payload = request(base_url, Method::GET, "/sentences", None).await?;
    Ok(payload.unwrap_or_else(|| Value::Array(Vec::new())))
}

/// Practice records speak the other difficulty vocabulary, uppercase.
fn practice_body(english: &str, turkish: &str, difficulty: Difficulty, created_date: &str) -> Value {
    json!({
        "englishSentence": english,
        "turkishTranslation": turkish,
        "difficulty": difficulty.practice_value(),
        "createdDate": created_date,
    })
}

pub async fn create_practice_sentence(
    base_url: &str,
    english: &str,
    turkish: &str,
    difficulty: Difficulty,
    created_date: &str,
) -> Result<(), KelimeError> {
    let body = practice_body(english, turkish, difficulty, created_date);
    request(base_url, Method::POST, "/sentences", Some(body)).await?;
    Ok(())
}

// Status-only probe, any reachable response with a 2xx counts.
pub async fn check_connection(base_url: &str) -> bool {
    match Client::new().get(endpoint(base_url, "/words")).send().await {
        Ok(response) => response.status().is_success(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        assert_eq!(endpoint("http://localhost:8082/api", "/words"), "http://localhost:8082/api/words");
        assert_eq!(endpoint("http://localhost:8082/api/", "/words"), "http://localhost:8082/api/words");
    }

    #[test]
    fn test_word_body_uses_store_spellings() {
        let word = NewWord {
            english: "harbor".to_string(),
            turkish: "liman".to_string(),
            learned_date: "2025-06-01".to_string(),
            notes: String::new(),
            difficulty: Difficulty::Difficult,
        };

        let body = word_body(&word);
        assert_eq!(body["englishWord"], "harbor");
        assert_eq!(body["turkishMeaning"], "liman");
        assert_eq!(body["learnedDate"], "2025-06-01");
        assert_eq!(body["difficulty"], "difficult");
    }

    #[test]
    fn test_practice_body_uses_uppercase_difficulty() {
        let body = practice_body("A sentence.", "Bir cümle.", Difficulty::Medium, "2025-06-03");
        assert_eq!(body["englishSentence"], "A sentence.");
        assert_eq!(body["turkishTranslation"], "Bir cümle.");
        assert_eq!(body["difficulty"], "MEDIUM");
        assert_eq!(body["createdDate"], "2025-06-03");
    }
}
