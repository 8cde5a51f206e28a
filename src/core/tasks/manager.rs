use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
    time::Duration,
};

use tokio::runtime::Runtime;

use super::TaskResult;
use crate::{
    api,
    core::{
        adapter,
        models::{
            Difficulty,
            NewWord,
        },
    },
    generator::{
        self,
        GenerationRequest,
    },
};

/// Runs backend calls off the UI thread. Each task gets its own OS
/// thread that blocks on the shared runtime and reports back over the
/// channel; the app drains the channel once per frame.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));

        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    pub fn check_connection(&self, base_url: &str) {
        let (sender, runtime) = self.task_context();
        let base_url = base_url.to_string();

        thread::spawn(move || {
            let connected = runtime.block_on(api::check_connection(&base_url));

            let _ = sender.send(TaskResult::ConnectionChecked(connected));
        });
    }

    pub fn fetch_words(&self, base_url: &str) {
        let (sender, runtime) = self.task_context();
        let base_url = base_url.to_string();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                let payload = api::fetch_words(&base_url).await.map_err(|e| e.to_string())?;
                Ok(adapter::normalize_words(&payload))
            });

            let _ = sender.send(TaskResult::WordsLoaded(result));
        });
    }

    pub fn fetch_words_for_date(&self, base_url: &str, date: String) {
        let (sender, runtime) = self.task_context();
        let base_url = base_url.to_string();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                let payload = api::fetch_words_by_date(&base_url, &date)
                    .await
                    .map_err(|e| e.to_string())?;
                Ok(adapter::normalize_words(&payload))
            });

            let _ = sender.send(TaskResult::DayWordsLoaded(result));
        });
    }

    pub fn fetch_sentences(&self, base_url: &str) {
        let (sender, runtime) = self.task_context();
        let base_url = base_url.to_string();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                let payload = api::fetch_sentences(&base_url).await.map_err(|e| e.to_string())?;
                Ok(adapter::normalize_sentence_records(&payload))
            });

            let _ = sender.send(TaskResult::SentencesLoaded(result));
        });
    }

    pub fn create_word(&self, base_url: &str, word: NewWord) {
        let (sender, runtime) = self.task_context();
        let base_url = base_url.to_string();

        thread::spawn(move || {
            let result = runtime
                .block_on(api::create_word(&base_url, &word))
                .map_err(|e| e.to_string());

            let _ = sender.send(TaskResult::WordCreated(result));
        });
    }

    pub fn delete_word(&self, base_url: &str, id: u64) {
        let (sender, runtime) = self.task_context();
        let base_url = base_url.to_string();

        thread::spawn(move || {
            let result =
                runtime.block_on(api::delete_word(&base_url, id)).map_err(|e| e.to_string());

            let _ = sender.send(TaskResult::WordDeleted(result));
        });
    }

    pub fn add_sentence(&self, base_url: &str, word_id: u64, english: String, turkish: String) {
        let (sender, runtime) = self.task_context();
        let base_url = base_url.to_string();

        thread::spawn(move || {
            let result = runtime
                .block_on(api::add_sentence(&base_url, word_id, &english, &turkish))
                .map_err(|e| e.to_string());

            let _ = sender.send(TaskResult::SentenceAdded(result));
        });
    }

    pub fn delete_sentence(&self, base_url: &str, word_id: u64, sentence_id: u64) {
        let (sender, runtime) = self.task_context();
        let base_url = base_url.to_string();

        thread::spawn(move || {
            let result = runtime
                .block_on(api::delete_sentence(&base_url, word_id, sentence_id))
                .map_err(|e| e.to_string());

            let _ = sender.send(TaskResult::SentenceDeleted(result));
        });
    }

    pub fn save_practice_sentence(
        &self,
        base_url: &str,
        english: String,
        turkish: String,
        difficulty: Difficulty,
        created_date: String,
    ) {
        let (sender, runtime) = self.task_context();
        let base_url = base_url.to_string();

        thread::spawn(move || {
            let result = runtime
                .block_on(api::create_practice_sentence(
                    &base_url,
                    &english,
                    &turkish,
                    difficulty,
                    &created_date,
                ))
                .map_err(|e| e.to_string());

            let _ = sender.send(TaskResult::PracticeSaved(result));
        });
    }

    /// Generation is template-based and instant; the delay simulates a
    /// model call.
    pub fn generate_content(&self, request: GenerationRequest) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let results = runtime.block_on(async {
                tokio::time::sleep(Duration::from_millis(1500)).await;
                generator::generate(&request)
            });

            let _ = sender.send(TaskResult::GenerationReady(results));
        });
    }
}
