//! Full session flows driven against in-memory doubles.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;

use oxquiz::{App, FetchError, LoadState, MemoryStatsStore, Phase, QuizItem, QuizSource};

/// Hands out a fixed sequence of fetch results, then 404s.
struct ScriptedSource {
    results: Mutex<VecDeque<Result<QuizItem, FetchError>>>,
}

impl ScriptedSource {
    fn new(results: Vec<Result<QuizItem, FetchError>>) -> Self {
        Self {
            results: Mutex::new(results.into()),
        }
    }
}

#[async_trait]
impl QuizSource for ScriptedSource {
    async fn fetch_random(&self) -> Result<QuizItem, FetchError> {
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::HttpStatus(StatusCode::NOT_FOUND)))
    }
}

fn item(id: i64, answer: bool) -> QuizItem {
    QuizItem {
        id,
        question: format!("Question {}", id),
        answer,
        explanation: Some("Because the records say so.".to_string()),
        category: Some("general".to_string()),
        difficulty: None,
    }
}

async fn load_next(app: &mut App, source: &ScriptedSource) {
    app.begin_load();
    app.finish_load(source.fetch_random().await);
}

#[tokio::test]
async fn answering_updates_and_persists_stats() {
    let store = MemoryStatsStore::new();
    let source = ScriptedSource::new(vec![Ok(item(1, true))]);

    let mut app = App::new(Box::new(store.clone()));
    load_next(&mut app, &source).await;
    assert!(matches!(app.load_state(), LoadState::Ready(_)));

    app.select_answer(true);
    assert_eq!(app.phase(), Phase::Answered { is_correct: true });
    assert_eq!(app.stats().correct, 1);
    assert_eq!(app.stats().incorrect, 0);

    let saved = store.saved().unwrap();
    assert_eq!(saved, app.stats());
}

#[tokio::test]
async fn restart_resumes_persisted_counters() {
    let store = MemoryStatsStore::new();
    let source = ScriptedSource::new(vec![Ok(item(1, true)), Ok(item(2, false))]);

    let mut app = App::new(Box::new(store.clone()));
    load_next(&mut app, &source).await;
    app.select_answer(true);
    load_next(&mut app, &source).await;
    app.select_answer(true);
    drop(app);

    let resumed = App::new(Box::new(store.clone()));
    assert_eq!(resumed.stats().correct, 1);
    assert_eq!(resumed.stats().incorrect, 1);
    assert_eq!(resumed.stats().accuracy(), 50);
}

#[tokio::test]
async fn failed_fetch_then_retry_recovers() {
    let store = MemoryStatsStore::new();
    let source = ScriptedSource::new(vec![
        Err(FetchError::HttpStatus(StatusCode::NOT_FOUND)),
        Ok(item(7, false)),
    ]);

    let mut app = App::new(Box::new(store.clone()));
    load_next(&mut app, &source).await;
    assert_eq!(*app.load_state(), LoadState::Failed);
    assert!(app.current_quiz().is_none());

    // Answering has no target and must not move the counters.
    app.select_answer(true);
    assert_eq!(app.stats().total(), 0);

    load_next(&mut app, &source).await;
    assert!(matches!(app.load_state(), LoadState::Ready(_)));
    assert_eq!(app.phase(), Phase::Unanswered);

    app.select_answer(false);
    assert_eq!(app.phase(), Phase::Answered { is_correct: true });
}

#[tokio::test]
async fn counters_track_exactly_one_answer_per_question() {
    let store = MemoryStatsStore::new();
    let source = ScriptedSource::new(vec![
        Ok(item(1, true)),
        Ok(item(2, true)),
        Ok(item(3, false)),
    ]);

    let mut app = App::new(Box::new(store.clone()));
    for expected_total in 1..=3 {
        load_next(&mut app, &source).await;
        app.select_answer(true);
        // Extra presses on an answered question must not count again.
        app.select_answer(false);
        app.select_answer(true);
        assert_eq!(app.stats().total(), expected_total);
    }

    assert_eq!(app.stats().correct, 2);
    assert_eq!(app.stats().incorrect, 1);
    assert_eq!(store.saved().unwrap(), app.stats());
}

#[tokio::test]
async fn reset_survives_a_restart() {
    let store = MemoryStatsStore::new();
    let source = ScriptedSource::new(vec![Ok(item(1, true))]);

    let mut app = App::new(Box::new(store.clone()));
    load_next(&mut app, &source).await;
    app.select_answer(false);
    assert_eq!(app.stats().total(), 1);

    app.reset_stats();
    drop(app);

    let resumed = App::new(Box::new(store.clone()));
    assert_eq!(resumed.stats().total(), 0);
    assert_eq!(resumed.stats().accuracy(), 0);
}

#[tokio::test]
async fn exhausted_source_fails_every_later_load() {
    let store = MemoryStatsStore::new();
    let source = ScriptedSource::new(vec![Ok(item(1, true))]);

    let mut app = App::new(Box::new(store.clone()));
    load_next(&mut app, &source).await;
    app.select_answer(true);

    load_next(&mut app, &source).await;
    assert_eq!(*app.load_state(), LoadState::Failed);

    load_next(&mut app, &source).await;
    assert_eq!(*app.load_state(), LoadState::Failed);
    assert_eq!(app.stats().correct, 1);
}
