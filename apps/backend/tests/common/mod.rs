//! Common test utilities and fixtures for integration tests.
//!
//! Sessions live in memory, so every test builds its own router over a
//! fixed word snapshot with a deterministic seed.

#![allow(dead_code)]

pub mod fixtures;

use axum::Router;
use axum_test::TestServer;
use serde_json::Value;

use vocab_backend::{router, AppState};
use vocab_core::{SchedulerSettings, Word, WordStore};

pub const TEST_SEED: u64 = 42;

/// Test context wrapping a router over an in-memory word store.
pub struct TestContext {
    state: AppState,
    app: Router,
}

impl TestContext {
    /// Create a context over the sample words.
    pub fn new() -> Self {
        Self::with_words(fixtures::sample_words())
    }

    /// Create a context over the given words.
    ///
    /// # Panics
    /// Panics if the words do not form a valid store.
    pub fn with_words(words: Vec<Word>) -> Self {
        let store = WordStore::new(words).expect("valid fixture words");
        let state = AppState::new(store, SchedulerSettings::default(), Some(TEST_SEED));
        Self {
            app: router(state.clone()),
            state,
        }
    }

    /// Shared state behind the router, for inspecting live sessions.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Start a test server over the router.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("test server")
    }
}

/// Create a flashcard session and return its id.
pub async fn create_flashcard_session(server: &TestServer, body: &Value) -> String {
    let response = server.post("/api/flashcards/sessions").json(body).await;
    let body: Value = response.json();
    body["session_id"]
        .as_str()
        .expect("session id")
        .to_string()
}

/// Create a quiz and return its response body.
pub async fn create_quiz(server: &TestServer, body: &Value) -> Value {
    let response = server.post("/api/quizzes").json(body).await;
    response.json()
}
