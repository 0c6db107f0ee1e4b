//! API request/response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export shared types from vocab-core
pub use vocab_core::{
    Advance, Quiz, QuizQuestion, QuizResult, QuizSettings, QuizType, SchedulerEvent,
    SchedulerSettings, SchedulerSnapshot, Word, WordCategory, WordSelection,
};

// Word types
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct WordsQuery {
    pub category: Option<WordCategory>,
    pub subcategory: Option<String>,
}

impl WordsQuery {
    pub fn selection(&self) -> WordSelection {
        WordSelection {
            category: self.category,
            subcategory: self.subcategory.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WordListResponse {
    pub words: Vec<Word>,
    pub total: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub category: WordCategory,
    pub subcategories: Vec<String>,
    pub word_count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryListResponse {
    pub categories: Vec<CategoryInfo>,
}

// Flashcard types
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreateFlashcardSessionRequest {
    pub category: Option<WordCategory>,
    pub subcategory: Option<String>,
    pub seed: Option<u64>,
    pub settings: Option<SchedulerSettings>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FlashcardSessionResponse {
    pub session_id: Uuid,
    pub selection: WordSelection,
    #[serde(flatten)]
    pub snapshot: SchedulerSnapshot,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdvanceResponse {
    pub advance: Advance,
    pub session: FlashcardSessionResponse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkOutcome {
    Studied,
    NeedsReview,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MarkWordRequest {
    pub word_id: String,
    pub outcome: MarkOutcome,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SelectWordsRequest {
    pub category: Option<WordCategory>,
    pub subcategory: Option<String>,
}

impl SelectWordsRequest {
    pub fn selection(&self) -> WordSelection {
        WordSelection {
            category: self.category,
            subcategory: self.subcategory.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EventsResponse {
    pub events: Vec<SchedulerEvent>,
}

// Quiz types
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateQuizRequest {
    pub quiz_type: QuizType,
    pub category: Option<WordCategory>,
    pub subcategory: Option<String>,
    #[serde(default)]
    pub settings: QuizSettings,
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub quiz: Quiz,
    pub current_question: Option<QuizQuestion>,
    pub answered_count: usize,
    pub progress_percent: u32,
    pub time_up: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_secs: Option<i64>,
}

impl QuizResponse {
    pub fn from_quiz(quiz: &Quiz, now: DateTime<Utc>) -> Self {
        Self {
            current_question: quiz.current_question().cloned(),
            answered_count: quiz.answered_count(),
            progress_percent: quiz.progress_percent(),
            time_up: quiz.is_time_up(now),
            remaining_secs: quiz.remaining_secs(now),
            quiz: quiz.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub is_correct: bool,
    pub correct_answer: String,
    pub quiz: QuizResponse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigateAction {
    Next,
    Previous,
    GoTo,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NavigateRequest {
    pub action: NavigateAction,
    pub index: Option<usize>,
}
