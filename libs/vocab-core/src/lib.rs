//! Core vocabulary trainer library.
//!
//! Provides:
//! - Word store with category/subcategory selection
//! - Flashcard scheduler interleaving fresh cards with missed ones
//! - Quiz question generation (multiple choice, true/false, matching,
//!   fill-in-the-blank) and a linear quiz runtime
//! - Answer matching
//!
//! Randomness is always injected (`rand::Rng`), so every operation is
//! reproducible with a seeded generator.

pub mod error;
pub mod matching;
pub mod quiz;
pub mod scheduler;
pub mod store;
pub mod types;

pub use error::{QuizError, Result, WordStoreError};
pub use matching::{check_answer, normalize_answer, MatchResult};
pub use quiz::{build_quiz, generate_questions, Quiz, QuizResult};
pub use scheduler::{
    Advance, FlashcardScheduler, SchedulerEvent, SchedulerSnapshot, DIFFICULT_MISS_THRESHOLD,
};
pub use store::{WordSelection, WordStore};
pub use types::{
    IrregularForms, QuizQuestion, QuizSettings, QuizType, ReviewInterval, ReviewQueueItem,
    SchedulerSettings, StudyStats, Word, WordCategory, WordStatus,
};
