//! Core types for the vocabulary trainer.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default number of fresh cards shown between two review turns.
pub const DEFAULT_NEW_CARDS_BEFORE_REVIEW: u32 = 2;
/// Default lower bound (inclusive) of the review delay, in processed cards.
pub const DEFAULT_REVIEW_INTERVAL_MIN: u32 = 3;
/// Default upper bound (inclusive) of the review delay, in processed cards.
pub const DEFAULT_REVIEW_INTERVAL_MAX: u32 = 6;
/// Default number of questions per quiz.
pub const DEFAULT_QUESTION_COUNT: usize = 10;

/// Grammatical category of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordCategory {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Preposition,
    Conjunction,
    Interjection,
    Phrase,
    PhrasalVerb,
    Idiom,
    Number,
    Other,
}

impl Default for WordCategory {
    fn default() -> Self {
        Self::Other
    }
}

impl WordCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Noun => "noun",
            Self::Verb => "verb",
            Self::Adjective => "adjective",
            Self::Adverb => "adverb",
            Self::Pronoun => "pronoun",
            Self::Preposition => "preposition",
            Self::Conjunction => "conjunction",
            Self::Interjection => "interjection",
            Self::Phrase => "phrase",
            Self::PhrasalVerb => "phrasal_verb",
            Self::Idiom => "idiom",
            Self::Number => "number",
            Self::Other => "other",
        }
    }
}

/// Past tense forms of an irregular verb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IrregularForms {
    pub past: String,
    pub past_participle: String,
}

/// A single vocabulary entry. Immutable once loaded into a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub id: String,
    pub english: String,
    pub translation: String,
    pub category: WordCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub irregular_forms: Option<IrregularForms>,
}

impl Word {
    /// Create a word with only the required fields set.
    pub fn new(
        id: impl Into<String>,
        english: impl Into<String>,
        translation: impl Into<String>,
        category: WordCategory,
    ) -> Self {
        Self {
            id: id.into(),
            english: english.into(),
            translation: translation.into(),
            category,
            subcategory: None,
            definition: None,
            example: None,
            tags: Vec::new(),
            irregular_forms: None,
        }
    }

    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    /// Example sentence, if it carries any non-blank text.
    pub fn example_text(&self) -> Option<&str> {
        self.example
            .as_deref()
            .filter(|example| !example.trim().is_empty())
    }
}

/// Word mastery status within a study session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WordStatus {
    New,
    Studied,
    NeedsReview,
    Difficult,
}

impl Default for WordStatus {
    fn default() -> Self {
        Self::New
    }
}

impl WordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Studied => "studied",
            Self::NeedsReview => "needs-review",
            Self::Difficult => "difficult",
        }
    }
}

impl fmt::Display for WordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A missed word waiting to be shown again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewQueueItem {
    pub word_id: String,
    pub marked_at_card_index: usize,
    pub scheduled_for_card_index: usize,
    pub review_count: u32,
}

/// Inclusive range of the review delay, measured in processed cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewInterval {
    pub min: u32,
    pub max: u32,
}

impl Default for ReviewInterval {
    fn default() -> Self {
        Self {
            min: DEFAULT_REVIEW_INTERVAL_MIN,
            max: DEFAULT_REVIEW_INTERVAL_MAX,
        }
    }
}

impl ReviewInterval {
    /// Bounds ordered so that `min <= max`.
    pub fn bounds(&self) -> (u32, u32) {
        (self.min.min(self.max), self.min.max(self.max))
    }
}

/// Interleaving policy of the flashcard scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerSettings {
    pub new_cards_before_review: u32,
    pub review_interval: ReviewInterval,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            new_cards_before_review: DEFAULT_NEW_CARDS_BEFORE_REVIEW,
            review_interval: ReviewInterval::default(),
        }
    }
}

/// Counts of words per status in the active card set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyStats {
    pub total: usize,
    pub new: usize,
    pub studied: usize,
    pub needs_review: usize,
    pub difficult: usize,
}

/// Kind of quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizType {
    MultipleChoice,
    TrueFalse,
    Matching,
    FillInBlank,
    Listening,
}

impl QuizType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MultipleChoice => "multiple_choice",
            Self::TrueFalse => "true_false",
            Self::Matching => "matching",
            Self::FillInBlank => "fill_in_blank",
            Self::Listening => "listening",
        }
    }

    /// Whether the generator can build questions of this type.
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Listening)
    }
}

impl fmt::Display for QuizType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quiz generation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizSettings {
    pub question_count: usize,
    pub shuffle_questions: bool,
    pub shuffle_options: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_limit_secs: Option<u32>,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            question_count: DEFAULT_QUESTION_COUNT,
            shuffle_questions: true,
            shuffle_options: true,
            time_limit_secs: None,
        }
    }
}

/// A generated quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    /// The word as displayed, possibly modified (swapped translation, blanked example).
    pub word: Word,
    pub correct_answer: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_correct: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answered_at: Option<DateTime<Utc>>,
}

impl QuizQuestion {
    pub fn new(id: String, word: Word, correct_answer: String, options: Vec<String>) -> Self {
        Self {
            id,
            word,
            correct_answer,
            options,
            user_answer: None,
            is_correct: None,
            answered_at: None,
        }
    }

    pub fn is_answered(&self) -> bool {
        self.user_answer.is_some()
    }
}
