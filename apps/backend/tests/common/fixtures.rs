//! Test fixtures and factory functions for creating test data.

use serde_json::{json, Value};

use vocab_core::{Word, WordCategory};

/// A small word snapshot covering several categories.
///
/// Nouns: 4 animals then 2 food words. Verbs carry example sentences,
/// adjectives do not.
pub fn sample_words() -> Vec<Word> {
    vec![
        Word::new("dog", "dog", "perro", WordCategory::Noun).with_subcategory("animals"),
        Word::new("cat", "cat", "gato", WordCategory::Noun).with_subcategory("animals"),
        Word::new("bird", "bird", "pájaro", WordCategory::Noun).with_subcategory("animals"),
        Word::new("horse", "horse", "caballo", WordCategory::Noun).with_subcategory("animals"),
        Word::new("bread", "bread", "pan", WordCategory::Noun).with_subcategory("food"),
        Word::new("apple", "apple", "manzana", WordCategory::Noun).with_subcategory("food"),
        Word::new("run", "run", "correr", WordCategory::Verb).with_example("I run every morning."),
        Word::new("eat", "eat", "comer", WordCategory::Verb).with_example("We eat together."),
        Word::new("big", "big", "grande", WordCategory::Adjective),
        Word::new("small", "small", "pequeño", WordCategory::Adjective),
    ]
}

/// Request body for creating a flashcard session.
pub fn flashcard_session_request(category: Option<&str>) -> Value {
    json!({ "category": category })
}

/// Flashcard session whose missed words are due immediately.
pub fn immediate_review_session_request(category: &str) -> Value {
    json!({
        "category": category,
        "settings": {
            "new_cards_before_review": 2,
            "review_interval": { "min": 0, "max": 0 }
        }
    })
}

/// Request body for marking a word.
pub fn mark_request(word_id: &str, outcome: &str) -> Value {
    json!({ "word_id": word_id, "outcome": outcome })
}

/// Request body for creating a quiz without shuffling.
pub fn quiz_request(quiz_type: &str, category: Option<&str>, question_count: usize) -> Value {
    json!({
        "quiz_type": quiz_type,
        "category": category,
        "settings": {
            "question_count": question_count,
            "shuffle_questions": false,
            "shuffle_options": false
        }
    })
}
