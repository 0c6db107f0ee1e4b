//! Read-only word snapshot supplied by the data-loading layer.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::WordStoreError;
use crate::types::{Word, WordCategory};

/// Category/subcategory filter. An absent field matches every word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSelection {
    #[serde(default)]
    pub category: Option<WordCategory>,
    #[serde(default)]
    pub subcategory: Option<String>,
}

impl WordSelection {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn category(category: WordCategory) -> Self {
        Self {
            category: Some(category),
            subcategory: None,
        }
    }

    pub fn matches(&self, word: &Word) -> bool {
        let category_ok = self.category.map_or(true, |c| word.category == c);
        let subcategory_ok = match &self.subcategory {
            Some(sub) => word.subcategory.as_deref() == Some(sub.as_str()),
            None => true,
        };
        category_ok && subcategory_ok
    }
}

/// Validated, ordered collection of words with unique ids.
#[derive(Debug, Clone, Default)]
pub struct WordStore {
    words: Vec<Word>,
}

impl WordStore {
    /// Validate and wrap a word list.
    pub fn new(words: Vec<Word>) -> Result<Self, WordStoreError> {
        let mut seen = HashSet::new();

        for (position, word) in words.iter().enumerate() {
            if word.id.trim().is_empty() {
                return Err(WordStoreError::EmptyId { position });
            }
            if !seen.insert(word.id.as_str()) {
                return Err(WordStoreError::DuplicateId {
                    id: word.id.clone(),
                    position,
                });
            }
            if word.english.trim().is_empty() {
                return Err(WordStoreError::EmptyField {
                    id: word.id.clone(),
                    field: "english",
                });
            }
            if word.translation.trim().is_empty() {
                return Err(WordStoreError::EmptyField {
                    id: word.id.clone(),
                    field: "translation",
                });
            }
        }

        Ok(Self { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn get(&self, id: &str) -> Option<&Word> {
        self.words.iter().find(|w| w.id == id)
    }

    /// Words matching the selection, in store order.
    pub fn select(&self, selection: &WordSelection) -> Vec<Word> {
        self.words
            .iter()
            .filter(|w| selection.matches(w))
            .cloned()
            .collect()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<WordCategory> {
        let mut categories = Vec::new();
        for word in &self.words {
            if !categories.contains(&word.category) {
                categories.push(word.category);
            }
        }
        categories
    }

    /// Distinct subcategories of a category in first-seen order.
    pub fn subcategories(&self, category: WordCategory) -> Vec<String> {
        let mut subcategories: Vec<String> = Vec::new();
        for word in self.words.iter().filter(|w| w.category == category) {
            if let Some(sub) = &word.subcategory {
                if !subcategories.iter().any(|s| s == sub) {
                    subcategories.push(sub.clone());
                }
            }
        }
        subcategories
    }
}
