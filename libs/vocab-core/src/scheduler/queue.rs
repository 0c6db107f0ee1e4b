//! Review queue of missed words, ordered by due index.

use crate::types::ReviewQueueItem;

/// Holds at most one entry per word id, sorted ascending by
/// `scheduled_for_card_index`.
#[derive(Debug, Clone, Default)]
pub struct ReviewQueue {
    items: Vec<ReviewQueueItem>,
}

impl ReviewQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[ReviewQueueItem] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Remove the entry for a word, if any.
    pub fn remove(&mut self, word_id: &str) -> Option<ReviewQueueItem> {
        let position = self.items.iter().position(|item| item.word_id == word_id)?;
        Some(self.items.remove(position))
    }

    /// Insert an item, replacing any existing entry for the same word.
    pub fn schedule(&mut self, item: ReviewQueueItem) {
        self.remove(&item.word_id);
        self.items.push(item);
        // Stable: equal due indices keep insertion order.
        self.items.sort_by_key(|item| item.scheduled_for_card_index);
    }

    /// Whether the earliest entry is due at `step`.
    pub fn has_due(&self, step: usize) -> bool {
        self.items
            .first()
            .is_some_and(|item| item.scheduled_for_card_index <= step)
    }

    /// Pop the earliest entry if it is due at `step`.
    pub fn pop_due(&mut self, step: usize) -> Option<ReviewQueueItem> {
        if self.has_due(step) {
            Some(self.items.remove(0))
        } else {
            None
        }
    }
}
