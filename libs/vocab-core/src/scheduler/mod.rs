//! Flashcard review scheduler.
//!
//! Interleaves fresh cards with previously missed ones. A missed word is
//! queued for re-presentation a random number of processed cards later
//! (`review_interval`), and a due review is only surfaced after at least
//! `new_cards_before_review` fresh cards have been shown since the last one.
//!
//! This is a fixed interleaving policy, not an adaptive spaced-repetition
//! algorithm: the delay does not grow with mastery.
//!
//! Finding the next unstudied card is a wrapping linear scan, O(n) per
//! `advance` call. Card sets are small (tens to low hundreds of words).

pub mod queue;

use std::collections::{BTreeMap, HashMap, HashSet};

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{ReviewQueueItem, SchedulerSettings, StudyStats, Word, WordStatus};
pub use queue::ReviewQueue;

/// Misses after which a word is marked difficult.
pub const DIFFICULT_MISS_THRESHOLD: u32 = 3;

/// Outcome of an [`FlashcardScheduler::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "index", rename_all = "snake_case")]
pub enum Advance {
    /// Moved to the next unstudied card.
    Next(usize),
    /// Surfaced a due card from the review queue.
    Review(usize),
    /// Nothing fresh to show; queued reviews are not due yet.
    Waiting,
    /// Every card is studied and the queue is empty.
    Complete,
    /// No cards loaded.
    Empty,
}

/// Status transition recorded for an external progress tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SchedulerEvent {
    StatusChanged {
        word_id: String,
        from: WordStatus,
        to: WordStatus,
    },
    WordMissed {
        word_id: String,
        misses: u32,
    },
    WordStudied {
        word_id: String,
    },
    ProgressReset,
}

/// Serializable view of the scheduler for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulerSnapshot {
    pub current_card: Option<Word>,
    pub current_index: usize,
    pub total_cards: usize,
    pub total_processed: usize,
    pub is_reviewing_card: bool,
    pub new_cards_since_last_review: u32,
    pub review_queue: Vec<ReviewQueueItem>,
    pub statuses: BTreeMap<String, WordStatus>,
    pub stats: StudyStats,
    pub progress_percent: u32,
    pub is_complete: bool,
    pub settings: SchedulerSettings,
}

/// Flashcard session state with an injected random source.
#[derive(Debug, Clone)]
pub struct FlashcardScheduler<R = ChaCha8Rng> {
    cards: Vec<Word>,
    current_index: usize,
    total_processed: usize,
    review_queue: ReviewQueue,
    status_by_word_id: HashMap<String, WordStatus>,
    miss_count_by_word_id: HashMap<String, u32>,
    recalled_once: HashSet<String>,
    is_reviewing_card: bool,
    new_cards_since_last_review: u32,
    settings: SchedulerSettings,
    rng: R,
    events: Vec<SchedulerEvent>,
}

impl FlashcardScheduler<ChaCha8Rng> {
    /// Create a scheduler seeded from system entropy.
    pub fn new(settings: SchedulerSettings) -> Self {
        Self::with_rng(settings, ChaCha8Rng::from_entropy())
    }

    /// Create a scheduler with a deterministic seed.
    pub fn with_seed(settings: SchedulerSettings, seed: u64) -> Self {
        Self::with_rng(settings, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> FlashcardScheduler<R> {
    pub fn with_rng(settings: SchedulerSettings, rng: R) -> Self {
        Self {
            cards: Vec::new(),
            current_index: 0,
            total_processed: 0,
            review_queue: ReviewQueue::new(),
            status_by_word_id: HashMap::new(),
            miss_count_by_word_id: HashMap::new(),
            recalled_once: HashSet::new(),
            is_reviewing_card: false,
            new_cards_since_last_review: 0,
            settings,
            rng,
            events: Vec::new(),
        }
    }

    /// Replace the active card set.
    ///
    /// Statuses of ids seen before are kept, so an overlapping selection
    /// does not lose progress. Unseen ids start as `New`. Miss counters,
    /// recall flags and the review queue start over.
    pub fn initialize(&mut self, words: Vec<Word>) {
        self.cards = words;
        self.current_index = 0;
        self.total_processed = 0;
        self.review_queue.clear();
        self.miss_count_by_word_id.clear();
        self.recalled_once.clear();
        self.is_reviewing_card = false;
        self.new_cards_since_last_review = 0;

        for word in &self.cards {
            self.status_by_word_id
                .entry(word.id.clone())
                .or_insert(WordStatus::New);
        }

        debug!(cards = self.cards.len(), "flashcard set initialized");
    }

    /// Move to the next card, interleaving due reviews.
    pub fn advance(&mut self) -> Advance {
        if self.cards.is_empty() {
            return Advance::Empty;
        }

        if self.new_cards_since_last_review >= self.settings.new_cards_before_review {
            if let Some(item) = self.review_queue.pop_due(self.total_processed) {
                if let Some(position) = self.position_of(&item.word_id) {
                    self.current_index = position;
                    self.is_reviewing_card = true;
                    self.new_cards_since_last_review = 0;
                    self.total_processed += 1;
                    debug!(
                        word_id = %item.word_id,
                        review_count = item.review_count,
                        step = self.total_processed,
                        "review turn"
                    );
                    return Advance::Review(position);
                }
            }
        }

        self.is_reviewing_card = false;
        self.new_cards_since_last_review += 1;
        self.total_processed += 1;

        match self.next_unstudied_index() {
            Some(index) => {
                self.current_index = index;
                Advance::Next(index)
            }
            None if !self.review_queue.is_empty() => Advance::Waiting,
            None => Advance::Complete,
        }
    }

    /// Step back one card. Does not wrap or touch the queue.
    pub fn retreat(&mut self) -> bool {
        if self.current_index > 0 {
            self.current_index -= 1;
            true
        } else {
            false
        }
    }

    /// Record a successful recall.
    ///
    /// A difficult word needs two recalls: the first moves it to
    /// `NeedsReview`, the second retires it as `Studied`.
    pub fn mark_studied(&mut self, word_id: &str) {
        if self.position_of(word_id).is_none() {
            return;
        }

        let current = self.status_of(word_id).unwrap_or_default();
        let next = if current == WordStatus::Difficult && !self.recalled_once.contains(word_id) {
            self.recalled_once.insert(word_id.to_string());
            WordStatus::NeedsReview
        } else {
            self.recalled_once.remove(word_id);
            self.miss_count_by_word_id.remove(word_id);
            WordStatus::Studied
        };

        self.review_queue.remove(word_id);
        self.set_status(word_id, next);

        if next == WordStatus::Studied {
            self.events.push(SchedulerEvent::WordStudied {
                word_id: word_id.to_string(),
            });
        }
    }

    /// Record a missed recall and schedule the word for review.
    pub fn mark_needs_review(&mut self, word_id: &str) {
        if self.position_of(word_id).is_none() {
            return;
        }

        let misses = {
            let count = self
                .miss_count_by_word_id
                .entry(word_id.to_string())
                .or_insert(0);
            *count += 1;
            *count
        };

        let next = if misses >= DIFFICULT_MISS_THRESHOLD {
            self.recalled_once.remove(word_id);
            WordStatus::Difficult
        } else {
            WordStatus::NeedsReview
        };
        self.set_status(word_id, next);
        self.events.push(SchedulerEvent::WordMissed {
            word_id: word_id.to_string(),
            misses,
        });

        let (min, max) = self.settings.review_interval.bounds();
        let delay = self.rng.gen_range(min..=max) as usize;
        self.review_queue.schedule(ReviewQueueItem {
            word_id: word_id.to_string(),
            marked_at_card_index: self.total_processed,
            scheduled_for_card_index: self.total_processed + delay,
            review_count: misses,
        });

        debug!(word_id, misses, due = self.total_processed + delay, "word queued for review");
    }

    /// Shuffle the cards and restart the pass. Statuses are kept.
    pub fn shuffle(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        self.cards.shuffle(&mut self.rng);
        self.current_index = 0;
        self.review_queue.clear();
        self.miss_count_by_word_id.clear();
        self.recalled_once.clear();
        self.new_cards_since_last_review = 0;
        self.is_reviewing_card = false;
        debug!(cards = self.cards.len(), "flashcards shuffled");
    }

    /// Forget all progress: every known word goes back to `New`.
    pub fn reset_all(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        self.review_queue.clear();
        self.miss_count_by_word_id.clear();
        self.recalled_once.clear();
        self.new_cards_since_last_review = 0;
        self.total_processed = 0;
        self.is_reviewing_card = false;
        self.current_index = 0;

        for status in self.status_by_word_id.values_mut() {
            *status = WordStatus::New;
        }
        self.events.push(SchedulerEvent::ProgressReset);
        debug!("flashcard progress reset");
    }

    /// Take the recorded status events, oldest first.
    pub fn drain_events(&mut self) -> Vec<SchedulerEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn cards(&self) -> &[Word] {
        &self.cards
    }

    pub fn current_card(&self) -> Option<&Word> {
        self.cards.get(self.current_index)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total_cards(&self) -> usize {
        self.cards.len()
    }

    pub fn total_processed(&self) -> usize {
        self.total_processed
    }

    pub fn is_reviewing_card(&self) -> bool {
        self.is_reviewing_card
    }

    pub fn new_cards_since_last_review(&self) -> u32 {
        self.new_cards_since_last_review
    }

    pub fn settings(&self) -> &SchedulerSettings {
        &self.settings
    }

    pub fn review_queue(&self) -> &[ReviewQueueItem] {
        self.review_queue.items()
    }

    pub fn status_of(&self, word_id: &str) -> Option<WordStatus> {
        self.status_by_word_id.get(word_id).copied()
    }

    pub fn statuses(&self) -> &HashMap<String, WordStatus> {
        &self.status_by_word_id
    }

    pub fn miss_count(&self, word_id: &str) -> u32 {
        self.miss_count_by_word_id.get(word_id).copied().unwrap_or(0)
    }

    /// Status counts over the active card set.
    pub fn stats(&self) -> StudyStats {
        let mut stats = StudyStats {
            total: self.cards.len(),
            ..Default::default()
        };
        for word in &self.cards {
            match self.status_of(&word.id).unwrap_or_default() {
                WordStatus::New => stats.new += 1,
                WordStatus::Studied => stats.studied += 1,
                WordStatus::NeedsReview => stats.needs_review += 1,
                WordStatus::Difficult => stats.difficult += 1,
            }
        }
        stats
    }

    /// Share of the active cards that are studied, 0-100.
    pub fn progress_percent(&self) -> u32 {
        let stats = self.stats();
        if stats.total == 0 {
            return 0;
        }
        ((stats.studied as f64 / stats.total as f64) * 100.0).round() as u32
    }

    pub fn is_complete(&self) -> bool {
        !self.cards.is_empty()
            && self.review_queue.is_empty()
            && self
                .cards
                .iter()
                .all(|w| self.status_of(&w.id) == Some(WordStatus::Studied))
    }

    pub fn snapshot(&self) -> SchedulerSnapshot {
        SchedulerSnapshot {
            current_card: self.current_card().cloned(),
            current_index: self.current_index,
            total_cards: self.cards.len(),
            total_processed: self.total_processed,
            is_reviewing_card: self.is_reviewing_card,
            new_cards_since_last_review: self.new_cards_since_last_review,
            review_queue: self.review_queue.items().to_vec(),
            statuses: self
                .cards
                .iter()
                .map(|w| (w.id.clone(), self.status_of(&w.id).unwrap_or_default()))
                .collect(),
            stats: self.stats(),
            progress_percent: self.progress_percent(),
            is_complete: self.is_complete(),
            settings: self.settings,
        }
    }

    fn position_of(&self, word_id: &str) -> Option<usize> {
        self.cards.iter().position(|w| w.id == word_id)
    }

    /// First unstudied card after the current one, wrapping around and
    /// ending on the current card itself.
    fn next_unstudied_index(&self) -> Option<usize> {
        let len = self.cards.len();
        (1..=len)
            .map(|offset| (self.current_index + offset) % len)
            .find(|&index| {
                self.status_of(&self.cards[index].id) != Some(WordStatus::Studied)
            })
    }

    fn set_status(&mut self, word_id: &str, to: WordStatus) {
        let from = self
            .status_by_word_id
            .insert(word_id.to_string(), to)
            .unwrap_or_default();
        if from != to {
            debug!(word_id, %from, %to, "word status changed");
            self.events.push(SchedulerEvent::StatusChanged {
                word_id: word_id.to_string(),
                from,
                to,
            });
        }
    }
}
