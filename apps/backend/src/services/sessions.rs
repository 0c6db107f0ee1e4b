//! In-memory registry of flashcard and quiz sessions.

use std::collections::HashMap;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;
use vocab_core::{FlashcardScheduler, Quiz, SchedulerSettings, WordSelection};

/// A flashcard scheduler plus the selection it was built from.
#[derive(Debug)]
pub struct FlashcardSession {
    pub selection: WordSelection,
    pub scheduler: FlashcardScheduler,
}

/// All live sessions, keyed by id.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    flashcards: HashMap<Uuid, FlashcardSession>,
    quizzes: HashMap<Uuid, Quiz>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_flashcards(&mut self, session: FlashcardSession) -> Uuid {
        let id = Uuid::new_v4();
        self.flashcards.insert(id, session);
        id
    }

    pub fn flashcards_mut(&mut self, id: Uuid) -> Option<&mut FlashcardSession> {
        self.flashcards.get_mut(&id)
    }

    pub fn remove_flashcards(&mut self, id: Uuid) -> Option<FlashcardSession> {
        self.flashcards.remove(&id)
    }

    pub fn flashcard_count(&self) -> usize {
        self.flashcards.len()
    }

    pub fn insert_quiz(&mut self, quiz: Quiz) -> Uuid {
        let id = quiz.id();
        self.quizzes.insert(id, quiz);
        id
    }

    pub fn quiz_mut(&mut self, id: Uuid) -> Option<&mut Quiz> {
        self.quizzes.get_mut(&id)
    }

    pub fn remove_quiz(&mut self, id: Uuid) -> Option<Quiz> {
        self.quizzes.remove(&id)
    }

    pub fn quiz_count(&self) -> usize {
        self.quizzes.len()
    }
}

/// Seeded generator when a seed is given, entropy otherwise.
pub fn session_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Scheduler for a new flashcard session.
pub fn new_scheduler(settings: SchedulerSettings, seed: Option<u64>) -> FlashcardScheduler {
    FlashcardScheduler::with_rng(settings, session_rng(seed))
}
