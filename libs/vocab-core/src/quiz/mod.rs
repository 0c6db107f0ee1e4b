//! Quiz generation and runtime.

pub mod generator;
pub mod runtime;

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::error::{QuizError, Result};
use crate::types::{QuizSettings, QuizType, Word};
pub use generator::{generate_questions, BLANK_MARKER};
pub use runtime::{Quiz, QuizResult};

/// Generate questions and start a quiz over them.
///
/// Fails when the type is unsupported or nothing could be generated; a
/// quiz is never started with zero questions.
pub fn build_quiz<R: Rng + ?Sized>(
    words: &[Word],
    quiz_type: QuizType,
    settings: QuizSettings,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Result<Quiz> {
    if !quiz_type.is_supported() {
        return Err(QuizError::UnsupportedType(quiz_type));
    }

    let questions = generate_questions(words, quiz_type, &settings, rng);
    Quiz::start(quiz_type, questions, settings, now)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::types::WordCategory;

    fn words() -> Vec<Word> {
        vec![
            Word::new("w1", "dog", "perro", WordCategory::Noun),
            Word::new("w2", "cat", "gato", WordCategory::Noun),
        ]
    }

    #[test]
    fn build_quiz_starts_with_generated_questions() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let quiz = build_quiz(
            &words(),
            QuizType::Matching,
            QuizSettings::default(),
            &mut rng,
            Utc::now(),
        )
        .unwrap();
        assert_eq!(quiz.total_questions(), 2);
        assert_eq!(quiz.current_question_index(), 0);
        assert!(!quiz.is_completed());
    }

    #[test]
    fn build_quiz_reports_unsupported_type() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let result = build_quiz(
            &words(),
            QuizType::Listening,
            QuizSettings::default(),
            &mut rng,
            Utc::now(),
        );
        assert_eq!(
            result.unwrap_err(),
            QuizError::UnsupportedType(QuizType::Listening)
        );
    }

    #[test]
    fn build_quiz_fails_without_eligible_words() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let result = build_quiz(
            &words(),
            QuizType::FillInBlank,
            QuizSettings::default(),
            &mut rng,
            Utc::now(),
        );
        assert_eq!(result.unwrap_err(), QuizError::NoQuestions);
    }
}
