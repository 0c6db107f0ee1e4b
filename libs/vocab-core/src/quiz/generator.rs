//! Question generation for each quiz type.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use crate::matching::{eq_ignore_case, replace_ignore_case};
use crate::types::{QuizQuestion, QuizSettings, QuizType, Word};

/// Replaces the target word inside fill-in-the-blank examples.
pub const BLANK_MARKER: &str = "_____";
/// Number of wrong options in a multiple-choice question.
pub const MULTIPLE_CHOICE_DISTRACTORS: usize = 3;
pub const TRUE_ANSWER: &str = "true";
pub const FALSE_ANSWER: &str = "false";

/// Generate questions of `quiz_type` from `words`.
///
/// Returns an empty list when there is nothing to ask: no words, no
/// eligible words, or an unsupported quiz type.
pub fn generate_questions<R: Rng + ?Sized>(
    words: &[Word],
    quiz_type: QuizType,
    settings: &QuizSettings,
    rng: &mut R,
) -> Vec<QuizQuestion> {
    let questions = match quiz_type {
        QuizType::MultipleChoice => multiple_choice(words, settings, rng),
        QuizType::TrueFalse => true_false(words, settings, rng),
        QuizType::Matching => matching(words, settings, rng),
        QuizType::FillInBlank => fill_in_blank(words, settings, rng),
        QuizType::Listening => {
            warn!(%quiz_type, "quiz type not supported");
            Vec::new()
        }
    };

    debug!(%quiz_type, pool = words.len(), questions = questions.len(), "questions generated");
    questions
}

/// Up to `question_count` words, randomly chosen when shuffling.
fn select_words<'a, R: Rng + ?Sized>(
    words: &'a [Word],
    settings: &QuizSettings,
    rng: &mut R,
) -> Vec<&'a Word> {
    let mut selected: Vec<&Word> = words.iter().collect();
    if settings.shuffle_questions {
        selected.shuffle(rng);
    }
    selected.truncate(settings.question_count);
    selected
}

fn question_id(quiz_type: QuizType, index: usize, word: &Word) -> String {
    format!("{}-{}-{}", quiz_type, index + 1, word.id)
}

fn multiple_choice<R: Rng + ?Sized>(
    words: &[Word],
    settings: &QuizSettings,
    rng: &mut R,
) -> Vec<QuizQuestion> {
    select_words(words, settings, rng)
        .into_iter()
        .enumerate()
        .map(|(index, word)| {
            let correct = word.translation.clone();

            // Distinct translations of other words, excluding the answer.
            let mut candidates: Vec<&str> = Vec::new();
            for other in words {
                if other.id == word.id || eq_ignore_case(&other.translation, &correct) {
                    continue;
                }
                if candidates.iter().any(|c| eq_ignore_case(c, &other.translation)) {
                    continue;
                }
                candidates.push(&other.translation);
            }

            let mut options = vec![correct.clone()];
            options.extend(
                candidates
                    .choose_multiple(rng, MULTIPLE_CHOICE_DISTRACTORS)
                    .map(|s| s.to_string()),
            );
            if settings.shuffle_options {
                options.shuffle(rng);
            }

            QuizQuestion::new(
                question_id(QuizType::MultipleChoice, index, word),
                word.clone(),
                correct,
                options,
            )
        })
        .collect()
}

fn true_false<R: Rng + ?Sized>(
    words: &[Word],
    settings: &QuizSettings,
    rng: &mut R,
) -> Vec<QuizQuestion> {
    select_words(words, settings, rng)
        .into_iter()
        .enumerate()
        .map(|(index, word)| {
            let mut displayed = word.clone();
            let mut statement_holds = rng.gen_bool(0.5);

            if !statement_holds {
                let others: Vec<&Word> = words
                    .iter()
                    .filter(|w| w.id != word.id && !eq_ignore_case(&w.translation, &word.translation))
                    .collect();
                match others.choose(rng) {
                    Some(other) => displayed.translation = other.translation.clone(),
                    None => statement_holds = true,
                }
            }

            let correct = if statement_holds { TRUE_ANSWER } else { FALSE_ANSWER };
            QuizQuestion::new(
                question_id(QuizType::TrueFalse, index, word),
                displayed,
                correct.to_string(),
                vec![TRUE_ANSWER.to_string(), FALSE_ANSWER.to_string()],
            )
        })
        .collect()
}

fn matching<R: Rng + ?Sized>(
    words: &[Word],
    settings: &QuizSettings,
    rng: &mut R,
) -> Vec<QuizQuestion> {
    let selected = select_words(words, settings, rng);

    let mut translations: Vec<String> = selected.iter().map(|w| w.translation.clone()).collect();
    if settings.shuffle_options {
        translations.shuffle(rng);
    }

    selected
        .into_iter()
        .enumerate()
        .map(|(index, word)| {
            QuizQuestion::new(
                question_id(QuizType::Matching, index, word),
                word.clone(),
                word.translation.clone(),
                translations.clone(),
            )
        })
        .collect()
}

fn fill_in_blank<R: Rng + ?Sized>(
    words: &[Word],
    settings: &QuizSettings,
    rng: &mut R,
) -> Vec<QuizQuestion> {
    let eligible: Vec<Word> = words
        .iter()
        .filter(|w| w.example_text().is_some())
        .cloned()
        .collect();

    select_words(&eligible, settings, rng)
        .into_iter()
        .enumerate()
        .map(|(index, word)| {
            let target = word.english.trim();
            let mut displayed = word.clone();
            displayed.example = word
                .example
                .as_deref()
                .map(|example| replace_ignore_case(example, target, BLANK_MARKER));

            QuizQuestion::new(
                question_id(QuizType::FillInBlank, index, word),
                displayed,
                target.to_lowercase(),
                Vec::new(),
            )
        })
        .collect()
}
