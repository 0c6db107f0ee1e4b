//! Linear quiz state machine over a generated question list.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{QuizError, Result};
use crate::matching::check_answer;
use crate::types::{QuizQuestion, QuizSettings, QuizType};

/// Summary produced when a quiz is completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub quiz_id: Uuid,
    pub quiz_type: QuizType,
    pub total_questions: usize,
    pub correct_answers: usize,
    pub incorrect_answers: usize,
    pub skipped_questions: usize,
    /// Percentage of answered questions that were correct, rounded.
    pub accuracy: u32,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub duration_secs: i64,
    pub missed_word_ids: Vec<String>,
}

/// A running or completed quiz.
#[derive(Debug, Clone, Serialize)]
pub struct Quiz {
    id: Uuid,
    quiz_type: QuizType,
    questions: Vec<QuizQuestion>,
    current_question_index: usize,
    settings: QuizSettings,
    started_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ended_at: Option<DateTime<Utc>>,
    is_completed: bool,
    is_paused: bool,
}

impl Quiz {
    /// Start a quiz. An empty question list cannot be started.
    pub fn start(
        quiz_type: QuizType,
        questions: Vec<QuizQuestion>,
        settings: QuizSettings,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        if questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }

        let quiz = Self {
            id: Uuid::new_v4(),
            quiz_type,
            questions,
            current_question_index: 0,
            settings,
            started_at: now,
            ended_at: None,
            is_completed: false,
            is_paused: false,
        };
        debug!(quiz_id = %quiz.id, %quiz_type, questions = quiz.questions.len(), "quiz started");
        Ok(quiz)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn quiz_type(&self) -> QuizType {
        self.quiz_type
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    pub fn current_question_index(&self) -> usize {
        self.current_question_index
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current_question_index)
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn answered_count(&self) -> usize {
        self.questions.iter().filter(|q| q.is_answered()).count()
    }

    /// Share of questions answered, 0-100.
    pub fn progress_percent(&self) -> u32 {
        ((self.answered_count() as f64 / self.questions.len() as f64) * 100.0).round() as u32
    }

    /// Whether the configured time limit has run out at `now`. The clock
    /// keeps running while paused.
    pub fn is_time_up(&self, now: DateTime<Utc>) -> bool {
        self.remaining_secs(now) == Some(0)
    }

    /// Whole seconds left before the time limit, `None` without a limit.
    pub fn remaining_secs(&self, now: DateTime<Utc>) -> Option<i64> {
        self.settings.time_limit_secs.map(|limit| {
            let deadline = self.started_at + Duration::seconds(i64::from(limit));
            (deadline - now).num_seconds().max(0)
        })
    }

    fn accepts_input(&self) -> bool {
        !self.is_completed && !self.is_paused
    }

    /// Answer the current question. Returns whether the answer was correct,
    /// or `None` when the quiz does not accept answers: paused, completed
    /// or out of time.
    ///
    /// Re-answering overwrites the previous answer.
    pub fn answer_question(&mut self, answer: &str, now: DateTime<Utc>) -> Option<bool> {
        if !self.accepts_input() || self.is_time_up(now) {
            return None;
        }

        let question = self.questions.get_mut(self.current_question_index)?;
        let result = check_answer(answer, &question.correct_answer);

        question.user_answer = Some(answer.trim().to_string());
        question.is_correct = Some(result.is_correct);
        question.answered_at = Some(now);

        debug!(question_id = %question.id, correct = result.is_correct, "question answered");
        Some(result.is_correct)
    }

    pub fn next_question(&mut self) -> bool {
        self.go_to_question(self.current_question_index + 1)
    }

    pub fn previous_question(&mut self) -> bool {
        match self.current_question_index.checked_sub(1) {
            Some(index) => self.go_to_question(index),
            None => false,
        }
    }

    /// Jump to a question, clamping to the last one. Returns whether the
    /// index changed.
    pub fn go_to_question(&mut self, index: usize) -> bool {
        if !self.accepts_input() {
            return false;
        }
        let target = index.min(self.questions.len() - 1);
        let moved = target != self.current_question_index;
        self.current_question_index = target;
        moved
    }

    pub fn pause(&mut self) {
        if !self.is_completed {
            self.is_paused = true;
        }
    }

    pub fn resume(&mut self) {
        self.is_paused = false;
    }

    /// Finish the quiz. Later calls return the same result.
    pub fn complete(&mut self, now: DateTime<Utc>) -> QuizResult {
        if !self.is_completed {
            self.is_completed = true;
            self.is_paused = false;
            self.ended_at = Some(now);
        }

        let result = self.summarize(self.ended_at.unwrap_or(now));
        debug!(
            quiz_id = %self.id,
            correct = result.correct_answers,
            accuracy = result.accuracy,
            "quiz completed"
        );
        result
    }

    fn summarize(&self, completed_at: DateTime<Utc>) -> QuizResult {
        let correct_answers = self
            .questions
            .iter()
            .filter(|q| q.is_correct == Some(true))
            .count();
        let answered = self.answered_count();
        let incorrect_answers = answered - correct_answers;
        let accuracy = if answered == 0 {
            0
        } else {
            ((correct_answers as f64 / answered as f64) * 100.0).round() as u32
        };

        QuizResult {
            quiz_id: self.id,
            quiz_type: self.quiz_type,
            total_questions: self.questions.len(),
            correct_answers,
            incorrect_answers,
            skipped_questions: self.questions.len() - answered,
            accuracy,
            started_at: self.started_at,
            completed_at,
            duration_secs: (completed_at - self.started_at).num_seconds().max(0),
            missed_word_ids: self
                .questions
                .iter()
                .filter(|q| q.is_correct == Some(false))
                .map(|q| q.word.id.clone())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::types::{Word, WordCategory};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap()
    }

    fn question(id: &str, answer: &str) -> QuizQuestion {
        QuizQuestion::new(
            format!("q-{id}"),
            Word::new(id, id, answer, WordCategory::Noun),
            answer.to_string(),
            Vec::new(),
        )
    }

    fn quiz(n: usize) -> Quiz {
        let questions = (1..=n).map(|i| question(&format!("w{i}"), &format!("a{i}"))).collect();
        Quiz::start(QuizType::Matching, questions, QuizSettings::default(), t0()).unwrap()
    }

    #[test]
    fn start_rejects_empty_question_list() {
        let result = Quiz::start(QuizType::MultipleChoice, Vec::new(), QuizSettings::default(), t0());
        assert_eq!(result.unwrap_err(), QuizError::NoQuestions);
    }

    #[test]
    fn two_of_three_correct_gives_67_percent() {
        let mut quiz = quiz(3);
        assert_eq!(quiz.answer_question(" A1 ", t0()), Some(true));
        quiz.next_question();
        assert_eq!(quiz.answer_question("a2", t0()), Some(true));
        quiz.next_question();
        assert_eq!(quiz.answer_question("wrong", t0()), Some(false));

        let result = quiz.complete(t0() + Duration::seconds(42));
        assert_eq!(result.correct_answers, 2);
        assert_eq!(result.incorrect_answers, 1);
        assert_eq!(result.skipped_questions, 0);
        assert_eq!(result.accuracy, 67);
        assert_eq!(result.duration_secs, 42);
        assert_eq!(result.missed_word_ids, vec!["w3".to_string()]);
    }

    #[test]
    fn nothing_answered_gives_zero_accuracy() {
        let mut quiz = quiz(4);
        let result = quiz.complete(t0());
        assert_eq!(result.accuracy, 0);
        assert_eq!(result.skipped_questions, 4);
        assert_eq!(result.incorrect_answers, 0);
    }

    #[test]
    fn navigation_clamps_silently() {
        let mut quiz = quiz(3);
        assert!(!quiz.previous_question());
        assert_eq!(quiz.current_question_index(), 0);

        assert!(quiz.go_to_question(99));
        assert_eq!(quiz.current_question_index(), 2);
        assert!(!quiz.next_question());
        assert_eq!(quiz.current_question_index(), 2);

        assert!(quiz.previous_question());
        assert_eq!(quiz.current_question().map(|q| q.id.as_str()), Some("q-w2"));
    }

    #[test]
    fn answers_only_touch_current_question_and_can_be_overwritten() {
        let mut quiz = quiz(2);
        quiz.answer_question("nope", t0());
        quiz.answer_question("a1", t0());

        assert_eq!(quiz.questions()[0].user_answer.as_deref(), Some("a1"));
        assert_eq!(quiz.questions()[0].is_correct, Some(true));
        assert!(!quiz.questions()[1].is_answered());
        assert_eq!(quiz.progress_percent(), 50);
    }

    #[test]
    fn paused_quiz_ignores_input() {
        let mut quiz = quiz(2);
        quiz.pause();
        assert!(quiz.is_paused());
        assert_eq!(quiz.answer_question("a1", t0()), None);
        assert!(!quiz.next_question());

        quiz.resume();
        assert_eq!(quiz.answer_question("a1", t0()), Some(true));
    }

    #[test]
    fn completed_quiz_is_read_only() {
        let mut quiz = quiz(2);
        quiz.answer_question("a1", t0());
        let first = quiz.complete(t0() + Duration::seconds(10));

        assert_eq!(quiz.answer_question("a1", t0()), None);
        assert!(!quiz.next_question());
        quiz.pause();
        assert!(!quiz.is_paused());

        let second = quiz.complete(t0() + Duration::seconds(500));
        assert_eq!(first, second);
        assert_eq!(quiz.ended_at(), Some(t0() + Duration::seconds(10)));
    }

    #[test]
    fn time_limit_expires() {
        let settings = QuizSettings {
            time_limit_secs: Some(60),
            ..Default::default()
        };
        let quiz = Quiz::start(QuizType::TrueFalse, vec![question("w1", "true")], settings, t0())
            .unwrap();

        assert!(!quiz.is_time_up(t0() + Duration::seconds(59)));
        assert_eq!(quiz.remaining_secs(t0() + Duration::seconds(59)), Some(1));
        assert!(quiz.is_time_up(t0() + Duration::seconds(60)));
        assert_eq!(quiz.remaining_secs(t0() + Duration::seconds(3600)), Some(0));
    }

    #[test]
    fn expired_quiz_rejects_answers() {
        let settings = QuizSettings {
            time_limit_secs: Some(10),
            ..Default::default()
        };
        let mut quiz = Quiz::start(QuizType::Matching, vec![question("w1", "a1")], settings, t0())
            .unwrap();

        assert_eq!(quiz.answer_question("a1", t0() + Duration::seconds(3600)), None);
        assert!(!quiz.questions()[0].is_answered());

        let result = quiz.complete(t0() + Duration::seconds(3600));
        assert_eq!(result.skipped_questions, 1);
    }

    #[test]
    fn no_time_limit_never_expires() {
        let quiz = quiz(1);
        assert_eq!(quiz.remaining_secs(t0() + Duration::days(30)), None);
        assert!(!quiz.is_time_up(t0() + Duration::days(30)));
    }
}
