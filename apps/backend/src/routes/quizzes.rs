//! Quiz endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use uuid::Uuid;
use vocab_core::build_quiz;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::services::sessions::{session_rng, SessionRegistry};
use crate::AppState;

fn quiz_mut(registry: &mut SessionRegistry, id: Uuid) -> Result<&mut Quiz> {
    registry
        .quiz_mut(id)
        .ok_or_else(|| ApiError::NotFound(format!("Quiz {}", id)))
}

/// POST /api/quizzes
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateQuizRequest>,
) -> Result<(StatusCode, Json<QuizResponse>)> {
    let selection = WordSelection {
        category: request.category,
        subcategory: request.subcategory,
    };
    let words = state.store.select(&selection);

    let mut rng = session_rng(state.seed(request.seed));
    let quiz = build_quiz(&words, request.quiz_type, request.settings, &mut rng, Utc::now())
        .map_err(|err| {
            tracing::warn!(quiz_type = %request.quiz_type, words = words.len(), "{}", err);
            ApiError::from(err)
        })?;

    let response = QuizResponse::from_quiz(&quiz, Utc::now());
    let id = state.sessions()?.insert_quiz(quiz);
    tracing::info!(quiz_id = %id, quiz_type = %request.quiz_type, "quiz created");

    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/quizzes/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<QuizResponse>> {
    let mut registry = state.sessions()?;
    let quiz = quiz_mut(&mut registry, id)?;
    Ok(Json(QuizResponse::from_quiz(quiz, Utc::now())))
}

/// DELETE /api/quizzes/:id
pub async fn end(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode> {
    let mut registry = state.sessions()?;
    registry
        .remove_quiz(id)
        .ok_or_else(|| ApiError::NotFound(format!("Quiz {}", id)))?;
    tracing::info!(quiz_id = %id, "quiz ended");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/quizzes/:id/answer
pub async fn answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AnswerRequest>,
) -> Result<Json<AnswerResponse>> {
    let mut registry = state.sessions()?;
    let quiz = quiz_mut(&mut registry, id)?;

    let now = Utc::now();
    if quiz.is_time_up(now) {
        return Err(ApiError::BadRequest("Quiz time limit has expired".to_string()));
    }
    let is_correct = quiz
        .answer_question(&request.answer, now)
        .ok_or_else(|| ApiError::BadRequest("Quiz is not accepting answers".to_string()))?;
    let correct_answer = quiz
        .current_question()
        .map(|q| q.correct_answer.clone())
        .unwrap_or_default();

    Ok(Json(AnswerResponse {
        is_correct,
        correct_answer,
        quiz: QuizResponse::from_quiz(quiz, now),
    }))
}

/// POST /api/quizzes/:id/navigate
pub async fn navigate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<NavigateRequest>,
) -> Result<Json<QuizResponse>> {
    let mut registry = state.sessions()?;
    let quiz = quiz_mut(&mut registry, id)?;

    match request.action {
        NavigateAction::Next => {
            quiz.next_question();
        }
        NavigateAction::Previous => {
            quiz.previous_question();
        }
        NavigateAction::GoTo => {
            let index = request
                .index
                .ok_or_else(|| ApiError::BadRequest("go_to requires an index".to_string()))?;
            quiz.go_to_question(index);
        }
    }

    Ok(Json(QuizResponse::from_quiz(quiz, Utc::now())))
}

/// POST /api/quizzes/:id/pause
pub async fn pause(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<QuizResponse>> {
    let mut registry = state.sessions()?;
    let quiz = quiz_mut(&mut registry, id)?;
    quiz.pause();
    Ok(Json(QuizResponse::from_quiz(quiz, Utc::now())))
}

/// POST /api/quizzes/:id/resume
pub async fn resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<QuizResponse>> {
    let mut registry = state.sessions()?;
    let quiz = quiz_mut(&mut registry, id)?;
    quiz.resume();
    Ok(Json(QuizResponse::from_quiz(quiz, Utc::now())))
}

/// POST /api/quizzes/:id/complete
pub async fn complete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<QuizResult>> {
    let mut registry = state.sessions()?;
    let quiz = quiz_mut(&mut registry, id)?;
    let result = quiz.complete(Utc::now());
    tracing::info!(quiz_id = %id, accuracy = result.accuracy, "quiz completed");
    Ok(Json(result))
}
