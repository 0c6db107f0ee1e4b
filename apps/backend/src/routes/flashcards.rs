//! Flashcard session endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::services::sessions::{new_scheduler, FlashcardSession, SessionRegistry};
use crate::AppState;

fn session_mut(registry: &mut SessionRegistry, id: Uuid) -> Result<&mut FlashcardSession> {
    registry
        .flashcards_mut(id)
        .ok_or_else(|| ApiError::NotFound(format!("Flashcard session {}", id)))
}

fn response(id: Uuid, session: &FlashcardSession) -> FlashcardSessionResponse {
    FlashcardSessionResponse {
        session_id: id,
        selection: session.selection.clone(),
        snapshot: session.scheduler.snapshot(),
    }
}

/// POST /api/flashcards/sessions
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateFlashcardSessionRequest>,
) -> Result<(StatusCode, Json<FlashcardSessionResponse>)> {
    let selection = WordSelection {
        category: request.category,
        subcategory: request.subcategory,
    };
    let settings = request.settings.unwrap_or(state.scheduler_settings);

    let mut scheduler = new_scheduler(settings, state.seed(request.seed));
    scheduler.initialize(state.store.select(&selection));

    let session = FlashcardSession {
        selection,
        scheduler,
    };
    let mut registry = state.sessions()?;
    let id = registry.insert_flashcards(session);
    let session = session_mut(&mut registry, id)?;

    tracing::info!(
        session_id = %id,
        cards = session.scheduler.total_cards(),
        category = session.selection.category.map(|c| c.as_str()),
        "flashcard session created"
    );

    Ok((StatusCode::CREATED, Json(response(id, session))))
}

/// GET /api/flashcards/sessions/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FlashcardSessionResponse>> {
    let mut registry = state.sessions()?;
    let session = session_mut(&mut registry, id)?;
    Ok(Json(response(id, session)))
}

/// DELETE /api/flashcards/sessions/:id
pub async fn end(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode> {
    let mut registry = state.sessions()?;
    registry
        .remove_flashcards(id)
        .ok_or_else(|| ApiError::NotFound(format!("Flashcard session {}", id)))?;
    tracing::info!(session_id = %id, "flashcard session ended");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/flashcards/sessions/:id/advance
pub async fn advance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AdvanceResponse>> {
    let mut registry = state.sessions()?;
    let session = session_mut(&mut registry, id)?;
    let advance = session.scheduler.advance();
    Ok(Json(AdvanceResponse {
        advance,
        session: response(id, session),
    }))
}

/// POST /api/flashcards/sessions/:id/retreat
pub async fn retreat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FlashcardSessionResponse>> {
    let mut registry = state.sessions()?;
    let session = session_mut(&mut registry, id)?;
    session.scheduler.retreat();
    Ok(Json(response(id, session)))
}

/// POST /api/flashcards/sessions/:id/shuffle
pub async fn shuffle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FlashcardSessionResponse>> {
    let mut registry = state.sessions()?;
    let session = session_mut(&mut registry, id)?;
    session.scheduler.shuffle();
    Ok(Json(response(id, session)))
}

/// POST /api/flashcards/sessions/:id/reset
pub async fn reset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FlashcardSessionResponse>> {
    let mut registry = state.sessions()?;
    let session = session_mut(&mut registry, id)?;
    session.scheduler.reset_all();
    Ok(Json(response(id, session)))
}

/// POST /api/flashcards/sessions/:id/mark
pub async fn mark(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<MarkWordRequest>,
) -> Result<Json<FlashcardSessionResponse>> {
    let mut registry = state.sessions()?;
    let session = session_mut(&mut registry, id)?;

    // Unknown ids are stale events from a replaced card set; the scheduler ignores them.
    match request.outcome {
        MarkOutcome::Studied => session.scheduler.mark_studied(&request.word_id),
        MarkOutcome::NeedsReview => session.scheduler.mark_needs_review(&request.word_id),
    }
    Ok(Json(response(id, session)))
}

/// PUT /api/flashcards/sessions/:id/words
pub async fn select_words(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SelectWordsRequest>,
) -> Result<Json<FlashcardSessionResponse>> {
    let selection = request.selection();
    let words = state.store.select(&selection);

    let mut registry = state.sessions()?;
    let session = session_mut(&mut registry, id)?;
    session.scheduler.initialize(words);
    session.selection = selection;
    Ok(Json(response(id, session)))
}

/// GET /api/flashcards/sessions/:id/events
pub async fn events(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EventsResponse>> {
    let mut registry = state.sessions()?;
    let session = session_mut(&mut registry, id)?;
    Ok(Json(EventsResponse {
        events: session.scheduler.drain_events(),
    }))
}
