//! Word store endpoints

use axum::{
    extract::{Query, State},
    Json,
};

use crate::models::*;
use crate::AppState;

/// GET /api/words
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<WordsQuery>,
) -> Json<WordListResponse> {
    let words = state.store.select(&query.selection());
    Json(WordListResponse {
        total: words.len(),
        words,
    })
}

/// GET /api/categories
pub async fn categories(State(state): State<AppState>) -> Json<CategoryListResponse> {
    let categories = state
        .store
        .categories()
        .into_iter()
        .map(|category| CategoryInfo {
            category,
            subcategories: state.store.subcategories(category),
            word_count: state.store.select(&WordSelection::category(category)).len(),
        })
        .collect();

    Json(CategoryListResponse { categories })
}
