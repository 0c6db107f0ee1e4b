pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    routing::{get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vocab_core::{SchedulerSettings, WordStore};

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::services::sessions::SessionRegistry;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<WordStore>,
    pub sessions: Arc<Mutex<SessionRegistry>>,
    pub scheduler_settings: SchedulerSettings,
    pub rng_seed: Option<u64>,
}

impl AppState {
    pub fn new(
        store: WordStore,
        scheduler_settings: SchedulerSettings,
        rng_seed: Option<u64>,
    ) -> Self {
        Self {
            store: Arc::new(store),
            sessions: Arc::new(Mutex::new(SessionRegistry::new())),
            scheduler_settings,
            rng_seed,
        }
    }

    /// Lock the session registry.
    pub fn sessions(&self) -> Result<MutexGuard<'_, SessionRegistry>> {
        self.sessions
            .lock()
            .map_err(|_| ApiError::Internal("session registry lock poisoned".to_string()))
    }

    /// Request seed first, then the configured one.
    pub fn seed(&self, requested: Option<u64>) -> Option<u64> {
        requested.or(self.rng_seed)
    }
}

/// Build the router with all routes.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Word routes
        .route("/api/words", get(routes::words::list))
        .route("/api/categories", get(routes::words::categories))
        // Flashcard routes
        .route("/api/flashcards/sessions", post(routes::flashcards::create))
        .route(
            "/api/flashcards/sessions/:id",
            get(routes::flashcards::get).delete(routes::flashcards::end),
        )
        .route("/api/flashcards/sessions/:id/advance", post(routes::flashcards::advance))
        .route("/api/flashcards/sessions/:id/retreat", post(routes::flashcards::retreat))
        .route("/api/flashcards/sessions/:id/shuffle", post(routes::flashcards::shuffle))
        .route("/api/flashcards/sessions/:id/reset", post(routes::flashcards::reset))
        .route("/api/flashcards/sessions/:id/mark", post(routes::flashcards::mark))
        .route("/api/flashcards/sessions/:id/words", put(routes::flashcards::select_words))
        .route("/api/flashcards/sessions/:id/events", get(routes::flashcards::events))
        // Quiz routes
        .route("/api/quizzes", post(routes::quizzes::create))
        .route(
            "/api/quizzes/:id",
            get(routes::quizzes::get).delete(routes::quizzes::end),
        )
        .route("/api/quizzes/:id/answer", post(routes::quizzes::answer))
        .route("/api/quizzes/:id/navigate", post(routes::quizzes::navigate))
        .route("/api/quizzes/:id/pause", post(routes::quizzes::pause))
        .route("/api/quizzes/:id/resume", post(routes::quizzes::resume))
        .route("/api/quizzes/:id/complete", post(routes::quizzes::complete))
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!("Loading words from {}...", config.words_path.display());
    let store = services::words::load_words(&config.words_path)?;

    let state = AppState::new(store, config.scheduler, config.rng_seed);

    let app = router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
