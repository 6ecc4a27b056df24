//! Router construction

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::application::ports::{ObjectStore, RowAppender, Transcriber};
use crate::application::SubmitReviewUseCase;

use super::handlers::{self, MAX_AUDIO_BYTES};

/// Room for two audio parts plus the text fields
const REQUEST_BODY_LIMIT: usize = 2 * MAX_AUDIO_BYTES + 1024 * 1024;

/// Pipeline with its collaborators chosen at startup
pub type ReviewPipeline =
    SubmitReviewUseCase<Box<dyn Transcriber>, Box<dyn ObjectStore>, Box<dyn RowAppender>>;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub submit_review: Arc<ReviewPipeline>,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(submit_review: ReviewPipeline, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            submit_review: Arc::new(submit_review),
            static_dir: static_dir.into(),
        }
    }
}

/// Build the application router.
///
/// `POST /api/reviews` runs the pipeline; every other path is served from
/// the static directory, falling back to its `index.html`.
pub fn build_router(state: AppState) -> Router {
    let index = state.static_dir.join("index.html");
    let static_files = ServeDir::new(&state.static_dir).fallback(ServeFile::new(index));

    Router::new()
        .route("/api/reviews", post(handlers::submit_review))
        .layer(DefaultBodyLimit::max(REQUEST_BODY_LIMIT))
        .fallback_service(static_files)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
