//! HTTP server
//!
//! Accepts review submissions as multipart forms and serves the static
//! wizard page.

pub mod error;
pub mod handlers;
pub mod routes;

pub use error::ApiError;
pub use handlers::MAX_AUDIO_BYTES;
pub use routes::{build_router, AppState, ReviewPipeline};
