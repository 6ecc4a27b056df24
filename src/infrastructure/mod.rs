//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like FFmpeg, Gemini API,
//! Google Cloud Storage and Google Sheets.

pub mod config;
pub mod microphone;
pub mod playback;
pub mod sheets;
pub mod storage;
pub mod submission;
pub mod transcoding;
pub mod transcription;

// Re-export adapters
pub use config::XdgConfigStore;
pub use microphone::FfmpegMicrophone;
pub use playback::TempPlaybackStore;
pub use sheets::{DisabledRowAppender, GoogleSheetsAppender};
pub use storage::{DisabledObjectStore, GcsObjectStore};
pub use submission::HttpReviewSubmitter;
pub use transcoding::FfmpegTranscoder;
pub use transcription::{DisabledTranscriber, GeminiTranscriber};
