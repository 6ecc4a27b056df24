//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod review;
pub mod transcription;
pub mod wizard;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use review::{RecordingSlot, ReviewForm, ReviewRecord, ReviewSubmission, Score};
pub use transcription::{AudioData, AudioMimeType, TranscriptionPrompt};
pub use wizard::{ReviewDraft, WizardStep};
