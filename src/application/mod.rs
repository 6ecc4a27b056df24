//! Application layer - Use cases and port interfaces
//!
//! Contains the review submission pipeline, the wizard engine and
//! the trait definitions for external system interactions.

pub mod ports;
pub mod submit_review;
pub mod transcoding;
pub mod wizard;

// Re-export use cases
pub use submit_review::{
    SubmitReviewError, SubmitReviewOutput, SubmitReviewUseCase, ACCEPTED_MESSAGE,
};
pub use transcoding::{NormalizingTranscriber, TranscodeQueue, DEFAULT_QUEUE_CAPACITY};
pub use wizard::{Advance, ReviewWizard, WizardError, SUBMITTED_MESSAGE};
