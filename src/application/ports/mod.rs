//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod microphone;
pub mod object_store;
pub mod playback;
pub mod row_appender;
pub mod submitter;
pub mod transcoder;
pub mod transcriber;

// Re-export common types
pub use config::ConfigStore;
pub use microphone::{Microphone, MicrophoneError};
pub use object_store::{ObjectStore, StorageError};
pub use playback::{PlaybackError, PlaybackStore};
pub use row_appender::{AppendError, RowAppender};
pub use submitter::{ReviewSubmitter, SubmitError, SUBMIT_FAILED_MESSAGE};
pub use transcoder::{TranscodeError, Transcoder};
pub use transcriber::{Transcriber, TranscriptionError};
