//! Playback reference port interface

use thiserror::Error;

use crate::domain::transcription::AudioData;
use crate::domain::wizard::PlaybackRef;

/// Playback errors
#[derive(Debug, Clone, Error)]
pub enum PlaybackError {
    #[error("Failed to prepare playback: {0}")]
    CreateFailed(String),
}

/// Port issuing locally scoped playback references for captured audio
pub trait PlaybackStore: Send + Sync {
    /// Make `audio` playable and return a reference to it
    fn register(&self, audio: &AudioData) -> Result<PlaybackRef, PlaybackError>;

    /// Release the resources behind a reference
    fn revoke(&self, playback: PlaybackRef);
}
