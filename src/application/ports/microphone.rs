//! Microphone port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::transcription::AudioData;

/// Microphone errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MicrophoneError {
    #[error("Tidak dapat mengakses mikrofon. Izin ditolak: {0}")]
    PermissionDenied(String),

    #[error("Mikrofon tidak tersedia: {0}")]
    DeviceUnavailable(String),

    #[error("Recording failed: {0}")]
    CaptureFailed(String),
}

/// Port for permission-gated audio capture.
///
/// At most one capture is active per microphone. `release` must be safe to
/// call at any time, including when nothing is active.
#[async_trait]
pub trait Microphone: Send + Sync {
    /// Acquire the device and start buffering audio
    async fn acquire(&self) -> Result<(), MicrophoneError>;

    /// Stop capturing, release the device and return the buffered audio
    async fn finish(&self) -> Result<AudioData, MicrophoneError>;

    /// Abort any acquisition or capture and release the device
    async fn release(&self);
}
