//! Transcoding port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::transcription::AudioData;

/// Transcoding errors
#[derive(Debug, Clone, Error)]
pub enum TranscodeError {
    #[error("ffmpeg not found. Please install ffmpeg.")]
    FfmpegNotFound,

    #[error("Transcoding failed: {0}")]
    Failed(String),

    #[error("Transcode queue is closed")]
    QueueClosed,
}

/// Port for audio format normalization
#[async_trait]
pub trait Transcoder: Send + Sync {
    /// Convert the payload into the format expected by the transcriber
    async fn transcode(&self, audio: AudioData) -> Result<AudioData, TranscodeError>;
}
