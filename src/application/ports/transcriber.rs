//! Transcription port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::transcription::{AudioData, TranscriptionPrompt};

/// Transcription errors
#[derive(Debug, Clone, Error)]
pub enum TranscriptionError {
    #[error("Transcription is not configured: {0}")]
    NotConfigured(String),

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Empty transcription response")]
    EmptyResponse,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Audio normalization failed: {0}")]
    Normalization(String),
}

/// Port for audio transcription
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe audio data to text.
    ///
    /// # Arguments
    /// * `audio` - The audio data to transcribe
    /// * `prompt` - Language hint and instruction text
    ///
    /// # Returns
    /// The transcribed text or an error
    async fn transcribe(
        &self,
        audio: &AudioData,
        prompt: &TranscriptionPrompt,
    ) -> Result<String, TranscriptionError>;
}

/// Blanket implementation for boxed transcriber types
#[async_trait]
impl Transcriber for Box<dyn Transcriber> {
    async fn transcribe(
        &self,
        audio: &AudioData,
        prompt: &TranscriptionPrompt,
    ) -> Result<String, TranscriptionError> {
        self.as_ref().transcribe(audio, prompt).await
    }
}
