//! Transcriber used when no backend is configured

use async_trait::async_trait;
use tracing::warn;

use crate::application::ports::{Transcriber, TranscriptionError};
use crate::domain::transcription::{AudioData, TranscriptionPrompt};

/// Always fails with `NotConfigured`, which the pipeline turns into an
/// empty transcript.
pub struct DisabledTranscriber {
    reason: String,
}

impl DisabledTranscriber {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl Transcriber for DisabledTranscriber {
    async fn transcribe(
        &self,
        _audio: &AudioData,
        _prompt: &TranscriptionPrompt,
    ) -> Result<String, TranscriptionError> {
        warn!(reason = %self.reason, "Skipping transcription");
        Err(TranscriptionError::NotConfigured(self.reason.clone()))
    }
}
