//! Submit review use case

use chrono::Utc;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::domain::error::ReviewValidationError;
use crate::domain::review::{
    archive_object_name, RecordingSlot, ReviewForm, ReviewRecord, ValidatedReview,
};
use crate::domain::transcription::TranscriptionPrompt;

use super::ports::{AppendError, ObjectStore, RowAppender, Transcriber};

/// Acknowledgment returned for an accepted review
pub const ACCEPTED_MESSAGE: &str = "Review berhasil diproses.";

/// Errors from the submit review use case.
///
/// Only validation and persistence failures surface here; transcription
/// and archival failures degrade to empty values.
#[derive(Debug, Error)]
pub enum SubmitReviewError {
    #[error(transparent)]
    Validation(#[from] ReviewValidationError),

    #[error("Failed to persist review: {0}")]
    Persistence(#[from] AppendError),
}

/// Output from the submit review use case
#[derive(Debug, Clone)]
pub struct SubmitReviewOutput {
    pub message: String,
    pub record: ReviewRecord,
}

/// Review submission pipeline: validate, fan out transcription and
/// archival, then append one row.
pub struct SubmitReviewUseCase<T, S, A>
where
    T: Transcriber,
    S: ObjectStore,
    A: RowAppender,
{
    transcriber: T,
    store: S,
    appender: A,
    prompt: TranscriptionPrompt,
}

impl<T, S, A> SubmitReviewUseCase<T, S, A>
where
    T: Transcriber,
    S: ObjectStore,
    A: RowAppender,
{
    /// Create a new use case instance
    pub fn new(transcriber: T, store: S, appender: A) -> Self {
        Self {
            transcriber,
            store,
            appender,
            prompt: TranscriptionPrompt::indonesian(),
        }
    }

    /// Execute the submission pipeline
    pub async fn execute(&self, form: ReviewForm) -> Result<SubmitReviewOutput, SubmitReviewError> {
        let review = form.validate()?;

        info!(
            subject = %review.subject,
            period = %review.period,
            directors = %review.directors.audio.human_readable_size(),
            system = %review.system.audio.human_readable_size(),
            "Processing review submission"
        );

        let (directors_transcript, system_transcript, directors_locator, system_locator) = tokio::join!(
            self.transcribe_or_empty(&review, RecordingSlot::Directors),
            self.transcribe_or_empty(&review, RecordingSlot::System),
            self.archive_or_empty(&review, RecordingSlot::Directors),
            self.archive_or_empty(&review, RecordingSlot::System),
        );

        let record = ReviewRecord {
            subject: review.subject,
            period: review.period,
            score: review.score,
            nominations: review.nominations,
            directors_transcript,
            system_transcript,
            directors_locator,
            system_locator,
            submitted_at: Utc::now(),
        };

        if let Err(e) = self.appender.append_row(&record.to_row()).await {
            error!(
                subject = %record.subject,
                period = %record.period,
                error = %e,
                "Failed to append review row"
            );
            return Err(e.into());
        }

        info!(
            subject = %record.subject,
            period = %record.period,
            submitted_at = %record.submitted_at,
            "Review recorded"
        );

        Ok(SubmitReviewOutput {
            message: ACCEPTED_MESSAGE.to_string(),
            record,
        })
    }

    async fn transcribe_or_empty(&self, review: &ValidatedReview, slot: RecordingSlot) -> String {
        let upload = review.audio(slot);
        match self.transcriber.transcribe(&upload.audio, &self.prompt).await {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                warn!(recording = slot.description(), error = %e, "Transcription failed, storing empty transcript");
                String::new()
            }
        }
    }

    async fn archive_or_empty(&self, review: &ValidatedReview, slot: RecordingSlot) -> String {
        let upload = review.audio(slot);
        let object_name = archive_object_name(
            &review.subject,
            &review.period,
            slot,
            upload.file_name.as_deref(),
        );

        let locator = match self.store.store(&object_name, &upload.audio).await {
            Ok(locator) => locator,
            Err(e) => {
                warn!(object = %object_name, error = %e, "Archival failed, storing empty locator");
                return String::new();
            }
        };

        if let Err(e) = self.store.restrict_access(&object_name).await {
            warn!(object = %object_name, error = %e, "Could not make archived audio private");
        }

        locator
    }
}
