//! Incoming review form and its validation

use crate::domain::error::ReviewValidationError;
use crate::domain::transcription::AudioData;

use super::nomination::{NominationCategory, Nominations};
use super::score::Score;
use super::slot::RecordingSlot;

/// One uploaded audio part
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedAudio {
    pub audio: AudioData,
    /// Client-supplied file name, used only for its extension
    pub file_name: Option<String>,
}

impl UploadedAudio {
    pub fn new(audio: AudioData, file_name: Option<String>) -> Self {
        Self { audio, file_name }
    }
}

/// Raw review form as received, before any validation.
///
/// Text fields are kept as strings so that malformed input can be
/// reported with the reviewer-facing message rather than a parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewForm {
    pub name: Option<String>,
    pub month: Option<String>,
    pub score: Option<String>,
    pub nominations: Nominations,
    pub audio_directors: Option<UploadedAudio>,
    pub audio_system: Option<UploadedAudio>,
}

impl ReviewForm {
    /// Assign a text field by its multipart name. Unknown names are ignored.
    pub fn set_text_field(&mut self, field: &str, value: String) {
        match field {
            "name" => self.name = Some(value),
            "month" => self.month = Some(value),
            "score" => self.score = Some(value),
            other => {
                if let Some(category) = NominationCategory::from_key(other) {
                    self.nominations.set(category, value);
                }
            }
        }
    }

    pub fn set_audio(&mut self, slot: RecordingSlot, upload: UploadedAudio) {
        match slot {
            RecordingSlot::Directors => self.audio_directors = Some(upload),
            RecordingSlot::System => self.audio_system = Some(upload),
        }
    }

    /// Check the form in the order reviewers are told about problems:
    /// identity and score, then nominations, then recordings.
    pub fn validate(self) -> Result<ValidatedReview, ReviewValidationError> {
        let subject = non_blank(self.name).ok_or(ReviewValidationError::IncompleteReview)?;
        let period = non_blank(self.month).ok_or(ReviewValidationError::IncompleteReview)?;
        let score = self
            .score
            .as_deref()
            .and_then(|s| s.parse::<Score>().ok())
            .ok_or(ReviewValidationError::IncompleteReview)?;

        if !self.nominations.all_filled() {
            return Err(ReviewValidationError::IncompleteNominations);
        }

        let directors = present_audio(self.audio_directors)?;
        let system = present_audio(self.audio_system)?;

        Ok(ValidatedReview {
            subject,
            period,
            score,
            nominations: self.nominations,
            directors,
            system,
        })
    }
}

/// A review that passed validation and may be processed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedReview {
    pub subject: String,
    pub period: String,
    pub score: Score,
    pub nominations: Nominations,
    pub directors: UploadedAudio,
    pub system: UploadedAudio,
}

impl ValidatedReview {
    pub fn audio(&self, slot: RecordingSlot) -> &UploadedAudio {
        match slot {
            RecordingSlot::Directors => &self.directors,
            RecordingSlot::System => &self.system,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn present_audio(upload: Option<UploadedAudio>) -> Result<UploadedAudio, ReviewValidationError> {
    upload
        .filter(|u| !u.audio.is_empty())
        .ok_or(ReviewValidationError::MissingAudio)
}
