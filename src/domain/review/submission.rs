//! Client-side submission payload

use crate::domain::transcription::AudioData;

use super::nomination::Nominations;
use super::score::Score;
use super::slot::RecordingSlot;

/// Everything the wizard sends to the server in one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSubmission {
    pub subject: String,
    pub period: String,
    pub score: Score,
    pub nominations: Nominations,
    pub directors: AudioData,
    pub system: AudioData,
}

impl ReviewSubmission {
    pub fn audio(&self, slot: RecordingSlot) -> &AudioData {
        match slot {
            RecordingSlot::Directors => &self.directors,
            RecordingSlot::System => &self.system,
        }
    }

    /// File name attached to a slot's multipart part,
    /// e.g. `dimas_oktober_saran_direksi.webm`
    pub fn upload_file_name(&self, slot: RecordingSlot) -> String {
        format!(
            "{}_{}_{}.{}",
            self.subject.to_lowercase(),
            self.period.to_lowercase(),
            slot.archive_label(),
            self.audio(slot).mime_type().extension()
        )
    }
}
