//! Review draft entity

use std::fmt;

use chrono::{Datelike, Local};

use crate::domain::review::{Nominations, RecordingSlot, ReviewSubmission, Score};
use crate::domain::transcription::AudioData;

use super::step::WizardStep;

/// Subject name used when none is supplied at launch
pub const DEFAULT_SUBJECT: &str = "Karyawan";

const INDONESIAN_MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Indonesian name for a month number (1 = January)
pub fn indonesian_month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    INDONESIAN_MONTHS.get(index).copied()
}

/// Session launch parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchParams {
    pub subject: String,
    pub period: String,
}

impl LaunchParams {
    /// Fill missing or blank values with the defaults: "Karyawan" and the
    /// current month's Indonesian name.
    pub fn resolve(subject: Option<String>, period: Option<String>) -> Self {
        let subject = subject
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SUBJECT.to_string());
        let period = period
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(current_month_name);
        Self { subject, period }
    }
}

fn current_month_name() -> String {
    indonesian_month_name(Local::now().month())
        .unwrap_or("Januari")
        .to_string()
}

/// Locally scoped reference used to play a captured recording back.
///
/// Not `Clone`: the slot holding it is its only owner, and it must be
/// handed back to the playback store to be revoked.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct PlaybackRef(String);

impl PlaybackRef {
    pub fn new(location: impl Into<String>) -> Self {
        Self(location.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaybackRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Audio captured by one recording session
#[derive(Debug, PartialEq, Eq)]
pub struct CapturedAudio {
    pub audio: AudioData,
    pub playback: PlaybackRef,
}

/// Per-slot captured audio
#[derive(Debug, Default)]
pub struct Recordings {
    directors: Option<CapturedAudio>,
    system: Option<CapturedAudio>,
}

impl Recordings {
    pub fn get(&self, slot: RecordingSlot) -> Option<&CapturedAudio> {
        match slot {
            RecordingSlot::Directors => self.directors.as_ref(),
            RecordingSlot::System => self.system.as_ref(),
        }
    }

    pub fn is_present(&self, slot: RecordingSlot) -> bool {
        self.get(slot).is_some()
    }

    /// Store a capture, returning the one it replaces
    pub fn replace(&mut self, slot: RecordingSlot, captured: CapturedAudio) -> Option<CapturedAudio> {
        self.slot_mut(slot).replace(captured)
    }

    /// Remove and return a slot's capture
    pub fn take(&mut self, slot: RecordingSlot) -> Option<CapturedAudio> {
        self.slot_mut(slot).take()
    }

    fn slot_mut(&mut self, slot: RecordingSlot) -> &mut Option<CapturedAudio> {
        match slot {
            RecordingSlot::Directors => &mut self.directors,
            RecordingSlot::System => &mut self.system,
        }
    }
}

/// Submission status shown in the wizard footer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmissionState {
    pub status: SubmissionStatus,
    pub message: String,
}

impl SubmissionState {
    pub fn loading() -> Self {
        Self {
            status: SubmissionStatus::Loading,
            message: String::new(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: SubmissionStatus::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: SubmissionStatus::Error,
            message: message.into(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == SubmissionStatus::Loading
    }
}

/// Form state accumulated over one wizard session
#[derive(Debug)]
pub struct ReviewDraft {
    pub step: WizardStep,
    pub subject: String,
    pub period: String,
    pub score: Option<Score>,
    pub nominations: Nominations,
    pub recordings: Recordings,
    pub submission: SubmissionState,
}

impl ReviewDraft {
    pub fn new(params: LaunchParams) -> Self {
        Self {
            step: WizardStep::Welcome,
            subject: params.subject,
            period: params.period,
            score: None,
            nominations: Nominations::default(),
            recordings: Recordings::default(),
            submission: SubmissionState::default(),
        }
    }

    /// Whether the data required by `step` has been collected
    pub fn is_step_valid(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::Welcome | WizardStep::Success => true,
            WizardStep::Score => self.score.is_some(),
            WizardStep::Nominations => self.nominations.is_complete_for(&self.subject),
            WizardStep::RecordDirectors => self.recordings.is_present(RecordingSlot::Directors),
            WizardStep::RecordSystem => self.recordings.is_present(RecordingSlot::System),
        }
    }

    /// Build the payload sent to the server, if every field is present
    pub fn to_submission(&self) -> Option<ReviewSubmission> {
        let score = self.score?;
        let directors = self.recordings.get(RecordingSlot::Directors)?;
        let system = self.recordings.get(RecordingSlot::System)?;

        Some(ReviewSubmission {
            subject: self.subject.clone(),
            period: self.period.clone(),
            score,
            nominations: self.nominations.clone(),
            directors: directors.audio.clone(),
            system: system.audio.clone(),
        })
    }
}
