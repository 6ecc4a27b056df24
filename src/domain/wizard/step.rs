//! Wizard steps

use std::fmt;

use crate::domain::review::RecordingSlot;

/// Number of steps, including the success screen
pub const STEP_COUNT: usize = 6;

/// The linear sequence of wizard screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum WizardStep {
    #[default]
    Welcome,
    Score,
    Nominations,
    RecordDirectors,
    RecordSystem,
    Success,
}

impl WizardStep {
    pub const ALL: [WizardStep; STEP_COUNT] = [
        Self::Welcome,
        Self::Score,
        Self::Nominations,
        Self::RecordDirectors,
        Self::RecordSystem,
        Self::Success,
    ];

    pub const fn index(&self) -> usize {
        match self {
            Self::Welcome => 0,
            Self::Score => 1,
            Self::Nominations => 2,
            Self::RecordDirectors => 3,
            Self::RecordSystem => 4,
            Self::Success => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The following step, if any
    pub fn following(&self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// The preceding step, if any
    pub fn preceding(&self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// Recording slot captured on this step
    pub const fn recording_slot(&self) -> Option<RecordingSlot> {
        match self {
            Self::RecordDirectors => Some(RecordingSlot::Directors),
            Self::RecordSystem => Some(RecordingSlot::System),
            _ => None,
        }
    }

    /// The last data-entry step; advancing from it submits the review
    pub const fn submits(&self) -> bool {
        matches!(self, Self::RecordSystem)
    }

    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub const fn heading(&self) -> &'static str {
        match self {
            Self::Welcome => "Selamat datang di Project Vocal Review",
            Self::Score => "Evaluasi Kuantitatif",
            Self::Nominations => "Nominasi Rekan Kerja",
            Self::RecordDirectors => "Saran untuk Directors/CEO/HR",
            Self::RecordSystem => "Saran untuk Sistem Kenapa Creative",
            Self::Success => "Terima kasih!",
        }
    }

    /// Progress badge, e.g. "Langkah 2 dari 5"
    pub fn badge(&self) -> Option<String> {
        match self {
            Self::Welcome | Self::Success => None,
            step => Some(format!("Langkah {} dari {}", step.index() + 1, STEP_COUNT - 1)),
        }
    }

    /// Label of the advance action on this step
    pub const fn advance_label(&self) -> &'static str {
        match self {
            Self::RecordDirectors => "Confirm & Next",
            Self::RecordSystem => "Submit Final Review",
            _ => "Next",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.heading())
    }
}
