//! Recording slots

use std::fmt;
use std::str::FromStr;

/// The two voice-feedback questions of a review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordingSlot {
    /// Feedback for directors, CEO and HR
    Directors,
    /// Feedback about the company's systems
    System,
}

impl RecordingSlot {
    pub const ALL: [RecordingSlot; 2] = [Self::Directors, Self::System];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Directors => "directors",
            Self::System => "system",
        }
    }

    /// Multipart file field carrying this slot's audio
    pub const fn form_field(&self) -> &'static str {
        match self {
            Self::Directors => "audioDirectors",
            Self::System => "audioSystem",
        }
    }

    /// Label used in archived object names
    pub const fn archive_label(&self) -> &'static str {
        match self {
            Self::Directors => "saran_direksi",
            Self::System => "saran_sistem",
        }
    }

    /// Resolve a multipart field name
    pub fn from_form_field(field: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.form_field() == field)
    }

    /// Human-readable description used in logs
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Directors => "Saran untuk Direksi",
            Self::System => "Saran untuk Sistem",
        }
    }
}

impl fmt::Display for RecordingSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordingSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "directors" => Ok(Self::Directors),
            "system" => Ok(Self::System),
            other => Err(format!("Unknown recording slot: \"{}\"", other)),
        }
    }
}
