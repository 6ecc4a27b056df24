//! Wizard domain module

mod draft;
mod recorder;
mod step;

pub use draft::{
    indonesian_month_name, CapturedAudio, LaunchParams, PlaybackRef, Recordings, ReviewDraft,
    SubmissionState, SubmissionStatus, DEFAULT_SUBJECT,
};
pub use recorder::{InvalidStateTransition, RecorderSession, RecorderState};
pub use step::{WizardStep, STEP_COUNT};
