//! Review wizard use case

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::error::InvalidScore;
use crate::domain::review::{NominationCategory, RecordingSlot, Score};
use crate::domain::wizard::{
    CapturedAudio, InvalidStateTransition, LaunchParams, RecorderSession, RecorderState,
    ReviewDraft, SubmissionState, WizardStep,
};

use super::ports::{Microphone, MicrophoneError, PlaybackError, PlaybackStore, ReviewSubmitter};

/// Message shown once the server has accepted the review
pub const SUBMITTED_MESSAGE: &str = "Review berhasil dikirim.";

/// Errors from wizard operations
#[derive(Debug, Error)]
pub enum WizardError {
    #[error(transparent)]
    Microphone(#[from] MicrophoneError),

    #[error(transparent)]
    Playback(#[from] PlaybackError),

    #[error(transparent)]
    InvalidState(#[from] InvalidStateTransition),

    #[error(transparent)]
    InvalidScore(#[from] InvalidScore),

    #[error("Cannot {action} on the \"{step}\" step")]
    WrongStep { action: &'static str, step: WizardStep },

    #[error("{name} cannot be nominated")]
    IneligibleNominee { name: String },
}

/// Result of asking the wizard to advance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// The current step's data is incomplete, or advancing is not possible
    Blocked,
    /// Moved to the given step
    Moved(WizardStep),
    /// The review was submitted and the success screen reached
    Completed,
    /// Submission failed; the wizard stays on the current step
    Failed(String),
}

/// Step wizard owning the draft and the recorder session.
///
/// Only one `ReviewWizard` drives a session and every mutation takes
/// `&mut self`, so there is never more than one submission in flight.
pub struct ReviewWizard<M, P, S>
where
    M: Microphone,
    P: PlaybackStore,
    S: ReviewSubmitter,
{
    microphone: M,
    playback: P,
    submitter: S,
    roster: Vec<String>,
    draft: ReviewDraft,
    recorder: RecorderSession,
}

impl<M, P, S> ReviewWizard<M, P, S>
where
    M: Microphone,
    P: PlaybackStore,
    S: ReviewSubmitter,
{
    pub fn new(params: LaunchParams, roster: Vec<String>, microphone: M, playback: P, submitter: S) -> Self {
        Self {
            microphone,
            playback,
            submitter,
            roster,
            draft: ReviewDraft::new(params),
            recorder: RecorderSession::new(),
        }
    }

    pub fn draft(&self) -> &ReviewDraft {
        &self.draft
    }

    pub fn step(&self) -> WizardStep {
        self.draft.step
    }

    pub fn recorder_state(&self) -> RecorderState {
        self.recorder.state()
    }

    /// Whether the advance action should be enabled
    pub fn can_advance(&self) -> bool {
        let step = self.draft.step;
        !step.is_terminal()
            && !self.draft.submission.is_loading()
            && self.draft.is_step_valid(step)
    }

    pub fn can_go_back(&self) -> bool {
        self.draft.step.preceding().is_some()
            && !self.draft.step.is_terminal()
            && !self.draft.submission.is_loading()
    }

    /// Set the score. Only allowed on the score step.
    pub fn select_score(&mut self, value: u8) -> Result<Score, WizardError> {
        self.require_step(WizardStep::Score, "select a score")?;
        let score = Score::new(value)?;
        self.draft.score = Some(score);
        Ok(score)
    }

    /// Nominate a colleague. Only allowed on the nominations step.
    pub fn nominate(&mut self, category: NominationCategory, name: &str) -> Result<(), WizardError> {
        self.require_step(WizardStep::Nominations, "nominate")?;
        let name = name.trim();
        if !self.nomination_options().contains(&name) {
            return Err(WizardError::IneligibleNominee {
                name: name.to_string(),
            });
        }
        self.draft.nominations.set(category, name);
        Ok(())
    }

    /// Colleagues that can be nominated: the roster without the subject
    pub fn nomination_options(&self) -> Vec<&str> {
        let subject = self.draft.subject.trim();
        self.roster
            .iter()
            .map(|name| name.as_str())
            .filter(|name| *name != subject)
            .collect()
    }

    /// Acquire the microphone and start capturing audio for `slot`.
    ///
    /// Any earlier acquisition or capture is released first.
    pub async fn start_recording(&mut self, slot: RecordingSlot) -> Result<(), WizardError> {
        if self.draft.step.recording_slot() != Some(slot) {
            return Err(WizardError::WrongStep {
                action: "record",
                step: self.draft.step,
            });
        }

        self.cancel_recording().await;
        self.recorder.request(slot)?;
        debug!(slot = %slot, "Requesting microphone");

        if let Err(e) = self.microphone.acquire().await {
            warn!(slot = %slot, error = %e, "Microphone unavailable");
            self.microphone.release().await;
            self.recorder.release();
            return Err(e.into());
        }

        self.recorder.granted()?;
        info!(slot = %slot, "Recording started");
        Ok(())
    }

    /// Stop the active capture and store it in its slot
    pub async fn stop_recording(&mut self) -> Result<RecordingSlot, WizardError> {
        let slot = self.recorder.finish()?;

        let audio = match self.microphone.finish().await {
            Ok(audio) => audio,
            Err(e) => {
                self.microphone.release().await;
                return Err(e.into());
            }
        };

        let playback = self.playback.register(&audio)?;
        info!(slot = %slot, size = %audio.human_readable_size(), "Recording captured");

        let captured = CapturedAudio { audio, playback };
        if let Some(previous) = self.draft.recordings.replace(slot, captured) {
            self.playback.revoke(previous.playback);
        }
        Ok(slot)
    }

    /// Discard the capture held by `slot`.
    /// Returns false when the slot was already empty.
    pub fn redo(&mut self, slot: RecordingSlot) -> bool {
        match self.draft.recordings.take(slot) {
            Some(captured) => {
                self.playback.revoke(captured.playback);
                debug!(slot = %slot, "Recording discarded");
                true
            }
            None => false,
        }
    }

    /// Advance to the next step, submitting the review from the last
    /// data-entry step.
    pub async fn next(&mut self) -> Advance {
        if !self.can_advance() {
            return Advance::Blocked;
        }

        self.cancel_recording().await;

        let step = self.draft.step;
        if step.submits() {
            return self.submit().await;
        }

        match step.following() {
            Some(following) => {
                self.draft.step = following;
                Advance::Moved(following)
            }
            None => Advance::Blocked,
        }
    }

    /// Go back one step. Captured recordings are kept.
    pub async fn prev(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }

        self.cancel_recording().await;

        match self.draft.step.preceding() {
            Some(preceding) => {
                self.draft.step = preceding;
                true
            }
            None => false,
        }
    }

    async fn submit(&mut self) -> Advance {
        let Some(submission) = self.draft.to_submission() else {
            return Advance::Blocked;
        };

        self.draft.submission = SubmissionState::loading();
        info!(subject = %submission.subject, period = %submission.period, "Submitting review");

        match self.submitter.submit(&submission).await {
            Ok(_) => {
                self.draft.submission = SubmissionState::success(SUBMITTED_MESSAGE);
                self.draft.step = WizardStep::Success;
                Advance::Completed
            }
            Err(e) => {
                warn!(error = ?e, "Submission failed");
                let message = e.to_string();
                self.draft.submission = SubmissionState::error(message.clone());
                Advance::Failed(message)
            }
        }
    }

    /// Abort any acquisition or capture in progress, keeping stored
    /// recordings. Returns true if the microphone was held.
    pub async fn cancel_recording(&mut self) -> bool {
        if self.recorder.release() {
            debug!("Releasing microphone");
            self.microphone.release().await;
            true
        } else {
            false
        }
    }

    fn require_step(&self, step: WizardStep, action: &'static str) -> Result<(), WizardError> {
        if self.draft.step == step {
            Ok(())
        } else {
            Err(WizardError::WrongStep {
                action,
                step: self.draft.step,
            })
        }
    }
}

impl<M, P, S> Drop for ReviewWizard<M, P, S>
where
    M: Microphone,
    P: PlaybackStore,
    S: ReviewSubmitter,
{
    fn drop(&mut self) {
        for slot in RecordingSlot::ALL {
            if let Some(captured) = self.draft.recordings.take(slot) {
                self.playback.revoke(captured.playback);
            }
        }
    }
}
