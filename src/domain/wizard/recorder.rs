//! Recording sub-state machine

use std::fmt;
use thiserror::Error;

use crate::domain::review::RecordingSlot;

/// Recorder states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecorderState {
    #[default]
    Idle,
    /// Waiting for the microphone to be granted
    Requesting(RecordingSlot),
    /// Capturing audio for a slot
    Recording(RecordingSlot),
}

impl RecorderState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Requesting(_) => "requesting",
            Self::Recording(_) => "recording",
        }
    }

    /// Slot that currently holds the device, if any
    pub const fn active_slot(&self) -> Option<RecordingSlot> {
        match self {
            Self::Idle => None,
            Self::Requesting(slot) | Self::Recording(slot) => Some(*slot),
        }
    }
}

impl fmt::Display for RecorderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid state transition is attempted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid state transition: cannot {action} while in {current_state} state")]
pub struct InvalidStateTransition {
    pub current_state: RecorderState,
    pub action: String,
}

/// Recorder session entity.
/// One instance serves both recording steps, so at most one slot can hold
/// the microphone at a time.
///
/// State machine:
///   IDLE -> REQUESTING (request)
///   REQUESTING -> RECORDING (granted)
///   RECORDING -> IDLE (finish)
///   REQUESTING | RECORDING -> IDLE (release)
#[derive(Debug, Default)]
pub struct RecorderSession {
    state: RecorderState,
}

impl RecorderSession {
    /// Create a new recorder session in idle state
    pub fn new() -> Self {
        Self {
            state: RecorderState::Idle,
        }
    }

    /// Get the current state
    pub fn state(&self) -> RecorderState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == RecorderState::Idle
    }

    /// Check if the given slot is being recorded
    pub fn is_recording(&self, slot: RecordingSlot) -> bool {
        self.state == RecorderState::Recording(slot)
    }

    /// Transition from IDLE to REQUESTING
    pub fn request(&mut self, slot: RecordingSlot) -> Result<(), InvalidStateTransition> {
        if self.state != RecorderState::Idle {
            return Err(self.invalid("request the microphone"));
        }
        self.state = RecorderState::Requesting(slot);
        Ok(())
    }

    /// Transition from REQUESTING to RECORDING
    pub fn granted(&mut self) -> Result<RecordingSlot, InvalidStateTransition> {
        match self.state {
            RecorderState::Requesting(slot) => {
                self.state = RecorderState::Recording(slot);
                Ok(slot)
            }
            _ => Err(self.invalid("start recording")),
        }
    }

    /// Transition from RECORDING to IDLE, yielding the recorded slot
    pub fn finish(&mut self) -> Result<RecordingSlot, InvalidStateTransition> {
        match self.state {
            RecorderState::Recording(slot) => {
                self.state = RecorderState::Idle;
                Ok(slot)
            }
            _ => Err(self.invalid("stop recording")),
        }
    }

    /// Drop any acquisition or recording and return to IDLE.
    /// Returns true if a session was active.
    pub fn release(&mut self) -> bool {
        let was_active = self.state != RecorderState::Idle;
        self.state = RecorderState::Idle;
        was_active
    }

    fn invalid(&self, action: &str) -> InvalidStateTransition {
        InvalidStateTransition {
            current_state: self.state,
            action: action.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_idle() {
        let session = RecorderSession::new();
        assert!(session.is_idle());
        assert_eq!(session.state().active_slot(), None);
    }

    #[test]
    fn request_then_granted() {
        let mut session = RecorderSession::new();
        session.request(RecordingSlot::Directors).unwrap();
        assert_eq!(session.state(), RecorderState::Requesting(RecordingSlot::Directors));

        assert_eq!(session.granted().unwrap(), RecordingSlot::Directors);
        assert!(session.is_recording(RecordingSlot::Directors));
        assert!(!session.is_recording(RecordingSlot::System));
    }

    #[test]
    fn request_while_active_fails() {
        let mut session = RecorderSession::new();
        session.request(RecordingSlot::Directors).unwrap();

        let err = session.request(RecordingSlot::System).unwrap_err();
        assert_eq!(
            err.current_state,
            RecorderState::Requesting(RecordingSlot::Directors)
        );
    }

    #[test]
    fn granted_from_idle_fails() {
        let mut session = RecorderSession::new();
        let err = session.granted().unwrap_err();
        assert_eq!(err.current_state, RecorderState::Idle);
        assert!(err.action.contains("start recording"));
    }

    #[test]
    fn finish_from_requesting_fails() {
        let mut session = RecorderSession::new();
        session.request(RecordingSlot::System).unwrap();
        assert!(session.finish().is_err());
    }

    #[test]
    fn full_cycle() {
        let mut session = RecorderSession::new();
        session.request(RecordingSlot::System).unwrap();
        session.granted().unwrap();
        assert_eq!(session.finish().unwrap(), RecordingSlot::System);
        assert!(session.is_idle());

        // Can start another cycle
        session.request(RecordingSlot::Directors).unwrap();
        assert!(!session.is_idle());
    }

    #[test]
    fn release_reports_activity() {
        let mut session = RecorderSession::new();
        assert!(!session.release());

        session.request(RecordingSlot::Directors).unwrap();
        assert!(session.release());
        assert!(session.is_idle());
    }

    #[test]
    fn error_display() {
        let err = InvalidStateTransition {
            current_state: RecorderState::Recording(RecordingSlot::System),
            action: "request the microphone".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("request the microphone"));
        assert!(msg.contains("recording"));
    }
}
