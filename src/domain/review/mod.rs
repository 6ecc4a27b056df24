//! Review domain module

mod form;
mod nomination;
mod object_name;
mod record;
mod score;
mod slot;
mod submission;

pub use form::{ReviewForm, UploadedAudio, ValidatedReview};
pub use nomination::{NominationCategory, Nominations, DEFAULT_ROSTER};
pub use object_name::{archive_object_name, safe_stem};
pub use record::ReviewRecord;
pub use score::{Score, MAX_SCORE, MIN_SCORE};
pub use slot::RecordingSlot;
pub use submission::ReviewSubmission;
