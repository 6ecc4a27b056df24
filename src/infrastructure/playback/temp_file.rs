//! Temp-file playback store

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, warn};

use crate::application::ports::{PlaybackError, PlaybackStore};
use crate::domain::transcription::AudioData;
use crate::domain::wizard::PlaybackRef;

/// Writes each capture to its own file so an external player can open it.
/// Revoking a reference deletes the file.
pub struct TempPlaybackStore {
    dir: PathBuf,
    counter: AtomicU64,
}

impl TempPlaybackStore {
    /// Store files in the system temp directory
    pub fn new() -> Self {
        Self::in_dir(std::env::temp_dir())
    }

    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            counter: AtomicU64::new(0),
        }
    }

    fn next_path(&self, audio: &AudioData) -> PathBuf {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        self.dir.join(format!(
            "vocal-review-playback-{}-{}.{}",
            std::process::id(),
            n,
            audio.mime_type().extension()
        ))
    }
}

impl Default for TempPlaybackStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackStore for TempPlaybackStore {
    fn register(&self, audio: &AudioData) -> Result<PlaybackRef, PlaybackError> {
        let path = self.next_path(audio);
        std::fs::write(&path, audio.data())
            .map_err(|e| PlaybackError::CreateFailed(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "Playback file written");
        Ok(PlaybackRef::new(path.to_string_lossy()))
    }

    fn revoke(&self, playback: PlaybackRef) {
        if let Err(e) = std::fs::remove_file(playback.as_str()) {
            warn!(path = %playback, error = %e, "Failed to remove playback file");
        }
    }
}
