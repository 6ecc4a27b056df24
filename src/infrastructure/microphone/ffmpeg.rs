//! FFmpeg-based microphone adapter

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncReadExt;
use tokio::process::{Child, Command};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::application::ports::{Microphone, MicrophoneError};
use crate::domain::transcription::{AudioData, AudioMimeType};

/// How long ffmpeg must survive before the device counts as granted
const STARTUP_GRACE: Duration = Duration::from_millis(300);

/// Temp file ffmpeg writes into; removed when dropped
struct CaptureFile(PathBuf);

impl CaptureFile {
    fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for CaptureFile {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.0) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(path = %self.0.display(), error = %e, "Failed to remove capture file"),
        }
    }
}

/// A running capture and the file it writes to.
///
/// `child` is declared last so it drops first; kill_on_drop stops ffmpeg
/// before the file is unlinked.
struct ActiveCapture {
    file: CaptureFile,
    child: Child,
}

/// Captures WebM/Opus audio through an ffmpeg subprocess.
///
/// Holds at most one capture; a second `acquire` fails until the first is
/// finished or released.
pub struct FfmpegMicrophone {
    input_format: String,
    device: String,
    capture: Mutex<Option<ActiveCapture>>,
}

impl FfmpegMicrophone {
    /// Capture from the default PulseAudio source
    pub fn new() -> Self {
        Self::with_device("pulse", "default")
    }

    /// Capture from a specific ffmpeg input format and device
    pub fn with_device(input_format: impl Into<String>, device: impl Into<String>) -> Self {
        Self {
            input_format: input_format.into(),
            device: device.into(),
            capture: Mutex::new(None),
        }
    }

    fn temp_path() -> PathBuf {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        std::env::temp_dir().join(format!(
            "vocal-review-{}-{}.webm",
            std::process::id(),
            timestamp
        ))
    }

    /// Build FFmpeg args for recording
    fn build_ffmpeg_args(&self, output_path: &Path) -> Vec<String> {
        vec![
            "-hide_banner".to_string(),
            "-nostats".to_string(),
            "-loglevel".to_string(),
            "error".to_string(),
            "-f".to_string(),
            self.input_format.clone(),
            "-i".to_string(),
            self.device.clone(),
            "-ac".to_string(),
            "1".to_string(), // Mono
            "-ar".to_string(),
            "48000".to_string(),
            "-c:a".to_string(),
            "libopus".to_string(),
            "-b:a".to_string(),
            "32k".to_string(),
            "-f".to_string(),
            "webm".to_string(),
            "-y".to_string(),
            output_path.to_string_lossy().to_string(),
        ]
    }

    /// Map ffmpeg's last stderr line to a device error
    fn classify_failure(stderr: &str) -> MicrophoneError {
        let last = stderr
            .lines()
            .rev()
            .find(|l| !l.trim().is_empty())
            .unwrap_or("ffmpeg exited during startup")
            .trim()
            .to_string();

        if stderr.contains("Permission denied") || stderr.contains("Access denied") {
            MicrophoneError::PermissionDenied(last)
        } else {
            MicrophoneError::DeviceUnavailable(last)
        }
    }

    async fn read_stderr(child: &mut Child) -> String {
        let mut buf = Vec::new();
        if let Some(mut stderr) = child.stderr.take() {
            let _ = stderr.read_to_end(&mut buf).await;
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Ask ffmpeg to stop and finalize the container
    fn interrupt(child: &mut Child) -> Result<(), MicrophoneError> {
        #[cfg(unix)]
        {
            use nix::sys::signal::{self, Signal};
            use nix::unistd::Pid;

            if let Some(id) = child.id() {
                signal::kill(Pid::from_raw(id as i32), Signal::SIGINT)
                    .map_err(|e| MicrophoneError::CaptureFailed(format!("Signal failed: {}", e)))?;
            }
            Ok(())
        }
        #[cfg(not(unix))]
        {
            child
                .start_kill()
                .map_err(|e| MicrophoneError::CaptureFailed(e.to_string()))
        }
    }
}

impl Default for FfmpegMicrophone {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Microphone for FfmpegMicrophone {
    async fn acquire(&self) -> Result<(), MicrophoneError> {
        let mut guard = self.capture.lock().await;
        if guard.is_some() {
            return Err(MicrophoneError::DeviceUnavailable(
                "Recording already in progress".to_string(),
            ));
        }

        let file = CaptureFile(Self::temp_path());
        let mut child = Command::new("ffmpeg")
            .args(self.build_ffmpeg_args(file.path()))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    MicrophoneError::DeviceUnavailable("ffmpeg not found. Please install ffmpeg.".to_string())
                } else {
                    MicrophoneError::DeviceUnavailable(e.to_string())
                }
            })?;

        // A refused or missing device makes ffmpeg exit almost immediately.
        // Dropping this future here kills the child and removes the file.
        tokio::time::sleep(STARTUP_GRACE).await;
        if let Ok(Some(status)) = child.try_wait() {
            let stderr = Self::read_stderr(&mut child).await;
            debug!(%status, "ffmpeg exited during startup");
            return Err(Self::classify_failure(&stderr));
        }

        debug!(path = %file.path().display(), "Microphone capture started");
        *guard = Some(ActiveCapture { file, child });
        Ok(())
    }

    async fn finish(&self) -> Result<AudioData, MicrophoneError> {
        let ActiveCapture { file, mut child } = self
            .capture
            .lock()
            .await
            .take()
            .ok_or_else(|| MicrophoneError::CaptureFailed("No recording in progress".to_string()))?;

        if let Err(e) = Self::interrupt(&mut child) {
            let _ = child.start_kill();
            let _ = child.wait().await;
            return Err(e);
        }
        let _ = child.wait().await;

        let data = fs::read(file.path())
            .await
            .map_err(|e| MicrophoneError::CaptureFailed(e.to_string()))?;
        drop(file);

        if data.is_empty() {
            return Err(MicrophoneError::CaptureFailed(
                "Recording file is empty".to_string(),
            ));
        }

        Ok(AudioData::new(data, AudioMimeType::Webm))
    }

    async fn release(&self) {
        let Some(ActiveCapture { file, mut child }) = self.capture.lock().await.take() else {
            return;
        };

        if let Err(e) = child.start_kill() {
            warn!(error = %e, "Failed to stop ffmpeg");
        }
        let _ = child.wait().await;
        drop(file);
        debug!("Microphone released");
    }
}
