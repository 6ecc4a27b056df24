//! FFmpeg transcoder adapter

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use crate::application::ports::{TranscodeError, Transcoder};
use crate::domain::transcription::{AudioData, AudioMimeType};

/// Converts any ffmpeg-readable input into 16 kHz mono PCM WAV
#[derive(Debug, Clone, Default)]
pub struct FfmpegTranscoder;

impl FfmpegTranscoder {
    pub fn new() -> Self {
        Self
    }

    fn build_ffmpeg_args() -> Vec<&'static str> {
        vec![
            "-hide_banner",
            "-loglevel",
            "error",
            "-i",
            "pipe:0",
            "-ar",
            "16000", // 16kHz sample rate
            "-ac",
            "1", // Mono
            "-c:a",
            "pcm_s16le",
            "-f",
            "wav",
            "pipe:1",
        ]
    }
}

#[async_trait]
impl Transcoder for FfmpegTranscoder {
    async fn transcode(&self, audio: AudioData) -> Result<AudioData, TranscodeError> {
        let mut child = Command::new("ffmpeg")
            .args(Self::build_ffmpeg_args())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    TranscodeError::FfmpegNotFound
                } else {
                    TranscodeError::Failed(e.to_string())
                }
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| TranscodeError::Failed("ffmpeg stdin unavailable".to_string()))?;

        // Feed input while ffmpeg writes to stdout, so neither pipe fills up
        let input = audio.into_data();
        let writer = tokio::spawn(async move {
            let result = stdin.write_all(&input).await;
            drop(stdin);
            result
        });

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| TranscodeError::Failed(e.to_string()))?;

        match writer.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => debug!(error = %e, "ffmpeg closed stdin early"),
            Err(e) => return Err(TranscodeError::Failed(e.to_string())),
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TranscodeError::Failed(format!(
                "FFmpeg exited with error: {}",
                stderr.lines().last().unwrap_or("unknown error")
            )));
        }

        if output.stdout.is_empty() {
            return Err(TranscodeError::Failed("FFmpeg produced no output".to_string()));
        }

        Ok(AudioData::new(output.stdout, AudioMimeType::Wav))
    }
}
