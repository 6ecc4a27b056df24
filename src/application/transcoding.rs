//! Serialized audio normalization ahead of transcription

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::debug;

use crate::domain::transcription::{AudioData, TranscriptionPrompt};

use super::ports::{TranscodeError, Transcoder, Transcriber, TranscriptionError};

/// Pending jobs accepted before senders start waiting
pub const DEFAULT_QUEUE_CAPACITY: usize = 32;

struct TranscodeJob {
    audio: AudioData,
    reply: oneshot::Sender<Result<AudioData, TranscodeError>>,
}

/// Handle to a single transcoding worker.
///
/// Every clone feeds the same FIFO, so at most one transcode runs at a time
/// no matter how many requests are in flight.
#[derive(Clone)]
pub struct TranscodeQueue {
    jobs: mpsc::Sender<TranscodeJob>,
}

impl TranscodeQueue {
    /// Spawn the worker on the current tokio runtime
    pub fn spawn<C>(transcoder: C, capacity: usize) -> Self
    where
        C: Transcoder + 'static,
    {
        let (jobs, mut rx) = mpsc::channel::<TranscodeJob>(capacity.max(1));

        tokio::spawn(async move {
            while let Some(job) = rx.recv().await {
                let result = transcoder.transcode(job.audio).await;
                // The requester may have given up waiting
                let _ = job.reply.send(result);
            }
            debug!("Transcode queue closed");
        });

        Self { jobs }
    }
}

#[async_trait]
impl Transcoder for TranscodeQueue {
    async fn transcode(&self, audio: AudioData) -> Result<AudioData, TranscodeError> {
        let (reply, response) = oneshot::channel();
        self.jobs
            .send(TranscodeJob { audio, reply })
            .await
            .map_err(|_| TranscodeError::QueueClosed)?;
        response.await.map_err(|_| TranscodeError::QueueClosed)?
    }
}

/// Transcriber decorator that normalizes audio before handing it on
pub struct NormalizingTranscriber<T, C>
where
    T: Transcriber,
    C: Transcoder,
{
    inner: T,
    transcoder: C,
}

impl<T, C> NormalizingTranscriber<T, C>
where
    T: Transcriber,
    C: Transcoder,
{
    pub fn new(inner: T, transcoder: C) -> Self {
        Self { inner, transcoder }
    }
}

#[async_trait]
impl<T, C> Transcriber for NormalizingTranscriber<T, C>
where
    T: Transcriber,
    C: Transcoder,
{
    async fn transcribe(
        &self,
        audio: &AudioData,
        prompt: &TranscriptionPrompt,
    ) -> Result<String, TranscriptionError> {
        let normalized = self
            .transcoder
            .transcode(audio.clone())
            .await
            .map_err(|e| TranscriptionError::Normalization(e.to_string()))?;
        debug!(
            from = audio.mime_type().as_str(),
            to = normalized.mime_type().as_str(),
            size = %normalized.human_readable_size(),
            "Audio normalized"
        );
        self.inner.transcribe(&normalized, prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transcription::AudioMimeType;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[derive(Default)]
    struct Gauge {
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
        completed: AtomicUsize,
    }

    struct SlowTranscoder(Arc<Gauge>);

    #[async_trait]
    impl Transcoder for SlowTranscoder {
        async fn transcode(&self, audio: AudioData) -> Result<AudioData, TranscodeError> {
            let now = self.0.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.0.max_in_flight.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(10)).await;
            self.0.in_flight.fetch_sub(1, Ordering::SeqCst);
            self.0.completed.fetch_add(1, Ordering::SeqCst);
            Ok(AudioData::new(audio.into_data(), AudioMimeType::Wav))
        }
    }

    struct FailingTranscoder;

    #[async_trait]
    impl Transcoder for FailingTranscoder {
        async fn transcode(&self, _audio: AudioData) -> Result<AudioData, TranscodeError> {
            Err(TranscodeError::Failed("invalid data".to_string()))
        }
    }

    struct EchoTranscriber;

    #[async_trait]
    impl Transcriber for EchoTranscriber {
        async fn transcribe(
            &self,
            audio: &AudioData,
            _prompt: &TranscriptionPrompt,
        ) -> Result<String, TranscriptionError> {
            Ok(format!("{} bytes of {}", audio.size_bytes(), audio.mime_type().as_str()))
        }
    }

    fn webm(len: usize) -> AudioData {
        AudioData::new(vec![1; len], AudioMimeType::Webm)
    }

    #[tokio::test]
    async fn queue_runs_one_job_at_a_time() {
        let gauge = Arc::new(Gauge::default());
        let queue = TranscodeQueue::spawn(SlowTranscoder(Arc::clone(&gauge)), 4);

        let handles: Vec<_> = (1..=6)
            .map(|n| {
                let queue = queue.clone();
                tokio::spawn(async move { queue.transcode(webm(n)).await })
            })
            .collect();

        for handle in handles {
            let out = handle.await.unwrap().unwrap();
            assert_eq!(out.mime_type(), AudioMimeType::Wav);
        }

        assert_eq!(gauge.completed.load(Ordering::SeqCst), 6);
        assert_eq!(gauge.max_in_flight.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn queue_returns_each_callers_result() {
        let queue = TranscodeQueue::spawn(SlowTranscoder(Arc::new(Gauge::default())), 1);
        let (a, b) = tokio::join!(queue.transcode(webm(3)), queue.transcode(webm(7)));
        assert_eq!(a.unwrap().size_bytes(), 3);
        assert_eq!(b.unwrap().size_bytes(), 7);
    }

    #[tokio::test]
    async fn normalizing_transcriber_passes_converted_audio() {
        let queue = TranscodeQueue::spawn(SlowTranscoder(Arc::new(Gauge::default())), 1);
        let transcriber = NormalizingTranscriber::new(EchoTranscriber, queue);

        let text = transcriber
            .transcribe(&webm(5), &TranscriptionPrompt::indonesian())
            .await
            .unwrap();
        assert_eq!(text, "5 bytes of audio/wav");
    }

    #[tokio::test]
    async fn transcode_failure_maps_to_normalization_error() {
        let transcriber = NormalizingTranscriber::new(EchoTranscriber, FailingTranscoder);

        let err = transcriber
            .transcribe(&webm(5), &TranscriptionPrompt::indonesian())
            .await
            .unwrap_err();
        assert!(matches!(err, TranscriptionError::Normalization(_)));
    }
}
