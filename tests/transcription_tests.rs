//! Live transcription tests
//!
//! These tests call the Gemini API.
//! Run with: cargo test --test transcription_tests -- --ignored

use vocal_review::application::ports::{Transcriber, TranscriptionError};
use vocal_review::domain::transcription::{AudioData, AudioMimeType, TranscriptionPrompt};
use vocal_review::infrastructure::GeminiTranscriber;

/// Get API key from environment, skip test if not set
fn get_api_key() -> Option<String> {
    std::env::var("GEMINI_API_KEY").ok()
}

/// 100 ms of 16 kHz mono silence in a WAV container
fn silent_wav() -> AudioData {
    let samples = 1600u32;
    let data_len = samples * 2;
    let mut wav = Vec::with_capacity(44 + data_len as usize);
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data_len).to_le_bytes());
    wav.extend_from_slice(b"WAVEfmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&1u16.to_le_bytes()); // mono
    wav.extend_from_slice(&16_000u32.to_le_bytes());
    wav.extend_from_slice(&32_000u32.to_le_bytes());
    wav.extend_from_slice(&2u16.to_le_bytes());
    wav.extend_from_slice(&16u16.to_le_bytes());
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_len.to_le_bytes());
    wav.resize(44 + data_len as usize, 0);
    AudioData::new(wav, AudioMimeType::Wav)
}

#[tokio::test]
#[ignore = "requires GEMINI_API_KEY environment variable"]
async fn transcribe_with_valid_api_key() {
    let Some(api_key) = get_api_key() else {
        eprintln!("Skipping test: GEMINI_API_KEY not set");
        return;
    };

    let transcriber = GeminiTranscriber::new(api_key);
    let result = transcriber
        .transcribe(&silent_wav(), &TranscriptionPrompt::indonesian())
        .await;

    // Silence may legitimately come back empty, but never as an auth failure
    if let Err(e) = &result {
        assert!(
            !matches!(e, TranscriptionError::InvalidApiKey),
            "Valid API key should not produce InvalidApiKey error: {:?}",
            e
        );
    }
}

#[tokio::test]
#[ignore = "requires network access"]
async fn transcribe_with_invalid_api_key() {
    let transcriber = GeminiTranscriber::new("invalid-api-key-12345");
    let result = transcriber
        .transcribe(&silent_wav(), &TranscriptionPrompt::indonesian())
        .await;

    let err = result.expect_err("Invalid API key should produce error");
    assert!(
        matches!(
            err,
            TranscriptionError::InvalidApiKey | TranscriptionError::ApiError(_)
        ),
        "Expected authentication error, got: {:?}",
        err
    );
}
