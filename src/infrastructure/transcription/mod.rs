//! Transcription adapters

mod disabled;
mod gemini;

pub use disabled::DisabledTranscriber;
pub use gemini::GeminiTranscriber;
