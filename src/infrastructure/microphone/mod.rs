//! Microphone adapters

mod ffmpeg;

pub use ffmpeg::FfmpegMicrophone;
