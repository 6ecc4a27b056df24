//! Audio transcoding adapters

mod ffmpeg;

pub use ffmpeg::FfmpegTranscoder;
