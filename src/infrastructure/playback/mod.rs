//! Playback reference adapters

mod temp_file;

pub use temp_file::TempPlaybackStore;
