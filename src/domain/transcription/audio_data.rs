//! Audio data value object

use std::fmt;

/// Audio MIME types accepted from browsers and recorders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AudioMimeType {
    #[default]
    Webm,
    Ogg,
    Wav,
    Mpeg,
    Mp4,
}

impl AudioMimeType {
    /// Get the MIME type string
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Webm => "audio/webm",
            Self::Ogg => "audio/ogg",
            Self::Wav => "audio/wav",
            Self::Mpeg => "audio/mpeg",
            Self::Mp4 => "audio/mp4",
        }
    }

    /// Get the file extension
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Webm => "webm",
            Self::Ogg => "ogg",
            Self::Wav => "wav",
            Self::Mpeg => "mp3",
            Self::Mp4 => "mp4",
        }
    }

    /// Resolve a `Content-Type` header value, ignoring parameters such as
    /// `;codecs=opus`. Unknown types fall back to WebM, which is what
    /// browser recorders produce.
    pub fn from_content_type(content_type: &str) -> Self {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "audio/ogg" | "application/ogg" => Self::Ogg,
            "audio/wav" | "audio/x-wav" | "audio/wave" => Self::Wav,
            "audio/mpeg" | "audio/mp3" => Self::Mpeg,
            "audio/mp4" | "audio/m4a" | "audio/x-m4a" => Self::Mp4,
            _ => Self::Webm,
        }
    }
}

impl fmt::Display for AudioMimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Value object representing one audio payload.
/// Contains raw audio bytes and its MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioData {
    data: Vec<u8>,
    mime_type: AudioMimeType,
}

impl AudioData {
    /// Create AudioData from raw bytes
    pub fn new(data: Vec<u8>, mime_type: AudioMimeType) -> Self {
        Self { data, mime_type }
    }

    /// Get the raw audio data
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume and return the raw audio data
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Get the MIME type
    pub fn mime_type(&self) -> AudioMimeType {
        self.mime_type
    }

    /// Get the size in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get human-readable size
    pub fn human_readable_size(&self) -> String {
        let bytes = self.size_bytes();
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }

    /// Encode the audio data as base64
    pub fn to_base64(&self) -> String {
        use base64::Engine;
        base64::engine::general_purpose::STANDARD.encode(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_type_as_str() {
        assert_eq!(AudioMimeType::Webm.as_str(), "audio/webm");
        assert_eq!(AudioMimeType::Wav.as_str(), "audio/wav");
    }

    #[test]
    fn content_type_with_codec_parameter() {
        assert_eq!(
            AudioMimeType::from_content_type("audio/webm;codecs=opus"),
            AudioMimeType::Webm
        );
        assert_eq!(
            AudioMimeType::from_content_type("Audio/OGG; codecs=opus"),
            AudioMimeType::Ogg
        );
        assert_eq!(AudioMimeType::from_content_type("audio/x-wav"), AudioMimeType::Wav);
    }

    #[test]
    fn unknown_content_type_falls_back_to_webm() {
        assert_eq!(
            AudioMimeType::from_content_type("application/octet-stream"),
            AudioMimeType::Webm
        );
        assert_eq!(AudioMimeType::from_content_type(""), AudioMimeType::Webm);
    }

    #[test]
    fn human_readable_size_kb() {
        let data = AudioData::new(vec![0u8; 2048], AudioMimeType::Webm);
        assert_eq!(data.human_readable_size(), "2.0 KB");
    }

    #[test]
    fn empty_payload() {
        let data = AudioData::new(Vec::new(), AudioMimeType::Webm);
        assert!(data.is_empty());
        assert_eq!(data.human_readable_size(), "0 B");
    }

    #[test]
    fn to_base64() {
        let data = AudioData::new(vec![1, 2, 3, 4], AudioMimeType::Webm);
        assert_eq!(data.to_base64(), "AQIDBA==");
    }
}
