//! Transcription prompt value object

/// Instruction sent alongside every review recording
const VERBATIM_INSTRUCTION: &str =
    "Please transcribe it accurately and verbatim.";

/// Language hint for review recordings (BCP 47)
pub const INDONESIAN: &str = "id";

/// Value object carrying the language hint and the instruction text
/// handed to a transcription backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionPrompt {
    language: String,
    content: String,
}

impl TranscriptionPrompt {
    /// Build a verbatim-transcription prompt for the given language code
    pub fn verbatim(language: &str) -> Self {
        let content = format!(
            "The following audio is in {}. {}",
            language_name(language),
            VERBATIM_INSTRUCTION
        );
        Self {
            language: language.to_string(),
            content,
        }
    }

    /// Prompt used for review recordings
    pub fn indonesian() -> Self {
        Self::verbatim(INDONESIAN)
    }

    /// Get the language hint
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Get the prompt content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Default for TranscriptionPrompt {
    fn default() -> Self {
        Self::indonesian()
    }
}

fn language_name(code: &str) -> &str {
    match code {
        "id" => "Indonesian",
        "en" => "English",
        "ms" => "Malay",
        other => other,
    }
}
