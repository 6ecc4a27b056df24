//! Shared wiring: configuration loading and adapter selection

use std::env;

use tracing::{info, warn};

use crate::application::ports::{ConfigStore, ObjectStore, RowAppender, Transcriber};
use crate::application::{
    NormalizingTranscriber, SubmitReviewUseCase, TranscodeQueue, DEFAULT_QUEUE_CAPACITY,
};
use crate::domain::config::{AppConfig, GoogleConfig};
use crate::infrastructure::{
    DisabledObjectStore, DisabledRowAppender, DisabledTranscriber, FfmpegTranscoder,
    GcsObjectStore, GeminiTranscriber, GoogleSheetsAppender, XdgConfigStore,
};
use crate::server::ReviewPipeline;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load_or_empty().await;
    let env_config = env_config_from(|key| env::var(key).ok());

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}

/// Build the env layer of the configuration. Blank variables are ignored.
pub fn env_config_from(lookup: impl Fn(&str) -> Option<String>) -> AppConfig {
    let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let port = var("PORT").and_then(|p| match p.trim().parse::<u16>() {
        Ok(port) => Some(port),
        Err(_) => {
            warn!(value = %p, "Ignoring invalid PORT");
            None
        }
    });

    let audio_bucket = var("GCP_AUDIO_BUCKET");
    let sheets_id = var("GOOGLE_SHEETS_ID");
    let access_token = var("GOOGLE_ACCESS_TOKEN");
    let google = if audio_bucket.is_some() || sheets_id.is_some() || access_token.is_some() {
        Some(GoogleConfig {
            audio_bucket,
            sheets_id,
            access_token,
        })
    } else {
        None
    };

    AppConfig {
        port,
        gemini_api_key: var("GEMINI_API_KEY"),
        server_url: var("VOCAL_REVIEW_SERVER_URL"),
        google,
        ..Default::default()
    }
}

/// Pick the transcription backend.
///
/// Must be called inside a tokio runtime when transcoding is enabled, since
/// the transcode worker is spawned here.
pub fn build_transcriber(config: &AppConfig) -> Box<dyn Transcriber> {
    let Some(api_key) = config.gemini_api_key() else {
        warn!("GEMINI_API_KEY is not set, transcripts will be empty");
        return Box::new(DisabledTranscriber::new("GEMINI_API_KEY is not set"));
    };

    let gemini = GeminiTranscriber::with_model(api_key, config.gemini_model_or_default());
    if config.transcode_or_default() {
        info!("Audio will be normalized with ffmpeg before transcription");
        let queue = TranscodeQueue::spawn(FfmpegTranscoder::new(), DEFAULT_QUEUE_CAPACITY);
        Box::new(NormalizingTranscriber::new(gemini, queue))
    } else {
        Box::new(gemini)
    }
}

pub fn build_object_store(config: &AppConfig) -> Box<dyn ObjectStore> {
    match config.audio_bucket() {
        Some(bucket) => Box::new(GcsObjectStore::new(
            bucket,
            config.google_access_token().map(str::to_string),
        )),
        None => {
            warn!("GCP_AUDIO_BUCKET is not set, audio will not be archived");
            Box::new(DisabledObjectStore)
        }
    }
}

pub fn build_row_appender(config: &AppConfig) -> Box<dyn RowAppender> {
    match config.sheets_id() {
        Some(sheets_id) => Box::new(GoogleSheetsAppender::new(
            sheets_id,
            config.google_access_token().map(str::to_string),
        )),
        None => {
            warn!("GOOGLE_SHEETS_ID is not set, reviews will not be recorded");
            Box::new(DisabledRowAppender)
        }
    }
}

/// Assemble the submission pipeline from configuration
pub fn build_pipeline(config: &AppConfig) -> ReviewPipeline {
    SubmitReviewUseCase::new(
        build_transcriber(config),
        build_object_store(config),
        build_row_appender(config),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn env_config_reads_known_variables() {
        let config = env_config_from(lookup(&[
            ("PORT", "8080"),
            ("GEMINI_API_KEY", "key"),
            ("GCP_AUDIO_BUCKET", "review-audio"),
            ("GOOGLE_SHEETS_ID", "sheet"),
            ("VOCAL_REVIEW_SERVER_URL", "http://review.local"),
        ]));

        assert_eq!(config.port, Some(8080));
        assert_eq!(config.gemini_api_key(), Some("key"));
        assert_eq!(config.audio_bucket(), Some("review-audio"));
        assert_eq!(config.sheets_id(), Some("sheet"));
        assert!(config.google_access_token().is_none());
        assert_eq!(config.server_url_or_default(), "http://review.local");
    }

    #[test]
    fn env_config_ignores_blank_and_invalid() {
        let config = env_config_from(lookup(&[("PORT", "abc"), ("GEMINI_API_KEY", " ")]));
        assert!(config.port.is_none());
        assert!(config.gemini_api_key.is_none());
        assert!(config.google.is_none());
    }

    #[test]
    fn env_layer_overrides_file_but_not_cli() {
        let file = AppConfig {
            port: Some(4000),
            gemini_api_key: Some("file-key".to_string()),
            ..Default::default()
        };
        let env = env_config_from(lookup(&[("PORT", "5000"), ("GEMINI_API_KEY", "env-key")]));
        let cli = AppConfig {
            port: Some(6000),
            ..Default::default()
        };

        let merged = AppConfig::defaults().merge(file).merge(env).merge(cli);
        assert_eq!(merged.port_or_default(), 6000);
        assert_eq!(merged.gemini_api_key(), Some("env-key"));
    }
}
