//! Object store used when no bucket is configured

use async_trait::async_trait;
use tracing::warn;

use crate::application::ports::{ObjectStore, StorageError};
use crate::domain::transcription::AudioData;

const REASON: &str = "GCP_AUDIO_BUCKET is not set";

/// Refuses every write, so archived locators degrade to empty strings
#[derive(Debug, Default)]
pub struct DisabledObjectStore;

#[async_trait]
impl ObjectStore for DisabledObjectStore {
    async fn store(&self, object_name: &str, _audio: &AudioData) -> Result<String, StorageError> {
        warn!(object = object_name, "Audio bucket not configured, skipping archival");
        Err(StorageError::NotConfigured(REASON.to_string()))
    }

    async fn restrict_access(&self, _object_name: &str) -> Result<(), StorageError> {
        Err(StorageError::NotConfigured(REASON.to_string()))
    }
}
