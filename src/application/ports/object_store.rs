//! Object storage port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::transcription::AudioData;

/// Object storage errors
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("Object storage is not configured: {0}")]
    NotConfigured(String),

    #[error("Storage request failed: {0}")]
    RequestFailed(String),

    #[error("Storage API error: {0}")]
    ApiError(String),
}

/// Port for durable audio archival
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Persist the payload under `object_name`.
    ///
    /// # Returns
    /// A locator for the stored object (e.g. `gs://bucket/name`)
    async fn store(&self, object_name: &str, audio: &AudioData) -> Result<String, StorageError>;

    /// Mark a stored object as non-public
    async fn restrict_access(&self, object_name: &str) -> Result<(), StorageError>;
}

/// Blanket implementation for boxed object store types
#[async_trait]
impl ObjectStore for Box<dyn ObjectStore> {
    async fn store(&self, object_name: &str, audio: &AudioData) -> Result<String, StorageError> {
        self.as_ref().store(object_name, audio).await
    }

    async fn restrict_access(&self, object_name: &str) -> Result<(), StorageError> {
        self.as_ref().restrict_access(object_name).await
    }
}
