//! Google Cloud Storage adapter (JSON API)

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde_json::json;
use tracing::debug;

use crate::application::ports::{ObjectStore, StorageError};
use crate::domain::transcription::AudioData;

/// Storage JSON API base URL
const API_BASE_URL: &str = "https://storage.googleapis.com";

/// Archives audio into one bucket and returns `gs://` locators
pub struct GcsObjectStore {
    bucket: String,
    access_token: Option<String>,
    base_url: String,
    client: reqwest::Client,
}

impl GcsObjectStore {
    pub fn new(bucket: impl Into<String>, access_token: Option<String>) -> Self {
        Self {
            bucket: bucket.into(),
            access_token,
            base_url: API_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Point the client at another endpoint (used by tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn upload_url(&self) -> String {
        format!("{}/upload/storage/v1/b/{}/o", self.base_url, self.bucket)
    }

    /// Metadata URL of one object; the name is a single percent-encoded segment
    fn object_url(&self, object_name: &str) -> Result<reqwest::Url, StorageError> {
        let invalid = || StorageError::RequestFailed(format!("Invalid base URL: {}", self.base_url));
        let mut url = reqwest::Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(["storage", "v1", "b", self.bucket.as_str(), "o", object_name]);
        Ok(url)
    }

    fn locator(&self, object_name: &str) -> String {
        format!("gs://{}/{}", self.bucket, object_name)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn check(response: reqwest::Response) -> Result<(), StorageError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(StorageError::ApiError(format!("HTTP {}: {}", status, body)))
    }
}

#[async_trait]
impl ObjectStore for GcsObjectStore {
    async fn store(&self, object_name: &str, audio: &AudioData) -> Result<String, StorageError> {
        let request = self
            .client
            .post(self.upload_url())
            .query(&[("uploadType", "media"), ("name", object_name)])
            .header(CONTENT_TYPE, audio.mime_type().as_str())
            .body(audio.data().to_vec());

        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| StorageError::RequestFailed(e.to_string()))?;
        Self::check(response).await?;

        debug!(bucket = %self.bucket, object = object_name, size = %audio.human_readable_size(), "Audio archived");
        Ok(self.locator(object_name))
    }

    async fn restrict_access(&self, object_name: &str) -> Result<(), StorageError> {
        let request = self
            .client
            .patch(self.object_url(object_name)?)
            .query(&[("predefinedAcl", "private")])
            .json(&json!({}));

        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| StorageError::RequestFailed(e.to_string()))?;
        Self::check(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_and_locator() {
        let store = GcsObjectStore::new("review-audio", None).with_base_url("http://localhost:4443/");
        assert_eq!(
            store.upload_url(),
            "http://localhost:4443/upload/storage/v1/b/review-audio/o"
        );
        assert_eq!(
            store.object_url("ayu_mei_saran_sistem.webm").unwrap().as_str(),
            "http://localhost:4443/storage/v1/b/review-audio/o/ayu_mei_saran_sistem.webm"
        );
        assert_eq!(
            store.locator("ayu_mei_saran_sistem.webm"),
            "gs://review-audio/ayu_mei_saran_sistem.webm"
        );
    }

    #[test]
    fn object_url_encodes_reserved_characters() {
        let store = GcsObjectStore::new("review-audio", None);
        assert_eq!(
            store.object_url("team/clip?v=1#x.webm").unwrap().as_str(),
            "https://storage.googleapis.com/storage/v1/b/review-audio/o/team%2Fclip%3Fv=1%23x.webm"
        );
    }

    #[test]
    fn object_url_rejects_unusable_base() {
        let store = GcsObjectStore::new("review-audio", None).with_base_url("not a url");
        assert!(matches!(
            store.object_url("clip.webm"),
            Err(StorageError::RequestFailed(_))
        ));
    }
}
