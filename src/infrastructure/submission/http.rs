//! HTTP review submitter

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::ports::{ReviewSubmitter, SubmitError};
use crate::domain::review::{NominationCategory, RecordingSlot, ReviewSubmission};

/// Path of the review endpoint
const REVIEWS_PATH: &str = "/api/reviews";

#[derive(Debug, Deserialize)]
struct ReviewResponse {
    message: Option<String>,
    error: Option<String>,
}

/// Posts a review as `multipart/form-data` to a vocal-review server
pub struct HttpReviewSubmitter {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpReviewSubmitter {
    /// `server_url` is the server root, e.g. `http://localhost:3000`
    pub fn new(server_url: &str) -> Self {
        Self {
            endpoint: format!("{}{}", server_url.trim_end_matches('/'), REVIEWS_PATH),
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_form(submission: &ReviewSubmission) -> Result<Form, SubmitError> {
        let mut form = Form::new()
            .text("name", submission.subject.clone())
            .text("month", submission.period.clone())
            .text("score", submission.score.to_string());

        for category in NominationCategory::ALL {
            form = form.text(category.key(), submission.nominations.get(category).to_string());
        }

        for slot in RecordingSlot::ALL {
            let audio = submission.audio(slot);
            let part = Part::bytes(audio.data().to_vec())
                .file_name(submission.upload_file_name(slot))
                .mime_str(audio.mime_type().as_str())
                .map_err(|e| SubmitError::Unreachable(e.to_string()))?;
            form = form.part(slot.form_field(), part);
        }

        Ok(form)
    }
}

#[async_trait]
impl ReviewSubmitter for HttpReviewSubmitter {
    async fn submit(&self, submission: &ReviewSubmission) -> Result<String, SubmitError> {
        let form = Self::build_form(submission)?;

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                warn!(endpoint = %self.endpoint, error = %e, "Review server unreachable");
                SubmitError::Unreachable(e.to_string())
            })?;

        let status = response.status();
        let body: Option<ReviewResponse> = response.json().await.ok();

        if !status.is_success() {
            let detail = body.and_then(|b| b.error);
            warn!(status = status.as_u16(), detail = ?detail, "Review rejected");
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                detail,
            });
        }

        let message = body.and_then(|b| b.message).unwrap_or_default();
        debug!(%message, "Review accepted");
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_path() {
        assert_eq!(
            HttpReviewSubmitter::new("http://localhost:3000/").endpoint(),
            "http://localhost:3000/api/reviews"
        );
        assert_eq!(
            HttpReviewSubmitter::new("https://review.example.com").endpoint(),
            "https://review.example.com/api/reviews"
        );
    }
}
