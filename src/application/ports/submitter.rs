//! Review submission port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::review::ReviewSubmission;

/// Message shown when the server does not accept a submission
pub const SUBMIT_FAILED_MESSAGE: &str = "Gagal mengirim data, silakan coba lagi.";

/// Submission errors
#[derive(Debug, Clone, Error)]
pub enum SubmitError {
    /// The server answered with a non-success status
    #[error("Gagal mengirim data, silakan coba lagi.")]
    Rejected { status: u16, detail: Option<String> },

    /// The server could not be reached
    #[error("Gagal mengirim data, silakan coba lagi.")]
    Unreachable(String),
}

/// Port for sending a completed review to the server
#[async_trait]
pub trait ReviewSubmitter: Send + Sync {
    /// Submit the review, returning the server's acknowledgment message
    async fn submit(&self, submission: &ReviewSubmission) -> Result<String, SubmitError>;
}
