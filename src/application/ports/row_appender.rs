//! Tabular store port interface

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Row append errors
#[derive(Debug, Clone, Error)]
pub enum AppendError {
    #[error("Append request failed: {0}")]
    RequestFailed(String),

    #[error("Append rejected: {0}")]
    Rejected(String),
}

/// Port for appending review rows to an external table
#[async_trait]
pub trait RowAppender: Send + Sync {
    /// Append one row. The call either fully succeeds or fails; it is not
    /// retried.
    async fn append_row(&self, values: &[Value]) -> Result<(), AppendError>;
}

/// Blanket implementation for boxed appender types
#[async_trait]
impl RowAppender for Box<dyn RowAppender> {
    async fn append_row(&self, values: &[Value]) -> Result<(), AppendError> {
        self.as_ref().append_row(values).await
    }
}
