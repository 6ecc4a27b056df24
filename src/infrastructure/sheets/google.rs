//! Google Sheets row appender

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::application::ports::{AppendError, RowAppender};

/// Sheets API base URL
const API_BASE_URL: &str = "https://sheets.googleapis.com";

/// Columns written for every review
const RANGE: &str = "A:J";

#[derive(Debug, Serialize)]
struct ValueRange<'a> {
    values: [&'a [Value]; 1],
}

/// Appends rows with `spreadsheets.values.append`, raw input
pub struct GoogleSheetsAppender {
    spreadsheet_id: String,
    access_token: Option<String>,
    base_url: String,
    client: reqwest::Client,
}

impl GoogleSheetsAppender {
    pub fn new(spreadsheet_id: impl Into<String>, access_token: Option<String>) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.into(),
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

    fn append_url(&self) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}:append",
            self.base_url, self.spreadsheet_id, RANGE
        )
    }
}

#[async_trait]
impl RowAppender for GoogleSheetsAppender {
    async fn append_row(&self, values: &[Value]) -> Result<(), AppendError> {
        let mut request = self
            .client
            .post(self.append_url())
            .query(&[("valueInputOption", "RAW")])
            .json(&ValueRange { values: [values] });

        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppendError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppendError::Rejected(format!("HTTP {}: {}", status, body)));
        }

        debug!(spreadsheet = %self.spreadsheet_id, "Row appended");
        Ok(())
    }
}

/// Appender used when no spreadsheet is configured.
/// Skipping the append counts as success.
#[derive(Debug, Default)]
pub struct DisabledRowAppender;

#[async_trait]
impl RowAppender for DisabledRowAppender {
    async fn append_row(&self, _values: &[Value]) -> Result<(), AppendError> {
        warn!("GOOGLE_SHEETS_ID is not set, review row not sent to Google Sheets");
        Ok(())
    }
}
