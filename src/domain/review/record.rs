//! Processed review record

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::nomination::Nominations;
use super::score::Score;

/// Result of one processed submission, ready to be appended as a row.
///
/// Transcripts and locators are empty strings when the corresponding
/// collaborator failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRecord {
    pub subject: String,
    pub period: String,
    pub score: Score,
    pub nominations: Nominations,
    pub directors_transcript: String,
    pub system_transcript: String,
    pub directors_locator: String,
    pub system_locator: String,
    pub submitted_at: DateTime<Utc>,
}

impl ReviewRecord {
    /// Sheet columns A through J
    pub fn to_row(&self) -> Vec<Value> {
        vec![
            Value::from(self.subject.as_str()),
            Value::from(self.period.as_str()),
            Value::from(self.score.value()),
            Value::from(self.nominations.best_performance.as_str()),
            Value::from(self.nominations.most_discipline.as_str()),
            Value::from(self.nominations.most_improved.as_str()),
            Value::from(self.directors_transcript.as_str()),
            Value::from(self.system_transcript.as_str()),
            Value::from(self.directors_locator.as_str()),
            Value::from(self.system_locator.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn row_has_ten_columns_in_sheet_order() {
        let record = ReviewRecord {
            subject: "Dimas".to_string(),
            period: "Oktober".to_string(),
            score: Score::new(8).unwrap(),
            nominations: Nominations {
                best_performance: "Ayu".to_string(),
                most_discipline: "Budi".to_string(),
                most_improved: "Citra".to_string(),
            },
            directors_transcript: "lebih sering rapat".to_string(),
            system_transcript: String::new(),
            directors_locator: "gs://b/dimas_oktober_saran_direksi.webm".to_string(),
            system_locator: String::new(),
            submitted_at: Utc::now(),
        };

        assert_eq!(
            record.to_row(),
            vec![
                json!("Dimas"),
                json!("Oktober"),
                json!(8),
                json!("Ayu"),
                json!("Budi"),
                json!("Citra"),
                json!("lebih sering rapat"),
                json!(""),
                json!("gs://b/dimas_oktober_saran_direksi.webm"),
                json!(""),
            ]
        );
    }
}
