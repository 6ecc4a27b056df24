//! Request handlers

use axum::extract::multipart::Field;
use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use tracing::debug;

use crate::domain::review::{RecordingSlot, ReviewForm, UploadedAudio};
use crate::domain::transcription::{AudioData, AudioMimeType};

use super::error::ApiError;
use super::routes::AppState;

/// Largest accepted audio part (20 MiB)
pub const MAX_AUDIO_BYTES: usize = 20 * 1024 * 1024;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `POST /api/reviews`
pub async fn submit_review(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<MessageResponse>, ApiError> {
    let form = read_review_form(multipart).await?;
    let output = state.submit_review.execute(form).await?;
    Ok(Json(MessageResponse {
        message: output.message,
    }))
}

/// Collect text fields and the two audio parts. Unknown parts are skipped.
async fn read_review_form(mut multipart: Multipart) -> Result<ReviewForm, ApiError> {
    let mut form = ReviewForm::default();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match RecordingSlot::from_form_field(&name) {
            Some(slot) => {
                let upload = read_audio(field).await?;
                debug!(field = %name, size = %upload.audio.human_readable_size(), "Received audio part");
                form.set_audio(slot, upload);
            }
            None => {
                let value = field.text().await?;
                form.set_text_field(&name, value);
            }
        }
    }

    Ok(form)
}

async fn read_audio(mut field: Field<'_>) -> Result<UploadedAudio, ApiError> {
    let mime_type = field
        .content_type()
        .map(AudioMimeType::from_content_type)
        .unwrap_or_default();
    let file_name = field.file_name().map(str::to_string);

    let mut data = Vec::new();
    while let Some(chunk) = field.chunk().await? {
        if data.len() + chunk.len() > MAX_AUDIO_BYTES {
            return Err(ApiError::PayloadTooLarge);
        }
        data.extend_from_slice(&chunk);
    }

    Ok(UploadedAudio::new(AudioData::new(data, mime_type), file_name))
}
