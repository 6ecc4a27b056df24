//! HTTP API integration tests
//!
//! Drive the axum router in-process with mock collaborators.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use vocal_review::application::ports::{
    AppendError, ObjectStore, RowAppender, StorageError, Transcriber, TranscriptionError,
};
use vocal_review::application::SubmitReviewUseCase;
use vocal_review::domain::transcription::{AudioData, TranscriptionPrompt};
use vocal_review::server::{build_router, AppState, MAX_AUDIO_BYTES};

const BOUNDARY: &str = "vocal-review-test-boundary";

#[derive(Default)]
struct Calls {
    transcribe: AtomicUsize,
    store: AtomicUsize,
    rows: Mutex<Vec<Vec<Value>>>,
}

struct MockTranscriber {
    calls: Arc<Calls>,
    fail: bool,
}

#[async_trait]
impl Transcriber for MockTranscriber {
    async fn transcribe(
        &self,
        audio: &AudioData,
        _prompt: &TranscriptionPrompt,
    ) -> Result<String, TranscriptionError> {
        self.calls.transcribe.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(TranscriptionError::ApiError("quota".to_string()));
        }
        Ok(format!("teks {}", String::from_utf8_lossy(audio.data())))
    }
}

struct MockStore {
    calls: Arc<Calls>,
}

#[async_trait]
impl ObjectStore for MockStore {
    async fn store(&self, object_name: &str, _audio: &AudioData) -> Result<String, StorageError> {
        self.calls.store.fetch_add(1, Ordering::SeqCst);
        Ok(format!("gs://review-audio/{}", object_name))
    }

    async fn restrict_access(&self, _object_name: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

struct MockAppender {
    calls: Arc<Calls>,
    fail: bool,
}

#[async_trait]
impl RowAppender for MockAppender {
    async fn append_row(&self, values: &[Value]) -> Result<(), AppendError> {
        if self.fail {
            return Err(AppendError::Rejected("sheet is read-only".to_string()));
        }
        self.calls
            .rows
            .lock()
            .unwrap()
            .push(values.to_vec());
        Ok(())
    }
}

struct Harness {
    router: Router,
    calls: Arc<Calls>,
    _static_dir: tempfile::TempDir,
}

fn harness(transcriber_fails: bool, append_fails: bool) -> Harness {
    let calls = Arc::new(Calls::default());
    let static_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        static_dir.path().join("index.html"),
        "<html><body>Vocal Review</body></html>",
    )
    .unwrap();
    std::fs::write(static_dir.path().join("app.js"), "console.log('wizard');").unwrap();

    let pipeline = SubmitReviewUseCase::new(
        Box::new(MockTranscriber {
            calls: Arc::clone(&calls),
            fail: transcriber_fails,
        }) as Box<dyn Transcriber>,
        Box::new(MockStore {
            calls: Arc::clone(&calls),
        }) as Box<dyn ObjectStore>,
        Box::new(MockAppender {
            calls: Arc::clone(&calls),
            fail: append_fails,
        }) as Box<dyn RowAppender>,
    );

    let router = build_router(AppState::new(pipeline, static_dir.path()));
    Harness {
        router,
        calls,
        _static_dir: static_dir,
    }
}

/// Hand-built multipart body
struct MultipartBody {
    bytes: Vec<u8>,
}

impl MultipartBody {
    fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    fn text(mut self, name: &str, value: &str) -> Self {
        self.bytes.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    fn file(mut self, name: &str, file_name: &str, content_type: &str, data: &[u8]) -> Self {
        self.bytes.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        self.bytes.extend_from_slice(data);
        self.bytes.extend_from_slice(b"\r\n");
        self
    }

    fn finish(mut self) -> Vec<u8> {
        self.bytes
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        self.bytes
    }
}

fn complete_review() -> MultipartBody {
    MultipartBody::new()
        .text("name", "Dimas")
        .text("month", "Oktober")
        .text("score", "8")
        .text("bestPerformance", "Ayu")
        .text("mostDiscipline", "Budi")
        .text("mostImproved", "Citra")
        .file("audioDirectors", "directors.webm", "audio/webm", b"direksi")
        .file("audioSystem", "system.webm", "audio/webm", b"sistem")
}

fn post_review(body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/reviews")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn complete_review_is_recorded() {
    let h = harness(false, false);

    let response = h
        .router
        .oneshot(post_review(complete_review().finish()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({ "message": "Review berhasil diproses." })
    );

    let rows = h.calls.rows.lock().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0],
        vec![
            json!("Dimas"),
            json!("Oktober"),
            json!(8),
            json!("Ayu"),
            json!("Budi"),
            json!("Citra"),
            json!("teks direksi"),
            json!("teks sistem"),
            json!("gs://review-audio/dimas_oktober_saran_direksi.webm"),
            json!("gs://review-audio/dimas_oktober_saran_sistem.webm"),
        ]
    );
}

#[tokio::test]
async fn blank_nomination_is_rejected_without_calls() {
    let h = harness(false, false);
    let body = MultipartBody::new()
        .text("name", "Dimas")
        .text("month", "Oktober")
        .text("score", "8")
        .text("bestPerformance", "Ayu")
        .text("mostDiscipline", "")
        .text("mostImproved", "Citra")
        .file("audioDirectors", "directors.webm", "audio/webm", b"direksi")
        .file("audioSystem", "system.webm", "audio/webm", b"sistem")
        .finish();

    let response = h.router.oneshot(post_review(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await,
        json!({ "error": "Seluruh nominasi wajib diisi." })
    );
    assert_eq!(h.calls.transcribe.load(Ordering::SeqCst), 0);
    assert_eq!(h.calls.store.load(Ordering::SeqCst), 0);
    assert!(h.calls.rows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn missing_audio_is_rejected() {
    let h = harness(false, false);
    let body = MultipartBody::new()
        .text("name", "Dimas")
        .text("month", "Oktober")
        .text("score", "8")
        .text("bestPerformance", "Ayu")
        .text("mostDiscipline", "Budi")
        .text("mostImproved", "Citra")
        .file("audioDirectors", "directors.webm", "audio/webm", b"direksi")
        .finish();

    let response = h.router.oneshot(post_review(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await,
        json!({ "error": "Rekaman audio wajib diunggah." })
    );
}

#[tokio::test]
async fn failing_transcriber_still_records_empty_transcripts() {
    let h = harness(true, false);

    let response = h
        .router
        .oneshot(post_review(complete_review().finish()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(h.calls.transcribe.load(Ordering::SeqCst), 2);

    let rows = h.calls.rows.lock().unwrap();
    assert_eq!(rows[0][6], json!(""));
    assert_eq!(rows[0][7], json!(""));
    assert_eq!(
        rows[0][8],
        json!("gs://review-audio/dimas_oktober_saran_direksi.webm")
    );
}

#[tokio::test]
async fn append_failure_is_server_error() {
    let h = harness(false, true);

    let response = h
        .router
        .oneshot(post_review(complete_review().finish()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(response).await,
        json!({ "error": "Terjadi kesalahan pada server." })
    );
}

#[tokio::test]
async fn oversized_audio_is_payload_too_large() {
    let h = harness(false, false);
    let huge = vec![0u8; MAX_AUDIO_BYTES + 1];
    let body = MultipartBody::new()
        .text("name", "Dimas")
        .file("audioDirectors", "directors.webm", "audio/webm", &huge)
        .finish();

    let response = h.router.oneshot(post_review(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("20 MB"));
    assert_eq!(h.calls.transcribe.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn static_files_are_served() {
    let h = harness(false, false);

    let response = h
        .router
        .oneshot(Request::get("/app.js").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"console.log('wizard');");
}

#[tokio::test]
async fn unknown_paths_fall_back_to_index() {
    let h = harness(false, false);

    let response = h
        .router
        .oneshot(
            Request::get("/review?name=Dimas&month=Oktober")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("Vocal Review"));
}

#[tokio::test]
async fn bundled_public_dir_points_at_the_wizard() {
    let calls = Arc::new(Calls::default());
    let pipeline = SubmitReviewUseCase::new(
        Box::new(MockTranscriber {
            calls: Arc::clone(&calls),
            fail: false,
        }) as Box<dyn Transcriber>,
        Box::new(MockStore {
            calls: Arc::clone(&calls),
        }) as Box<dyn ObjectStore>,
        Box::new(MockAppender { calls, fail: false }) as Box<dyn RowAppender>,
    );
    let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
    let router = build_router(AppState::new(pipeline, public));

    let response = router
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("vocal-review wizard"));
}
