//! End-to-end tests of the HTTP surface over stubbed components.

use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use axum_test::multipart::{MultipartForm, Part};
use axum::http::StatusCode;
use serde_json::{Value, json};

use api::AppState;
use llm_client::{ChatMessage, CompletionProvider, LlmError};
use pdf_store::PdfStore;
use qa_service::QuestionService;

struct CannedProvider(&'static str);

#[async_trait]
impl CompletionProvider for CannedProvider {
    async fn complete(&self, _messages: &[ChatMessage]) -> Result<String, LlmError> {
        Ok(self.0.to_string())
    }

    fn model(&self) -> &str {
        "gpt-3.5-turbo"
    }
}

struct BrokenProvider(&'static str);

#[async_trait]
impl CompletionProvider for BrokenProvider {
    async fn complete(&self, _messages: &[ChatMessage]) -> Result<String, LlmError> {
        Err(LlmError::Decode(self.0.to_string()))
    }

    fn model(&self) -> &str {
        "gpt-3.5-turbo"
    }
}

fn server_with(provider: Arc<dyn CompletionProvider>) -> (tempfile::TempDir, TestServer) {
    let dir = tempfile::tempdir().unwrap();
    let state = AppState::new(
        QuestionService::new(provider),
        PdfStore::new(dir.path()).unwrap(),
    );
    let server = TestServer::new(api::router(Arc::new(state))).unwrap();
    (dir, server)
}

#[tokio::test]
async fn liveness_endpoints_respond() {
    let (_dir, server) = server_with(Arc::new(CannedProvider("X")));

    let root = server.get("/").await;
    root.assert_status_ok();
    assert_eq!(
        root.json::<Value>()["message"],
        "Welcome to Simple AI Question API"
    );

    let health = server.get("/health").await;
    health.assert_status_ok();
    assert_eq!(health.json::<Value>()["status"], "healthy");
}

#[tokio::test]
async fn ask_returns_answer_and_logs_it() {
    let (_dir, server) = server_with(Arc::new(CannedProvider("X")));

    let resp = server
        .post("/api/v1/ask")
        .json(&json!({"question": "What is FastAPI?", "context": "Python web framework"}))
        .await;
    resp.assert_status_ok();

    let body = resp.json::<Value>();
    assert_eq!(body["question"], "What is FastAPI?");
    assert_eq!(body["answer"], "X");
    assert_eq!(body["model"], "gpt-3.5-turbo");

    let listed = server.get("/api/v1/questions").await;
    listed.assert_status_ok();
    let records = listed.json::<Value>();
    assert_eq!(records.as_array().unwrap().len(), 1);
    assert_eq!(records[0]["question"], "What is FastAPI?");
    assert_eq!(records[0]["answer"], "X");
    assert_eq!(records[0]["context"], "Python web framework");
}

#[tokio::test]
async fn questions_are_listed_in_call_order() {
    let (_dir, server) = server_with(Arc::new(CannedProvider("X")));

    for n in 0..3 {
        server
            .post("/api/v1/ask")
            .json(&json!({"question": format!("q{n}")}))
            .await
            .assert_status_ok();
    }

    let records = server.get("/api/v1/questions").await.json::<Value>();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["question"], "q0");
    assert_eq!(records[2]["question"], "q2");
    assert_eq!(records[0]["context"], Value::Null);
}

#[tokio::test]
async fn whitespace_question_is_a_400() {
    let (_dir, server) = server_with(Arc::new(CannedProvider("X")));

    let resp = server
        .post("/api/v1/ask")
        .json(&json!({"question": "   "}))
        .await;
    resp.assert_status_bad_request();
    assert_eq!(resp.json::<Value>()["message"], "Question cannot be empty");

    // Nothing got logged.
    let records = server.get("/api/v1/questions").await.json::<Value>();
    assert!(records.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn provider_failure_is_a_500_with_upstream_text() {
    let (_dir, server) = server_with(Arc::new(BrokenProvider("rate limit")));

    let resp = server
        .post("/api/v1/ask")
        .json(&json!({"question": "q"}))
        .await;
    resp.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let message = resp.json::<Value>()["message"].as_str().unwrap().to_string();
    assert!(message.starts_with("Failed to generate AI response: "));
    assert!(message.contains("rate limit"));
}

#[tokio::test]
async fn pdf_upload_round_trips() {
    let (dir, server) = server_with(Arc::new(CannedProvider("X")));

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(b"%PDF-1.4 test".as_slice())
            .file_name("test.pdf")
            .mime_type("application/pdf"),
    );
    let resp = server.post("/api/v1/upload/pdf").multipart(form).await;
    resp.assert_status_ok();

    let body = resp.json::<Value>();
    assert_eq!(body["filename"], "test.pdf");
    assert_eq!(body["message"], "PDF uploaded successfully");
    let file_id = body["file_id"].as_str().unwrap();
    assert!(!file_id.is_empty());

    let stored = dir.path().join(format!("{file_id}_test.pdf"));
    assert_eq!(std::fs::read(stored).unwrap(), b"%PDF-1.4 test");
}

#[tokio::test]
async fn uppercase_extension_is_accepted() {
    let (_dir, server) = server_with(Arc::new(CannedProvider("X")));

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(b"x".as_slice()).file_name("TEST.PDF"),
    );
    let resp = server.post("/api/v1/upload/pdf").multipart(form).await;
    resp.assert_status_ok();
    assert_eq!(resp.json::<Value>()["filename"], "TEST.PDF");
}

#[tokio::test]
async fn non_pdf_extension_is_a_400() {
    let (_dir, server) = server_with(Arc::new(CannedProvider("X")));

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(b"hello".as_slice())
            .file_name("notes.txt")
            .mime_type("text/plain"),
    );
    let resp = server.post("/api/v1/upload/pdf").multipart(form).await;
    resp.assert_status_bad_request();
    assert_eq!(resp.json::<Value>()["message"], "Only PDF files are allowed");
}

#[tokio::test]
async fn file_part_without_filename_is_a_422() {
    let (_dir, server) = server_with(Arc::new(CannedProvider("X")));

    let form = MultipartForm::new().add_part("file", Part::bytes(b"x".as_slice()));
    let resp = server.post("/api/v1/upload/pdf").multipart(form).await;
    resp.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn form_without_file_field_is_a_422() {
    let (_dir, server) = server_with(Arc::new(CannedProvider("X")));

    let form = MultipartForm::new().add_text("purpose", "upload");
    let resp = server.post("/api/v1/upload/pdf").multipart(form).await;
    resp.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn identical_uploads_get_distinct_ids() {
    let (dir, server) = server_with(Arc::new(CannedProvider("X")));

    let mut ids = Vec::new();
    for _ in 0..2 {
        let form = MultipartForm::new().add_part(
            "file",
            Part::bytes(b"same".as_slice()).file_name("same.pdf"),
        );
        let resp = server.post("/api/v1/upload/pdf").multipart(form).await;
        resp.assert_status_ok();
        ids.push(
            resp.json::<Value>()["file_id"]
                .as_str()
                .unwrap()
                .to_string(),
        );
    }

    assert_ne!(ids[0], ids[1]);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
}
