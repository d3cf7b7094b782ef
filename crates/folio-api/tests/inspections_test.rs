//! Inspection API integration tests.
//!
//! Run with: `cargo test -p folio-api --test inspections_test`

mod helpers;

use axum_test::multipart::{MultipartForm, Part};
use helpers::fixtures::{docx_with_words, pdf_with_pages, DOCX_CONTENT_TYPE};
use helpers::{api_path, setup_test_app};
use serde_json::Value;

fn file_part(bytes: Vec<u8>, filename: &str, content_type: &str) -> MultipartForm {
    MultipartForm::new().add_part(
        "file",
        Part::bytes(bytes).file_name(filename).mime_type(content_type),
    )
}

#[tokio::test]
async fn test_inspect_pdf_returns_structural_page_count() {
    let server = setup_test_app();

    let response = server
        .post(&api_path("/inspections"))
        .multipart(file_part(pdf_with_pages(3), "contract.pdf", "application/pdf"))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["page_count"], 3);
    assert_eq!(body["word_count"], 0);
    assert_eq!(body["file_name"], "contract.pdf");
    assert_eq!(body["estimated"], false);
    assert!(body["file_size"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn test_inspect_docx_returns_word_count_estimate() {
    let server = setup_test_app();

    let response = server
        .post(&api_path("/inspections"))
        .multipart(file_part(docx_with_words(276), "letter.docx", DOCX_CONTENT_TYPE))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["word_count"], 276);
    assert_eq!(body["page_count"], 2);
    assert_eq!(body["estimated"], true);
}

#[tokio::test]
async fn test_inspect_empty_docx_floors_at_one_page() {
    let server = setup_test_app();

    let response = server
        .post(&api_path("/inspections"))
        .multipart(file_part(docx_with_words(0), "empty.docx", DOCX_CONTENT_TYPE))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["word_count"], 0);
    assert_eq!(body["page_count"], 1);
}

#[tokio::test]
async fn test_inspect_docx_without_content_type_uses_extension() {
    let server = setup_test_app();

    let response = server
        .post(&api_path("/inspections"))
        .multipart(file_part(
            docx_with_words(10),
            "letter.docx",
            "application/octet-stream",
        ))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["word_count"], 10);
}

#[tokio::test]
async fn test_inspect_without_file_part_is_invalid_input() {
    let server = setup_test_app();

    let response = server
        .post(&api_path("/inspections"))
        .multipart(MultipartForm::new().add_text("note", "no file here"))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_inspect_unrecognized_format_is_unsupported() {
    let server = setup_test_app();

    let response = server
        .post(&api_path("/inspections"))
        .multipart(file_part(b"plain text".to_vec(), "notes.txt", "text/plain"))
        .await;

    assert_eq!(response.status_code(), 415);
    let body: Value = response.json();
    assert_eq!(body["code"], "UNSUPPORTED_FORMAT");
}

#[tokio::test]
async fn test_inspect_corrupt_pdf_is_unreadable() {
    let server = setup_test_app();

    let response = server
        .post(&api_path("/inspections"))
        .multipart(file_part(
            b"%PDF-1.4 this is not a real pdf".to_vec(),
            "broken.pdf",
            "application/pdf",
        ))
        .await;

    assert_eq!(response.status_code(), 422);
    let body: Value = response.json();
    assert_eq!(body["code"], "UNREADABLE_DOCUMENT");
}

/// Both inspection failures instruct manual page-count entry with the same
/// client-facing message; only the machine code differs.
#[tokio::test]
async fn test_unsupported_and_unreadable_share_client_message() {
    let server = setup_test_app();

    let unsupported = server
        .post(&api_path("/inspections"))
        .multipart(file_part(b"plain text".to_vec(), "notes.txt", "text/plain"))
        .await;
    let unreadable = server
        .post(&api_path("/inspections"))
        .multipart(file_part(
            b"%PDF-1.4 garbage".to_vec(),
            "broken.pdf",
            "application/pdf",
        ))
        .await;

    let unsupported_body: Value = unsupported.json();
    let unreadable_body: Value = unreadable.json();

    assert_eq!(unsupported_body["error"], unreadable_body["error"]);
    assert_ne!(unsupported_body["code"], unreadable_body["code"]);
    assert_eq!(
        unsupported_body["suggested_action"],
        unreadable_body["suggested_action"]
    );
}

#[tokio::test]
async fn test_inspect_empty_file_is_invalid_input() {
    let server = setup_test_app();

    let response = server
        .post(&api_path("/inspections"))
        .multipart(file_part(Vec::new(), "empty.pdf", "application/pdf"))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_inspect_oversized_upload_is_rejected() {
    let server = setup_test_app();

    // Test config caps documents at 1 MiB; the body limit layer rejects the
    // request before any parsing happens.
    let oversized = vec![0u8; 2 * 1024 * 1024];
    let response = server
        .post(&api_path("/inspections"))
        .multipart(file_part(oversized, "big.pdf", "application/pdf"))
        .await;

    assert_eq!(response.status_code(), 413);
}

#[tokio::test]
async fn test_inspect_mismatched_extension_and_content_type() {
    let server = setup_test_app();

    let response = server
        .post(&api_path("/inspections"))
        .multipart(file_part(
            docx_with_words(5),
            "letter.docx",
            "application/pdf",
        ))
        .await;

    assert_eq!(response.status_code(), 415);
    let body: Value = response.json();
    assert_eq!(body["code"], "UNSUPPORTED_FORMAT");
}
