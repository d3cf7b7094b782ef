//! Document Inspector
//!
//! Accepts one uploaded document, determines its format, and computes the
//! page count and word count that order pricing is based on. Two extraction
//! paths share one result type:
//!
//! - paginated formats (PDF) carry an authoritative page count in their
//!   structural metadata; the word count is not computed,
//! - flowed-text formats (DOCX) have no page boundaries; the page count is
//!   estimated from the word count.
//!
//! The only side effect is diagnostic logging of the detected counts.

mod flowed;
pub(crate) mod format;
mod paginated;

pub use flowed::WORDS_PER_PAGE;
pub use format::detect_format;

use folio_core::models::{DocumentFormat, InspectionResult, UploadedDocument};

/// Inspection failures.
///
/// Every byte-level parse failure collapses into `Unreadable`; no partial
/// result is ever returned.
#[derive(Debug, thiserror::Error)]
pub enum InspectError {
    #[error("unsupported document format (content type {content_type:?}, filename {filename:?})")]
    UnsupportedFormat {
        content_type: Option<String>,
        filename: String,
    },

    #[error("unreadable document")]
    Unreadable(#[source] anyhow::Error),
}

/// Stateless document inspector.
///
/// Each call runs to completion independently; concurrent invocations share
/// nothing. Callers wanting deadlines or concurrency limits impose them
/// externally.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentInspector;

impl DocumentInspector {
    pub fn new() -> Self {
        Self
    }

    pub fn inspect(&self, document: &UploadedDocument) -> Result<InspectionResult, InspectError> {
        let format = detect_format(document.content_type.as_deref(), &document.filename)
            .ok_or_else(|| InspectError::UnsupportedFormat {
                content_type: document.content_type.clone(),
                filename: document.filename.clone(),
            })?;

        let result = match format {
            DocumentFormat::Pdf => paginated::inspect(&document.bytes)?,
            DocumentFormat::Docx => flowed::inspect(&document.bytes)?,
        };

        tracing::debug!(
            filename = %document.filename,
            format = format.as_str(),
            page_count = result.page_count,
            word_count = result.word_count,
            "Document inspected"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn upload(bytes: Vec<u8>, content_type: Option<&str>, filename: &str) -> UploadedDocument {
        UploadedDocument {
            bytes: Bytes::from(bytes),
            content_type: content_type.map(String::from),
            filename: filename.to_string(),
        }
    }

    #[test]
    fn test_inspect_rejects_unrecognized_type_and_extension() {
        let document = upload(b"plain text".to_vec(), Some("text/plain"), "notes.txt");
        let err = DocumentInspector::new().inspect(&document).unwrap_err();
        assert!(matches!(err, InspectError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_inspect_corrupt_pdf_is_unreadable_not_a_crash() {
        let document = upload(
            b"%PDF-1.4 but nothing else of substance".to_vec(),
            Some("application/pdf"),
            "broken.pdf",
        );
        let err = DocumentInspector::new().inspect(&document).unwrap_err();
        assert!(matches!(err, InspectError::Unreadable(_)));
    }

    #[test]
    fn test_inspect_non_zip_docx_is_unreadable() {
        let document = upload(
            b"this is not a zip archive".to_vec(),
            Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
            "broken.docx",
        );
        let err = DocumentInspector::new().inspect(&document).unwrap_err();
        assert!(matches!(err, InspectError::Unreadable(_)));
    }
}
