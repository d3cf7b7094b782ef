use bytes::Bytes;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Document formats the inspector recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    /// Paginated format: the file structure carries an authoritative page
    /// count (PDF).
    Pdf,
    /// Flowed-text format: continuous text with no fixed page boundaries;
    /// the page count is estimated from the word count (DOCX).
    Docx,
}

impl DocumentFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
        }
    }

    /// Whether the page count for this format is an estimate rather than a
    /// figure read from the document structure.
    pub fn is_estimated(&self) -> bool {
        matches!(self, DocumentFormat::Docx)
    }
}

/// One uploaded document, as it arrives from a multipart request.
///
/// Transient: lives for the duration of a single inspection call and is
/// dropped once the response is produced.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub bytes: Bytes,
    pub content_type: Option<String>,
    pub filename: String,
}

impl UploadedDocument {
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Result of inspecting one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectionResult {
    pub page_count: u32,
    pub word_count: u32,
    pub format: DocumentFormat,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct InspectionResponse {
    pub page_count: u32,
    pub word_count: u32,
    pub file_name: String,
    pub file_size: u64,
    /// True when the page count is a words-per-page estimate (flowed-text
    /// formats) rather than the document's own structural figure.
    pub estimated: bool,
}

impl InspectionResponse {
    pub fn new(result: &InspectionResult, document: &UploadedDocument) -> Self {
        InspectionResponse {
            page_count: result.page_count,
            word_count: result.word_count,
            file_name: document.filename.clone(),
            file_size: document.size() as u64,
            estimated: result.format.is_estimated(),
        }
    }
}
