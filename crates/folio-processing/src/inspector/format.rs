//! Format detection: declared MIME type first, file extension as fallback.

use std::path::Path;

use folio_core::models::DocumentFormat;

pub(crate) const PDF_CONTENT_TYPE: &str = "application/pdf";
pub(crate) const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Declared types that say nothing about the actual format; extension
/// matching takes over for these.
pub(crate) fn is_generic_content_type(content_type: &str) -> bool {
    let normalized = content_type.trim().to_lowercase();
    normalized.is_empty()
        || normalized == "application/octet-stream"
        || normalized == "binary/octet-stream"
}

/// Classify an upload by its declared content type, falling back to the file
/// extension when the declared type is absent or generic. Returns `None` for
/// anything that is neither of the two recognized formats.
pub fn detect_format(content_type: Option<&str>, filename: &str) -> Option<DocumentFormat> {
    if let Some(declared) = content_type.filter(|ct| !is_generic_content_type(ct)) {
        return match declared.trim().to_lowercase().as_str() {
            PDF_CONTENT_TYPE => Some(DocumentFormat::Pdf),
            DOCX_CONTENT_TYPE => Some(DocumentFormat::Docx),
            _ => None,
        };
    }

    let extension = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())?;

    match extension.as_str() {
        "pdf" => Some(DocumentFormat::Pdf),
        "docx" => Some(DocumentFormat::Docx),
        _ => None,
    }
}
