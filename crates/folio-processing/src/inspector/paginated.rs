//! Paginated extraction path (PDF).
//!
//! The page count is read from the document's own page tree, which is the
//! authoritative figure for this format. The word count is not computed.

use anyhow::anyhow;
use lopdf::Document;

use folio_core::models::{DocumentFormat, InspectionResult};

use super::InspectError;

pub(super) fn inspect(bytes: &[u8]) -> Result<InspectionResult, InspectError> {
    let document = Document::load_mem(bytes)
        .map_err(|e| InspectError::Unreadable(anyhow!(e).context("parsing PDF structure")))?;

    if document.is_encrypted() {
        return Err(InspectError::Unreadable(anyhow!(
            "document is password-protected"
        )));
    }

    // Pass-through, unfloored: a malformed document with an empty page tree
    // surfaces as page_count = 0. Only the flowed-text estimate is floored
    // at 1. Downstream pricing may rely on this, so it stays observable.
    let page_count = document.get_pages().len() as u32;

    Ok(InspectionResult {
        page_count,
        word_count: 0,
        format: DocumentFormat::Pdf,
    })
}
