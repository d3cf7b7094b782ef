//! Application state.
//!
//! AppState is constructed once by the process entry point from the loaded
//! configuration and shared immutably behind an `Arc`; handlers never reach
//! for ambient globals or the environment.

use folio_core::Config;
use folio_processing::{DocumentInspector, DocumentValidator};

/// Limits and allowlists for uploaded documents (from Config).
#[derive(Clone, Debug)]
pub struct DocumentLimits {
    pub max_file_size: usize,
    pub allowed_extensions: Vec<String>,
    pub allowed_content_types: Vec<String>,
}

pub struct AppState {
    pub config: Config,
    pub documents: DocumentLimits,
    pub inspector: DocumentInspector,
}

impl AppState {
    pub fn from_config(config: Config) -> Self {
        let documents = DocumentLimits {
            max_file_size: config.max_document_size_bytes(),
            allowed_extensions: config.document_allowed_extensions().to_vec(),
            allowed_content_types: config.document_allowed_content_types().to_vec(),
        };

        Self {
            config,
            documents,
            inspector: DocumentInspector::new(),
        }
    }

    /// Validator over the configured document limits.
    pub fn document_validator(&self) -> DocumentValidator {
        DocumentValidator::new(
            self.documents.max_file_size,
            self.documents.allowed_extensions.clone(),
            self.documents.allowed_content_types.clone(),
        )
    }
}
