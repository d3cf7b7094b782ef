//! Folio Processing Library
//!
//! Document inspection: format detection, page-count extraction, and upload
//! validation. Everything here is stateless and synchronous per call.

pub mod inspector;
pub mod validator;

pub use inspector::{DocumentInspector, InspectError, WORDS_PER_PAGE};
pub use validator::{DocumentValidator, ValidationError};
