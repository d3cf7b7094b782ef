//! Folio Core Library
//!
//! This crate provides the domain models, error types, and configuration
//! shared by the Folio document-inspection components.

pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::{BaseConfig, Config, InspectionServiceConfig};
pub use error::{AppError, ErrorMetadata, LogLevel};
