//! Data models for the application
//!
//! This module contains the data structures used throughout the inspection
//! service.

mod inspection;

// Re-export all models for convenient imports
pub use inspection::*;
