//! API constants
//!
//! Routes and the OpenAPI spec are versioned under one prefix.

/// API base path prefix
pub const API_PREFIX: &str = "/api/v0";
