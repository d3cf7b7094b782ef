//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p folio-api --test inspections_test`
//! or `cargo test -p folio-api`.

pub mod fixtures;

use axum_test::TestServer;
use folio_api::constants;
use folio_api::setup::routes;
use folio_api::state::AppState;
use folio_core::{BaseConfig, Config, InspectionServiceConfig};
use std::sync::Arc;

/// API path prefix for tests (e.g. `/api/v0`).
pub fn api_path(path: &str) -> String {
    format!("{}{}", constants::API_PREFIX, path)
}

/// Configuration used by the integration tests; small size ceiling so the
/// oversize path is reachable with in-memory fixtures.
pub fn test_config() -> Config {
    Config(Box::new(InspectionServiceConfig {
        base: BaseConfig {
            server_port: 0,
            cors_origins: vec!["*".to_string()],
            environment: "test".to_string(),
        },
        max_document_size_bytes: 1024 * 1024,
        document_allowed_extensions: vec!["pdf".to_string(), "docx".to_string()],
        document_allowed_content_types: vec![
            "application/pdf".to_string(),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document".to_string(),
        ],
    }))
}

/// Setup test server over a fresh router; no external dependencies.
pub fn setup_test_app() -> TestServer {
    let config = test_config();
    config.validate().expect("test config is valid");

    let state = Arc::new(AppState::from_config(config));
    let router =
        routes::setup_routes(&state.config, state.clone()).expect("router setup");

    TestServer::new(router).expect("test server")
}
