//! Configuration module
//!
//! Env-driven configuration for the inspection service. Everything is read
//! once at startup by `Config::from_env` and handed to the process entry
//! point; nothing reads the environment at request time.

use std::env;

/// Base configuration shared by every binary
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
}

/// Inspection service configuration
#[derive(Clone, Debug)]
pub struct InspectionServiceConfig {
    pub base: BaseConfig,
    pub max_document_size_bytes: usize,
    pub document_allowed_extensions: Vec<String>,
    pub document_allowed_content_types: Vec<String>,
}

/// Application configuration (inspection service).
#[derive(Clone, Debug)]
pub struct Config(pub Box<InspectionServiceConfig>);

impl Config {
    fn as_service(&self) -> &InspectionServiceConfig {
        &self.0
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let environment = self.as_service().base.environment.to_lowercase();
        environment == "production" || environment == "prod"
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        let config = InspectionServiceConfig::from_env()?;
        Ok(Config(Box::new(config)))
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.as_service().validate()
    }

    // Convenience getters for common fields
    pub fn server_port(&self) -> u16 {
        self.as_service().base.server_port
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.as_service().base.cors_origins
    }

    pub fn environment(&self) -> &str {
        &self.as_service().base.environment
    }

    pub fn max_document_size_bytes(&self) -> usize {
        self.as_service().max_document_size_bytes
    }

    pub fn document_allowed_extensions(&self) -> &[String] {
        &self.as_service().document_allowed_extensions
    }

    pub fn document_allowed_content_types(&self) -> &[String] {
        &self.as_service().document_allowed_content_types
    }
}

/// Extensions the inspector has an extraction path for.
const RECOGNIZED_EXTENSIONS: [&str; 2] = ["pdf", "docx"];

impl InspectionServiceConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        const MAX_DOCUMENT_SIZE_MB: usize = 50;

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins_str = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());

        let max_document_size_mb = env::var("MAX_DOCUMENT_SIZE_MB")
            .unwrap_or_else(|_| MAX_DOCUMENT_SIZE_MB.to_string())
            .parse::<usize>()
            .unwrap_or(MAX_DOCUMENT_SIZE_MB);

        let document_allowed_extensions = env::var("DOCUMENT_ALLOWED_EXTENSIONS")
            .unwrap_or_else(|_| "pdf,docx".to_string())
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        let document_allowed_content_types = env::var("DOCUMENT_ALLOWED_CONTENT_TYPES")
            .unwrap_or_else(|_| {
                "application/pdf,application/vnd.openxmlformats-officedocument.wordprocessingml.document"
                    .to_string()
            })
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            base: BaseConfig {
                server_port: env::var("PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .unwrap_or(3000),
                cors_origins: cors_origins_str
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
                environment,
            },
            max_document_size_bytes: max_document_size_mb * 1024 * 1024,
            document_allowed_extensions,
            document_allowed_content_types,
        })
    }

    /// Fail fast on configuration that the inspector cannot honor.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.max_document_size_bytes == 0 {
            anyhow::bail!("MAX_DOCUMENT_SIZE_MB must be greater than zero");
        }

        if self.document_allowed_extensions.is_empty() {
            anyhow::bail!("DOCUMENT_ALLOWED_EXTENSIONS must not be empty");
        }

        if self.document_allowed_content_types.is_empty() {
            anyhow::bail!("DOCUMENT_ALLOWED_CONTENT_TYPES must not be empty");
        }

        for extension in &self.document_allowed_extensions {
            if !RECOGNIZED_EXTENSIONS.contains(&extension.as_str()) {
                anyhow::bail!(
                    "DOCUMENT_ALLOWED_EXTENSIONS contains '{}', but the inspector only handles {:?}",
                    extension,
                    RECOGNIZED_EXTENSIONS
                );
            }
        }

        Ok(())
    }
}
