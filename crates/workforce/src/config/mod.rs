use std::env;
use std::fmt;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::listing::DEFAULT_PAGE_SIZE;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub directory: DirectoryConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let snapshot_path = env::var("WORKFORCE_DATA_PATH")
            .ok()
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from);

        let page_size = match env::var("WORKFORCE_PAGE_SIZE") {
            Ok(raw) => raw
                .trim()
                .parse::<NonZeroUsize>()
                .map_err(|_| ConfigError::InvalidPageSize { value: raw })?,
            Err(_) => DEFAULT_PAGE_SIZE,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            directory: DirectoryConfig {
                snapshot_path,
                page_size,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Where the directory data comes from and how lists are paged.
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    pub snapshot_path: Option<PathBuf>,
    pub page_size: NonZeroUsize,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPageSize { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPageSize { value } => write!(
                f,
                "WORKFORCE_PAGE_SIZE must be a positive integer (found '{}')",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
