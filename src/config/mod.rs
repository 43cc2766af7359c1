use crate::core::{AppError, Result};
use std::env;
use std::str::FromStr;

pub mod ocs;
pub mod report;
pub mod server;

pub use ocs::OcsConfig;
pub use report::ReportSettings;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub ocs: OcsConfig,
    pub report: ReportSettings,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            server: ServerConfig::from_env()?,
            ocs: OcsConfig::from_env()?,
            report: ReportSettings::from_env()?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::configuration("SERVER_PORT must be greater than 0"));
        }

        if self.report.max_concurrent == 0 {
            return Err(AppError::configuration("REPORT_MAX_CONCURRENT must be greater than 0"));
        }

        if self.ocs.api_token.trim().is_empty() {
            return Err(AppError::configuration("OCS_API_TOKEN must not be empty"));
        }

        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.app.env.eq_ignore_ascii_case("production")
    }
}

/// Read an optional variable, falling back to `default` when unset
pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> Result<T> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::configuration(format!("Invalid {}", key))),
        Err(_) => Ok(default),
    }
}

/// Read a required variable
pub(crate) fn env_required(key: &str) -> Result<String> {
    env::var(key).map_err(|_| AppError::configuration(format!("{} not set", key)))
}
