use std::time::Duration;

use super::{env_or, env_required};
use crate::core::Result;

/// Connection settings for the OCS management API
#[derive(Debug, Clone)]
pub struct OcsConfig {
    /// Endpoint URL, without the token query parameter
    pub base_url: String,
    pub api_token: String,
    /// Per-call timeout in seconds; 0 disables it
    pub timeout_secs: u64,
}

impl OcsConfig {
    pub fn from_env() -> Result<Self> {
        Ok(OcsConfig {
            base_url: env_or(
                "OCS_API_URL",
                "https://ocs-api.esimvault.cloud/v1".to_string(),
            )?,
            api_token: env_required("OCS_API_TOKEN")?,
            timeout_secs: env_or("OCS_TIMEOUT_SECS", 30)?,
        })
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}
