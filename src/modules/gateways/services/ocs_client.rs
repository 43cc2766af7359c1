use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::{json, Value};
use tracing::{debug, instrument};

use super::gateway_trait::OcsGateway;
use crate::config::OcsConfig;
use crate::core::error::{AppError, Result};

/// HTTP client for the OCS JSON API
///
/// Every operation goes to the same endpoint as a JSON POST; the API token
/// travels as the `token` query parameter.
pub struct OcsClient {
    client: Client,
    endpoint: Url,
}

impl OcsClient {
    pub fn new(config: &OcsConfig) -> Result<Self> {
        let endpoint = Url::parse_with_params(&config.base_url, &[("token", &config.api_token)])
            .map_err(|e| AppError::configuration(format!("Invalid OCS_API_URL: {}", e)))?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build OCS client: {}", e)))?;

        Ok(Self { client, endpoint })
    }

    /// Endpoint host, safe to log (the token is never included)
    pub fn host(&self) -> &str {
        self.endpoint.host_str().unwrap_or("")
    }
}

/// Decode a response body, wrapping anything that is not JSON as `{ "raw": text }`
pub fn decode_body(text: String) -> Value {
    match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(_) => json!({ "raw": text }),
    }
}

/// Drop the request URL from transport errors; it carries the API token
fn redact(err: reqwest::Error) -> AppError {
    AppError::HttpClient(err.without_url())
}

#[async_trait]
impl OcsGateway for OcsClient {
    #[instrument(skip(self, body), fields(host = %self.host()))]
    async fn call(&self, body: Value) -> Result<Value> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await
            .map_err(redact)?;

        let status = response.status();
        let text = response.text().await.map_err(redact)?;

        debug!(status = %status, bytes = text.len(), "OCS response received");

        Ok(decode_body(text))
    }

    fn name(&self) -> &str {
        "ocs"
    }
}
