use async_trait::async_trait;
use serde_json::Value;

use crate::core::Result;
use crate::modules::gateways::models::OcsRequest;

/// Single-call access to the OCS management API.
///
/// `call` returns whatever JSON the remote produced, including error payloads
/// and the `{ "raw": ... }` wrapper for non-JSON bodies. Only transport-level
/// failures surface as `Err`.
#[async_trait]
pub trait OcsGateway: Send + Sync {
    /// Send one request body and return the decoded response
    async fn call(&self, body: Value) -> Result<Value>;

    /// Serialize a typed operation and send it
    async fn execute(&self, request: &OcsRequest) -> Result<Value> {
        let body = request.to_body()?;
        self.call(body).await
    }

    /// Gateway name for logging
    fn name(&self) -> &str;
}
