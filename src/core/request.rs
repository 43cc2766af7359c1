use serde::de::DeserializeOwned;

use crate::core::{AppError, Result};

/// Parse a JSON request body where an empty body means "all defaults"
pub fn parse_optional_json<T>(body: &[u8]) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice(body)
        .map_err(|e| AppError::validation(format!("Invalid JSON body: {}", e)))
}
