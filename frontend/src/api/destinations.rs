use serde_json::Value;

use super::client::ApiClient;
use super::types::{ApiError, Destination};

impl ApiClient {
    pub async fn get_destinations(&self) -> Result<Vec<Destination>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/destinations", base_url))
            .headers(self.auth_headers())
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        self.handle_unauthorized_status(status);
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::parse_failed(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_body(response).await)
        }
    }

    /// The detail endpoint answers either the destination object or a
    /// one-element array wrapping it, depending on the backend revision.
    pub async fn get_destination(&self, id: i64) -> Result<Option<Destination>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/destinations/{}", base_url, id))
            .headers(self.auth_headers())
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        self.handle_unauthorized_status(status);
        if !status.is_success() {
            return Err(Self::error_body(response).await);
        }

        let value: Value = response
            .json()
            .await
            .map_err(|e| ApiError::parse_failed(format!("Failed to parse response: {}", e)))?;
        let payload = match value {
            Value::Array(items) => items.into_iter().next(),
            Value::Object(_) => Some(value),
            _ => None,
        };
        payload
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| ApiError::parse_failed(format!("Failed to parse response: {}", e)))
    }
}
