use serde_json::json;

use super::client::ApiClient;
use super::types::{ApiError, FavoriteEntry, FavoriteRecord};

impl ApiClient {
    pub async fn get_favorites(&self) -> Result<Vec<FavoriteEntry>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/favorites", base_url))
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

    pub async fn add_favorite(&self, destination_id: i64) -> Result<FavoriteRecord, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/favorites", base_url))
            .headers(self.auth_headers())
            .json(&json!({ "destination_id": destination_id }))
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

    pub async fn remove_favorite(&self, destination_id: i64) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .delete(format!("{}/favorites/{}", base_url, destination_id))
            .headers(self.auth_headers())
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        self.handle_unauthorized_status(status);
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::error_body(response).await)
        }
    }

    /// Server-side bulk wipe. The local cache is cleared separately by the
    /// favorites store; logout never calls this.
    pub async fn clear_favorites(&self) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .delete(format!("{}/favorites/clear", base_url))
            .headers(self.auth_headers())
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        self.handle_unauthorized_status(status);
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::error_body(response).await)
        }
    }
}
