use super::client::ApiClient;
use super::types::{ApiError, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

impl ApiClient {
    /// Credential exchange. Deliberately bypasses the bearer-header path so a
    /// stale token is never attached to a login attempt, and a 401 here means
    /// bad credentials, not an expired session.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/login", base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::parse_failed(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_body(response).await)
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/register", base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::parse_failed(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_body(response).await)
        }
    }
}
