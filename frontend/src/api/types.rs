use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Registration does not authenticate: any token field a backend variant
/// returns alongside the user is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

/// A favorites row as the backend stores it. `destination_id` names the
/// favorited destination; older payloads carried it as a bare `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub destination_id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// `GET /favorites` answers either bare destination ids or wrapper records,
/// depending on the backend revision. Both collapse to a destination id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FavoriteEntry {
    Id(i64),
    Record(FavoriteRecord),
}

impl FavoriteEntry {
    pub fn destination_id(&self) -> Option<i64> {
        match self {
            FavoriteEntry::Id(id) => Some(*id),
            FavoriteEntry::Record(record) => record.destination_id.or(record.id),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.message
    }
}

impl ApiError {
    fn with_code(message: impl Into<String>, code: &str) -> Self {
        Self {
            message: message.into(),
            code: Some(code.to_string()),
            details: None,
        }
    }

    pub fn request_failed(message: impl Into<String>) -> Self {
        Self::with_code(message, "REQUEST_FAILED")
    }

    pub fn parse_failed(message: impl Into<String>) -> Self {
        Self::with_code(message, "PARSE_FAILED")
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::with_code(message, "UNKNOWN")
    }
}
