//! Errors from the admin backend boundary

use reqwest::StatusCode;

/// Response `code` the backend uses for an expired session
pub const SESSION_EXPIRED_CODE: &str = "SESSION_EXPIRED";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The session expired; local session state has been cleared and a
    /// redirect to the login route recorded
    #[error("session expired, please log in again")]
    SessionExpired,

    /// Any other non-success response, passed through for the caller
    #[error("request failed with {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status {
        status: StatusCode,
        code: Option<String>,
        message: Option<String>,
    },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid API base URL '{0}'")]
    InvalidBaseUrl(String),
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::SessionExpired => Some(StatusCode::UNAUTHORIZED),
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Network(e) => e.status(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
