//! API error types for JIRA client.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur when interacting with the JIRA API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The profile is incomplete or invalid; no request was sent.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// The server could not be reached, so no status code is available.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Authentication failed - invalid login or API token.
    #[error("Authentication failed: invalid credentials")]
    Unauthorized,

    /// JIRA refuses the credentials until an interactive login (e.g. a captcha)
    /// has been completed in the browser.
    #[error("Access denied: complete the interactive login or captcha in a browser first")]
    Forbidden,

    /// Resource not found, usually a wrong path or issue key.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Any other 4xx response.
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// JIRA server error.
    #[error("JIRA server error: {0}")]
    ServerError(String),

    /// Invalid response from the API.
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    /// Keyring error when storing/retrieving tokens.
    #[error("Keyring error: {0}")]
    Keyring(String),
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// Create an error from an HTTP status code.
    ///
    /// Only meaningful for statuses outside the 200-399 success range.
    pub fn from_status(status: reqwest::StatusCode, context: &str) -> Self {
        match status.as_u16() {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound(context.to_string()),
            400..=499 => ApiError::BadRequest(format!("HTTP {}: {}", status, context)),
            500..=u16::MAX => ApiError::ServerError(format!("HTTP {}: {}", status, context)),
            _ => ApiError::InvalidResponse(format!("Unexpected HTTP {}: {}", status, context)),
        }
    }

    /// Get a user-friendly message for display.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Configuration(e) => format!("JIRA is not configured: {}", e),
            ApiError::Network(_) => {
                "Connection failed. Please check the JIRA URL and your network.".to_string()
            }
            ApiError::Unauthorized => {
                "Authentication failed. Please check your login and API token.".to_string()
            }
            ApiError::Forbidden => {
                "JIRA requires an interactive login. Sign in through the browser and try again."
                    .to_string()
            }
            ApiError::NotFound(resource) => format!("'{}' was not found.", resource),
            ApiError::BadRequest(_) => "JIRA rejected the request as invalid.".to_string(),
            ApiError::ServerError(_) => "JIRA server error. Please try again later.".to_string(),
            ApiError::InvalidResponse(_) => "Unexpected response from JIRA.".to_string(),
            ApiError::Keyring(_) => "Could not access secure token storage.".to_string(),
        }
    }
}
