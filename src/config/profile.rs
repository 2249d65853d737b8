//! JIRA connection profile.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ConfigError, Result};

/// Base URL used when none is configured.
pub const DEFAULT_URL: &str = "http://localhost:8081/";

/// Connection details for a JIRA instance.
///
/// Login and token are optional here so a profile can be assembled in steps;
/// the client reports a missing credential on the first call instead.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Profile {
    /// The JIRA instance URL (e.g., "https://jira.example.com").
    pub url: String,

    /// The user's login name.
    pub login: Option<String>,

    /// The API token paired with the login.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Profile {
    /// Create a fully populated profile.
    pub fn new(url: impl Into<String>, login: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            login: Some(login.into()),
            token: Some(token.into()),
        }
    }

    /// Replace the base URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the login name.
    pub fn with_login(mut self, login: impl Into<String>) -> Self {
        self.login = Some(login.into());
        self
    }

    /// Set the API token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Validate this profile.
    ///
    /// Only the URL is checked; credentials may legitimately still be missing.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::ValidationError` with details if validation fails.
    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "URL cannot be empty".to_string(),
            ));
        }

        if !self.url.starts_with("https://") && !self.url.starts_with("http://") {
            return Err(ConfigError::ValidationError(format!(
                "URL '{}' must start with http:// or https://",
                self.url
            )));
        }

        Ok(())
    }

    /// Borrow the login and token, failing if either is missing or blank.
    pub fn credentials(&self) -> Result<(&str, &str)> {
        let login = non_blank(self.login.as_deref()).ok_or(ConfigError::MissingCredential("login"))?;
        let token = non_blank(self.token.as_deref()).ok_or(ConfigError::MissingCredential("token"))?;
        Ok((login, token))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            login: None,
            token: None,
        }
    }
}

impl fmt::Debug for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Profile")
            .field("url", &self.url)
            .field("login", &self.login)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
